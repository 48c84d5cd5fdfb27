use std::fmt::{self, Write};

//─────────────────────────────────────────────────────────────────────────────

/// Identifies one wildcard bucket of the dictionary.
///
/// A bucket holds every word that agrees with the others at all character
/// positions except `position`. The key stores the word with that character
/// removed (`stem`) rather than replaced by a placeholder, so no character of
/// a real word can ever collide with the wildcard. Two distinct words share a
/// key iff they have the same length and differ exactly at `position`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BucketKey {
    position: usize,
    stem: String,
}

impl BucketKey {
    /// Builds the key of `word` with the character at `position` (counted in
    /// chars, not bytes) wildcarded. Returns `None` if `position` is past the
    /// end of the word.
    pub fn new(word: &str, position: usize) -> Option<Self> {
        let mut stem = String::with_capacity(word.len());
        let mut wildcarded = false;
        for (i, c) in word.chars().enumerate() {
            if i == position {
                wildcarded = true;
            } else {
                stem.push(c);
            }
        }
        wildcarded.then_some(Self { position, stem })
    }

    /// Returns one key per character position of `word`.
    pub fn all_for_word(word: &str) -> impl Iterator<Item = BucketKey> + '_ {
        (0..word.chars().count()).filter_map(move |position| BucketKey::new(word, position))
    }
}

/// Renders the key with `_` at the wildcard position, e.g. `c_t`.
impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stem_len = 0;
        for (i, c) in self.stem.chars().enumerate() {
            if i == self.position {
                f.write_char('_')?;
            }
            f.write_char(c)?;
            stem_len += 1;
        }
        if self.position == stem_len {
            f.write_char('_')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BucketKey;

    #[test]
    fn test_display_places_wildcard() {
        assert_eq!(BucketKey::new("cat", 0).unwrap().to_string(), "_at");
        assert_eq!(BucketKey::new("cat", 1).unwrap().to_string(), "c_t");
        assert_eq!(BucketKey::new("cat", 2).unwrap().to_string(), "ca_");
        assert_eq!(BucketKey::new("a", 0).unwrap().to_string(), "_");
    }

    #[test]
    fn test_position_out_of_range() {
        assert!(BucketKey::new("cat", 3).is_none());
        assert!(BucketKey::new("", 0).is_none());
    }

    #[test]
    fn test_one_edit_words_share_a_key() {
        let cat = BucketKey::new("cat", 1).unwrap();
        let cot = BucketKey::new("cot", 1).unwrap();
        assert_eq!(cat, cot);
        // Same stem at a different position is a different bucket.
        assert_ne!(BucketKey::new("cat", 0), BucketKey::new("cat", 1));
    }

    #[test]
    fn test_different_lengths_never_share_a_key() {
        let short: Vec<_> = BucketKey::all_for_word("cat").collect();
        let long: Vec<_> = BucketKey::all_for_word("cats").collect();
        assert!(short.iter().all(|key| !long.contains(key)));
    }

    #[test]
    fn test_underscore_is_an_ordinary_character() {
        // "a_c" and "abc" really do differ only at position 1.
        assert_eq!(BucketKey::new("a_c", 1), BucketKey::new("abc", 1));
        // "a_c" must not land in the bucket of "abd" at position 2.
        assert_ne!(BucketKey::new("a_c", 2), BucketKey::new("abd", 2));
    }

    #[test]
    fn test_positions_count_chars_not_bytes() {
        let keys: Vec<_> = BucketKey::all_for_word("café").collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[3].to_string(), "caf_");
        assert_eq!(BucketKey::new("café", 3), BucketKey::new("cafe", 3));
    }
}
