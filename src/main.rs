use word_ladder::app::{self, Cli, Invocation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::from_args(std::env::args_os()) {
        Ok(Invocation::Run(cli)) => app::run_app(cli)?,
        Ok(Invocation::Usage) => println!("{}", app::USAGE),
        Err(e) => e.exit(),
    }
    Ok(())
}
