use clap::Parser;
use miette::Result;
use spriteprep::cli::{Cli, Commands};
use spriteprep::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::with_verbosity(cli.verbosity());

    match cli.command {
        Commands::Extract(args) => {
            spriteprep::cli::extract::run(args, &printer)?;
        }
        Commands::Layout(args) => {
            spriteprep::cli::layout::run(args, &printer)?;
        }
        Commands::Resize(args) => {
            spriteprep::cli::resize::run(args, &printer)?;
        }
        Commands::Completions(args) => spriteprep::cli::completions::run(args)?,
    }

    Ok(())
}
