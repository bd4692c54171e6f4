pub mod completions;
pub mod extract;
pub mod layout;
pub mod resize;

use clap::{Parser, Subcommand};

use crate::output::Verbosity;

/// spriteprep - PSD layer export and sprite swap preparation
#[derive(Parser, Debug)]
#[command(name = "spriteprep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print extra detail for each file
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export every PSD layer as a separate PNG image
    Extract(extract::ExtractArgs),

    /// Write a JSON layout (canvas size and layer regions) for a PSD
    Layout(layout::LayoutArgs),

    /// Pad a folder of sprites to a target aspect ratio for sprite swapping
    Resize(resize::ResizeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
