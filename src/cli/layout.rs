//! Layout command implementation.
//!
//! Describes a PSD's canvas and layer regions as JSON.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::document::{DocumentReader, PsdReader};
use crate::error::Result;
use crate::layout::Layout;
use crate::output::{display_path, plural, Printer};

/// Write a JSON layout (canvas size and layer regions) for a PSD
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// PSD document to read
    #[arg(required = true)]
    pub input: PathBuf,

    /// JSON file to write (default: print to stdout)
    pub output: Option<PathBuf>,
}

pub fn run(args: LayoutArgs, printer: &Printer) -> Result<Layout> {
    run_with(&PsdReader, &args.input, args.output.as_deref(), printer)
}

/// Run the layout describer against any document reader.
pub fn run_with(
    reader: &dyn DocumentReader,
    input: &Path,
    output: Option<&Path>,
    printer: &Printer,
) -> Result<Layout> {
    printer.status("Loading", &display_path(input));
    let document = reader.read(input)?;
    let layout = Layout::from_document(&document);

    match output {
        Some(path) => {
            layout.write(path, printer)?;
            printer.success(
                "Finished",
                &format!(
                    "{} to {}",
                    plural(layout.regions.len(), "region", "regions"),
                    display_path(path)
                ),
            );
        }
        None => println!("{}", layout.to_json()?),
    }

    Ok(layout)
}
