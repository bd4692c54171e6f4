//! Extract command implementation.
//!
//! Exports each layer of a PSD document as `<layer name>.png`.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::document::{DocumentReader, PsdReader};
use crate::error::Result;
use crate::extract::write_layer_images;
use crate::output::{display_path, plural, Printer};

/// Export every PSD layer as a separate PNG image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// PSD document to read
    #[arg(required = true)]
    pub input: PathBuf,

    /// Folder to write layer images into (created if missing)
    #[arg(required = true)]
    pub output: PathBuf,
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<usize> {
    run_with(&PsdReader, &args.input, &args.output, printer)
}

/// Run the extractor against any document reader.
pub fn run_with(
    reader: &dyn DocumentReader,
    input: &Path,
    output: &Path,
    printer: &Printer,
) -> Result<usize> {
    printer.status("Loading", &display_path(input));
    let document = reader.read(input)?;
    printer.verbose(
        "Canvas",
        &format!(
            "{}x{}, {}",
            document.width,
            document.height,
            plural(document.layers.len(), "layer", "layers")
        ),
    );

    let written = write_layer_images(&document, output, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} into {}",
            plural(written.len(), "layer image", "layer images"),
            display_path(output)
        ),
    );

    Ok(written.len())
}
