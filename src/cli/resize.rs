//! Resize command implementation.
//!
//! Pads every PNG in a folder to a target aspect ratio so the sprites can be
//! swapped onto a mesh of that ratio without distortion.

use std::path::PathBuf;

use clap::Args;

use crate::batch::{run_batch, BatchJob, BatchReport};
use crate::config::{JobConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::AspectRatio;

/// Pad a folder of sprites to a target aspect ratio for sprite swapping
#[derive(Args, Debug)]
pub struct ResizeArgs {
    /// Folder containing the source PNG images
    #[arg(required = true)]
    pub source: PathBuf,

    /// Folder to write the padded images into (created if missing)
    #[arg(required = true)]
    pub destination: PathBuf,

    /// Target aspect ratio of the mesh, as a number or W:H [default: 1.0]
    #[arg(long)]
    pub ratio: Option<String>,

    /// Extra padding multiplier; values below 1.0 are treated as 1.0 [default: 1.05]
    #[arg(long)]
    pub fudge: Option<f64>,

    /// Horizontal shift of the pasted sprite in pixels [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub offset_x: Option<i32>,

    /// Vertical shift of the pasted sprite in pixels [default: 0]
    #[arg(long, allow_negative_numbers = true)]
    pub offset_y: Option<i32>,

    /// Keep processing after a file fails and report all failures at the end
    #[arg(long)]
    pub keep_going: bool,

    /// Job file with default settings (default: ./spriteprep.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ResizeArgs {
    /// Settings given on the command line, as a config layer.
    fn as_config(&self) -> Result<JobConfig> {
        let ratio = match &self.ratio {
            Some(text) => Some(text.parse::<AspectRatio>()?.get()),
            None => None,
        };

        Ok(JobConfig {
            ratio,
            fudge: self.fudge,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            keep_going: self.keep_going.then_some(true),
        })
    }
}

/// Resolve the job from the config file and flags, validating everything
/// before any file is touched.
pub fn build_job(args: &ResizeArgs, printer: &Printer) -> Result<BatchJob> {
    let file_config = match &args.config {
        Some(path) => {
            printer.verbose("Config", &display_path(path));
            JobConfig::load(path)?
        }
        None => {
            let cwd = std::env::current_dir()?;
            let found = JobConfig::discover(&cwd)?;
            if found.is_some() {
                printer.verbose("Config", CONFIG_FILENAME);
            }
            found.unwrap_or_default()
        }
    };

    let config = file_config.overlay(args.as_config()?);
    let params = config.resize_params()?;

    Ok(BatchJob::new(&args.source, &args.destination, params).with_policy(config.failure_policy()))
}

pub fn run(args: ResizeArgs, printer: &Printer) -> Result<BatchReport> {
    let job = build_job(&args, printer)?;

    printer.info(
        "Resizing",
        &format!(
            "ratio {}, fudge {}, offset ({}, {})",
            job.params.ratio,
            job.params.fudge.get(),
            job.params.offset.x,
            job.params.offset.y
        ),
    );

    let report = run_batch(&job, printer)?;

    printer.success(
        "Wrote",
        &format!(
            "{} into {}",
            plural(report.processed(), "file", "files"),
            printer.cyan(&display_path(&job.destination))
        ),
    );

    for (path, error) in report.failures() {
        printer.error("Failed", &format!("{}: {}", display_path(path), error));
    }

    report.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FailurePolicy;
    use crate::error::SpriteError;
    use crate::types::Offset;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn args(source: PathBuf, destination: PathBuf) -> ResizeArgs {
        ResizeArgs {
            source,
            destination,
            ratio: None,
            fudge: None,
            offset_x: None,
            offset_y: None,
            keep_going: false,
            config: None,
        }
    }

    #[test]
    fn test_build_job_from_flags() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("empty.yaml");
        std::fs::write(&config, "").unwrap();

        let mut a = args(dir.path().join("in"), dir.path().join("out"));
        a.ratio = Some("3:4".to_string());
        a.fudge = Some(0.9);
        a.offset_x = Some(-2);
        a.keep_going = true;
        a.config = Some(config);

        let job = build_job(&a, &Printer::new()).unwrap();

        assert_eq!(job.params.ratio.get(), 0.75);
        assert_eq!(job.params.fudge.get(), 1.0);
        assert_eq!(job.params.offset, Offset::new(-2, 0));
        assert_eq!(job.policy, FailurePolicy::KeepGoing);
    }

    #[test]
    fn test_build_job_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("job.yaml");
        std::fs::write(&config, "ratio: 0.5\nfudge: 1.2\noffset_y: 7\n").unwrap();

        let mut a = args(dir.path().join("in"), dir.path().join("out"));
        a.ratio = Some("2".to_string());
        a.config = Some(config);

        let job = build_job(&a, &Printer::new()).unwrap();

        assert_eq!(job.params.ratio.get(), 2.0);
        assert_eq!(job.params.fudge.get(), 1.2);
        assert_eq!(job.params.offset, Offset::new(0, 7));
        assert_eq!(job.policy, FailurePolicy::Abort);
    }

    #[test]
    fn test_build_job_rejects_bad_ratio() {
        let dir = tempdir().unwrap();
        let mut a = args(dir.path().join("in"), dir.path().join("out"));
        a.ratio = Some("-1".to_string());

        let err = build_job(&a, &Printer::new()).unwrap_err();
        assert!(matches!(err, SpriteError::InvalidParameter { .. }));
    }

    #[test]
    fn test_run_writes_files() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let config = src.path().join("job.yaml");
        std::fs::write(&config, "fudge: 1.0\n").unwrap();

        let mut img = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 0, 0]));
        img.put_pixel(5, 5, Rgba([255, 255, 255, 255]));
        img.save(src.path().join("dot.png")).unwrap();

        let mut a = args(src.path().to_path_buf(), dst.path().to_path_buf());
        a.config = Some(config);

        let report = run(a, &Printer::new()).unwrap();

        assert_eq!(report.processed(), 1);
        // 1x1 content at ratio 1.0 -> 3x3 canvas; center 1.0 - 0.5 truncates to 0
        let out = image::open(dst.path().join("dot.png")).unwrap().to_rgba8();
        assert_eq!(out.dimensions(), (3, 3));
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
    }
}
