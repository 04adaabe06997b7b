use crate::batch::{walk, BatchSummary};
use crate::codec::{ImageCodec, PngCodec};
use crate::constants::{DEFAULT_EXPORT_DIR, DEFAULT_SCALE, SUCCESS_PREFIX};
use crate::error::{ResizeError, Result};
use crate::mirror::{classify, ensure_dir, DirectoryMirror, TargetKind};
use crate::scale::{resize, ScaleFactor};
use crate::utils::{file_stem_string, format_file_size, is_supported_image, output_file_name};
use crate::{info, verbose};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fully resolved run options. Defaults are applied and the scale validated
/// once, in [`Options::new`].
#[derive(Debug, Clone)]
pub struct Options {
    pub target: PathBuf,
    pub recursive: bool,
    pub verbose: bool,
    pub scale: ScaleFactor,
    pub export_root: PathBuf,
    pub optimize: bool,
}

impl Options {
    pub fn new(
        target: PathBuf,
        recursive: bool,
        verbose: bool,
        scale: Option<i64>,
        export_root: Option<PathBuf>,
        optimize: bool,
    ) -> Result<Self> {
        let scale = ScaleFactor::new(scale.unwrap_or(i64::from(DEFAULT_SCALE)))?;
        let export_root = export_root
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

        Ok(Self {
            target,
            recursive,
            verbose,
            scale,
            export_root,
            optimize,
        })
    }

    pub fn codec(&self) -> PngCodec {
        PngCodec::new(self.optimize)
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "target={}, recursive={}, debug={}, scale={}, export={}, optimize={}",
            self.target.display(),
            self.recursive,
            self.verbose,
            self.scale,
            self.export_root.display(),
            self.optimize
        )
    }
}

/// One source image and where its resized copy goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub scale: ScaleFactor,
}

impl ResizeJob {
    /// Builds the job for `source`, writing `<stem>.png` into `destination_dir`.
    pub fn new(source: &Path, destination_dir: &Path, scale: ScaleFactor) -> Result<Self> {
        let name = output_file_name(source)
            .ok_or_else(|| ResizeError::UnsupportedFormat("Invalid file name".to_string()))?;

        Ok(Self {
            source: source.to_path_buf(),
            destination: destination_dir.join(name),
            scale,
        })
    }

    /// Base name of the source without its extension, used in progress lines.
    pub fn name(&self) -> String {
        file_stem_string(&self.source).unwrap_or_default()
    }
}

/// Decode -> resize -> encode -> write for a single job.
///
/// # Returns
/// * `Ok(bytes)` - Size of the written PNG in bytes
/// * `Err(ResizeError)` - If any step fails; existing output is left untouched
///   unless the final write itself fails
pub fn run_job(job: &ResizeJob, codec: &impl ImageCodec) -> Result<u64> {
    let img = codec.decode(&job.source)?;
    let resized = resize(&img, job.scale)?;
    drop(img);

    let bytes = codec.encode(&resized)?;
    fs::write(&job.destination, &bytes)?;

    Ok(bytes.len() as u64)
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    SingleFile { destination: PathBuf, bytes: u64 },
    Batch(BatchSummary),
}

/// Runs the whole pipeline for `options`.
///
/// The export root is created first, before the target is looked at, so it
/// exists even when the target turns out to be missing.
pub fn run(options: &Options) -> Result<RunOutcome> {
    ensure_dir(&options.export_root)?;

    let codec = options.codec();
    match classify(&options.target) {
        TargetKind::NotFound => Err(ResizeError::FileNotFound(options.target.clone())),
        TargetKind::File => process_single_file(&options.target, options, &codec),
        TargetKind::Directory => {
            let mirror = DirectoryMirror::root(&options.target, &options.export_root)?;
            walk(&mirror, options, &codec).map(RunOutcome::Batch)
        }
    }
}

/// Processes a single file straight into the export root. Unlike the batch
/// path, any failure is returned to the caller.
pub fn process_single_file(
    path: &Path,
    options: &Options,
    codec: &impl ImageCodec,
) -> Result<RunOutcome> {
    if !is_supported_image(path) {
        return Err(ResizeError::UnsupportedExtension(path.to_path_buf()));
    }

    let job = ResizeJob::new(path, &options.export_root, options.scale)?;
    verbose!("Processing {}", job.name());
    let bytes = run_job(&job, codec)?;

    info!(
        "{} Saved {} ({})",
        SUCCESS_PREFIX,
        job.destination.display(),
        format_file_size(bytes)
    );

    Ok(RunOutcome::SingleFile {
        destination: job.destination,
        bytes,
    })
}
