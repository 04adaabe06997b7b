use crate::codec::ImageCodec;
use crate::constants::SUMMARY_PREFIX;
use crate::error::Result;
use crate::logger::is_quiet;
use crate::mirror::{same_directory, DirectoryMirror};
use crate::processing::{run_job, Options, ResizeJob};
use crate::utils::{create_progress_bar, format_file_size, is_supported_image};
use crate::{info, verbose, warn};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Counters for one directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: usize,
    pub bytes_written: u64,
    /// Mirrored directories, including the root.
    pub directories: usize,
}

/// Direct children of a directory, split by kind.
#[derive(Debug, Default)]
struct DirectoryListing {
    files: Vec<PathBuf>,
    subdirectories: Vec<PathBuf>,
}

/// Resizes every supported image directly inside `mirror.source()`, and with
/// `options.recursive` also those inside its immediate subdirectories.
///
/// Subdirectories of subdirectories are never visited, and the export root
/// is skipped when it is one of the subdirectories. Per-file failures and
/// unreadable subdirectories are logged and counted. Failing to list the
/// target itself or to create a mirrored directory aborts the walk.
pub fn walk(
    mirror: &DirectoryMirror,
    options: &Options,
    codec: &impl ImageCodec,
) -> Result<BatchSummary> {
    let start_time = Instant::now();
    let mut summary = BatchSummary {
        directories: 1,
        ..Default::default()
    };

    let listing = list_directory(mirror.source())?;
    let mut jobs = collect_jobs(&listing.files, mirror, options)?;

    if options.recursive {
        for subdir in &listing.subdirectories {
            if same_directory(subdir, &options.export_root) {
                verbose!("Skipping export directory {}", subdir.display());
                continue;
            }
            queue_subdirectory(subdir, mirror, options, &mut jobs, &mut summary)?;
        }
    }

    let progress = batch_progress(jobs.len() as u64, !options.verbose && !is_quiet());

    for job in &jobs {
        verbose!("Processing {}", job.name());

        match run_job(job, codec) {
            Ok(bytes) => {
                summary.processed += 1;
                summary.bytes_written += bytes;
            }
            Err(e) if e.is_recoverable() => {
                summary.failed += 1;
                progress.suspend(|| warn!("Failed to process {}: {}", job.source.display(), e));
            }
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(
        "{} Resized {} image(s) into {} ({}) in {:.2?}",
        SUMMARY_PREFIX,
        summary.processed,
        mirror.destination().display(),
        format_file_size(summary.bytes_written),
        start_time.elapsed()
    );
    if summary.failed > 0 {
        warn!("Failed files: {}", summary.failed);
    }

    Ok(summary)
}

/// Mirrors `subdir` under `parent` and queues the images directly inside it.
///
/// A subdirectory that can't be listed counts as one failure and leaves its
/// mirror empty.
fn queue_subdirectory(
    subdir: &Path,
    parent: &DirectoryMirror,
    options: &Options,
    jobs: &mut Vec<ResizeJob>,
    summary: &mut BatchSummary,
) -> Result<()> {
    let child = parent.child(subdir)?;
    summary.directories += 1;

    // Only the files; deeper directories are left alone.
    match list_directory(subdir) {
        Ok(inner) => jobs.extend(collect_jobs(&inner.files, &child, options)?),
        Err(e) => {
            summary.failed += 1;
            warn!("Failed to read {}: {}", subdir.display(), e);
        }
    }
    Ok(())
}

fn batch_progress(len: u64, visible: bool) -> ProgressBar {
    if visible {
        create_progress_bar(len)
    } else {
        ProgressBar::hidden()
    }
}

fn collect_jobs(
    files: &[PathBuf],
    mirror: &DirectoryMirror,
    options: &Options,
) -> Result<Vec<ResizeJob>> {
    files
        .iter()
        .filter(|path| is_supported_image(path))
        .map(|path| ResizeJob::new(path, mirror.destination(), options.scale))
        .collect()
}

/// Lists the direct entries of `dir`, following symlinks.
///
/// Failing to read `dir` itself is an error. Entries that can't be inspected
/// (a dangling symlink, say) are reported and skipped.
fn list_directory(dir: &Path) -> Result<DirectoryListing> {
    let mut listing = DirectoryListing::default();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.subdirectories.push(entry.into_path());
        } else if file_type.is_file() {
            listing.files.push(entry.into_path());
        }
    }

    Ok(listing)
}
