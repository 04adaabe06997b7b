//! Helpers shared by the single-file and batch paths.

use crate::constants::{OUTPUT_EXTENSION, PROGRESS_BAR_CHARS, PROGRESS_BAR_TEMPLATE, SUPPORTED_IMAGE_EXTENSIONS};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Check if a file path carries one of the supported image extensions
///
/// # Arguments
/// * `path` - The file path to check
///
/// # Returns
/// * `true` if the lowercased extension is in the supported set, `false` otherwise
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// The file name without its final extension, e.g. `cat` for `cat.png`.
pub fn file_stem_string(path: &Path) -> Option<String> {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned())
}

/// `<stem>.png` for the given source path.
pub fn output_file_name(path: &Path) -> Option<String> {
    file_stem_string(path).map(|stem| format!("{}.{}", stem, OUTPUT_EXTENSION))
}

/// Create a progress bar for `len` files with consistent styling.
///
/// indicatif hides the bar on its own when stderr is not a terminal.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
        pb.set_style(style.progress_chars(PROGRESS_BAR_CHARS));
    }
    pb
}

/// Format file size in human-readable format
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// * Human-readable size string (e.g., "1.2 MB", "512 B")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_is_supported_image() {
        for name in ["a.png", "a.jpg", "a.jpeg", "a.webp", "a.bmp", "a.tga", "a.heic"] {
            assert!(is_supported_image(Path::new(name)), "{}", name);
        }

        assert!(!is_supported_image(Path::new("notes.txt")));
        assert!(!is_supported_image(Path::new("anim.gif")));
        assert!(!is_supported_image(Path::new("scan.tiff")));
        assert!(!is_supported_image(Path::new("README")));
        assert!(!is_supported_image(Path::new(".png")));
    }

    #[test]
    fn test_is_supported_image_case_insensitive() {
        assert!(is_supported_image(Path::new("photo.PNG")));
        assert!(is_supported_image(Path::new("photo.JpG")));
        assert!(is_supported_image(Path::new("photo.HEIC")));
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name(Path::new("dir/cat.jpg")).unwrap(), "cat.png");
        assert_eq!(output_file_name(Path::new("photo.PNG")).unwrap(), "photo.png");
        assert_eq!(
            output_file_name(Path::new("archive.tar.bmp")).unwrap(),
            "archive.tar.png"
        );
        assert_eq!(output_file_name(Path::new("/")), None);
    }

    #[test]
    fn test_file_stem_string() {
        assert_eq!(file_stem_string(Path::new("sprites/a.png")).unwrap(), "a");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.0 GB");
    }
}
