pub const DEFAULT_SCALE: u32 = 10;
pub const DEFAULT_EXPORT_DIR: &str = "export";

/// Lowercased extensions accepted when scanning a directory.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] =
    &["png", "jpg", "jpeg", "webp", "bmp", "tga", "heic"];

/// Every output is written as PNG regardless of the source format.
pub const OUTPUT_EXTENSION: &str = "png";

pub const OXIPNG_PRESET: u8 = 2;

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";
pub const PROGRESS_BAR_CHARS: &str = "=>-";

// Common output message prefixes
pub const SUCCESS_PREFIX: &str = "✅";
pub const WARNING_PREFIX: &str = "⚠️ ";
pub const ERROR_PREFIX: &str = "❌";
pub const VERBOSE_PREFIX: &str = "🔍";
pub const SUMMARY_PREFIX: &str = "📊";

pub const NOT_FOUND_MESSAGE: &str = "File does not exist.";

/// Output buffers below this size skip the available-memory check.
pub const MEMORY_CHECK_THRESHOLD_MIB: u64 = 64;
