pub mod batch;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod formats;
pub mod logger;
pub mod mirror;
pub mod processing;
pub mod scale;
pub mod utils;

pub use batch::{walk, BatchSummary};
pub use codec::{ImageCodec, PixelBuffer, PngCodec};
pub use error::{ResizeError, Result};
pub use formats::SourceFormat;
pub use mirror::{classify, DirectoryMirror, TargetKind};
pub use processing::{run, run_job, Options, ResizeJob, RunOutcome};
pub use scale::{resize, scaled_dimensions, ScaleFactor};
pub use utils::is_supported_image;
