pub mod editing;
pub mod io;
pub mod playback;
pub mod wrap;

// Re-export key types for easier usage
pub use editing::{Edit, EditRecord, Patch, PatchError, apply_patch, apply_records};
pub use playback::{Direction, FramePlayer, FrameSequence, LoopMode, PlaybackError};
pub use wrap::{
    DEFAULT_PREFIX_OFFSET, DEFAULT_WRAP_WIDTH, WrapError, WrapOptions, data_uri_prefix,
    rewrap_base64, strip_line_wraps, with_data_uri_prefix,
};
