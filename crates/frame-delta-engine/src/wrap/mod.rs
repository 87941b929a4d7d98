//! Base64 line rewrapping.
//!
//! Base64 payloads are often wrapped every 76 characters, but the wrap must
//! not start until after a `data:` URI prefix. Newlines already present in
//! the payload carry no data (RFC 4648) and are dropped before rechunking.

mod data_uri;

pub use data_uri::{data_uri_prefix, mime_subtype, with_data_uri_prefix};

use serde::{Deserialize, Serialize};

/// Length of `data:image/svg+xml;base64,`
pub const DEFAULT_PREFIX_OFFSET: usize = 26;

/// Conventional base64 line length
pub const DEFAULT_WRAP_WIDTH: usize = 76;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WrapError {
    #[error("wrap width must be at least 1")]
    InvalidWidth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapOptions {
    /// Leading characters left unwrapped
    pub offset: usize,
    /// Maximum characters per wrapped line
    pub width: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_PREFIX_OFFSET,
            width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl WrapOptions {
    pub fn rewrap(&self, doc: &str) -> Result<String, WrapError> {
        rewrap_base64(doc, self.offset, self.width)
    }
}

/// Drop every line wrap from a base64 document.
///
/// Patch offsets always address this unwrapped form.
pub fn strip_line_wraps(doc: &str) -> String {
    doc.chars().filter(|&c| c != '\n').collect()
}

/// Strip newlines from `doc` and re-chunk everything after the first `offset`
/// characters into lines of at most `width` characters.
///
/// An `offset` at or beyond the end of the stripped document yields the
/// stripped document unchanged.
pub fn rewrap_base64(doc: &str, offset: usize, width: usize) -> Result<String, WrapError> {
    if width == 0 {
        return Err(WrapError::InvalidWidth);
    }

    let chars: Vec<char> = doc.chars().filter(|&c| c != '\n').collect();
    let split = offset.min(chars.len());
    let (prefix, body) = chars.split_at(split);

    let mut out = String::with_capacity(chars.len() + body.len() / width + 1);
    out.extend(prefix);
    for (i, chunk) in body.chunks(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(chunk);
    }

    log::trace!(
        "rewrapped {} characters into {} lines after a {split} character prefix",
        chars.len(),
        body.len().div_ceil(width)
    );
    Ok(out)
}
