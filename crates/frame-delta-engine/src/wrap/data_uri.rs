use crate::wrap::strip_line_wraps;

/// MIME subtype for an image format name (`svg` is registered as `svg+xml`)
pub fn mime_subtype(format: &str) -> &str {
    match format {
        "svg" => "svg+xml",
        other => other,
    }
}

/// `data:image/<subtype>;base64,` for an image format name
pub fn data_uri_prefix(format: &str) -> String {
    format!("data:image/{};base64,", mime_subtype(format))
}

/// Prefix a base64 payload with its data URI header.
///
/// Line wraps in the payload are dropped so that character offsets into the
/// result do not depend on how the encoder wrapped its output.
pub fn with_data_uri_prefix(format: &str, payload: &str) -> String {
    let prefix = data_uri_prefix(format);
    let mut out = String::with_capacity(prefix.len() + payload.len());
    out.push_str(&prefix);
    out.push_str(&strip_line_wraps(payload));
    out
}
