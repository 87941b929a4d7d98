// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_frame(size: usize) -> String {
    let alphabet = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let payload: String = alphabet.chars().cycle().take(size).collect();
    format!("data:image/svg+xml;base64,{payload}")
}

#[allow(dead_code)]
pub fn generate_patch_json(frame_len: usize, edits: usize) -> String {
    let stride = frame_len / (edits + 1);
    let entries: Vec<String> = (1..=edits)
        .map(|i| {
            let at = i * stride;
            match i % 3 {
                0 => format!("[{at}, {}, \"\"]", at + 2),
                1 => format!("[{at}, {at}, \"QQ\"]"),
                _ => format!("[{at}, {}, \"RRR\"]", at + 1),
            }
        })
        .collect();
    format!("[{}]", entries.join(", "))
}
