//! Fenced code block detection and stripping.
//!
//! This is a best-effort heuristic, not a Markdown parser. Every fence
//! marker (three backticks plus an optional alphabetic tag) is removed
//! wherever it appears, so multiple blocks are merged and prose around a
//! block is kept. Tags containing non-letters are only partially removed
//! (` ```c++ ` leaves `++`).

const FENCE: &str = "```";

/// Returns `true` if the text contains a fence marker.
pub fn has_code_fence(text: &str) -> bool {
    text.contains(FENCE)
}

/// Removes all fence markers and their language tags, then trims.
pub fn strip_code_fences(text: &str) -> String {
    remove_markers(text).trim().to_string()
}

// Leftmost scanning means a removal can never join backticks into a new
// marker, so a single pass also covers bare markers.
fn remove_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        let tag_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        rest = &rest[tag_len..];
    }

    out.push_str(rest);
    out
}
