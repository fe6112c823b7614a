//! Line/column computation from byte offsets.
//!
//! Spans store byte ranges; human-readable output wants 1-based line and
//! column numbers, computed against the source text on demand.

/// Compute the 1-based (line, column) of a byte offset.
///
/// Offsets past the end of the source clamp to the last position. Columns
/// count characters, not bytes.
pub fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = u32::try_from(before.matches('\n').count()).unwrap_or(u32::MAX - 1) + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = u32::try_from(before[line_start..].chars().count()).unwrap_or(u32::MAX - 1) + 1;
    (line, column)
}

/// Get the text of a 1-based line, without its trailing newline.
pub fn line_text(source: &str, line: u32) -> Option<&str> {
    source.lines().nth(line.saturating_sub(1) as usize)
}
