/// Marker that opens a new section
pub const HEADER_MARKER: &str = "##";

/// Parse a level-2 header line, returning its trimmed title
///
/// The line must start with exactly two `#` characters followed by at
/// least one more character. A whitespace-only remainder still opens a
/// section, with an empty title; a bare `##` does not. Deeper headers
/// (`###` and beyond) are not section boundaries and are left as ordinary
/// content.
pub fn parse_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(HEADER_MARKER)?;
    if rest.is_empty() || rest.starts_with('#') {
        return None;
    }

    Some(rest.trim())
}
