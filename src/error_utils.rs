//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource keyed by the file's display path
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Convert a 1-based line/column pair from serde_json into a byte span
///
/// serde_json reports column 0 when the error sits at the start of a line
/// (or at end of input), so both cases point at the nearest real byte.
pub fn json_error_span(content: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    let mut offset = (line_start + column.saturating_sub(1)).min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }

    let len = content[offset..]
        .chars()
        .next()
        .map(char::len_utf8)
        .unwrap_or(0);

    SourceSpan::new(offset.into(), len)
}
