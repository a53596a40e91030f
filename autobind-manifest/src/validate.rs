//! Span lookup helpers for validation errors.

use miette::SourceSpan;

/// Spans of every quoted occurrence of `value` in the TOML source, in order.
///
/// The span covers the value itself, without the quotes.
pub(crate) fn find_quoted_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let needle = format!("\"{}\"", value);
    src.match_indices(&needle)
        .map(|(pos, _)| SourceSpan::from((pos + 1, value.len())))
        .collect()
}

/// Span of the `nth` quoted occurrence of `value`.
pub(crate) fn find_quoted_span(src: &str, value: &str, nth: usize) -> Option<SourceSpan> {
    find_quoted_spans(src, value).into_iter().nth(nth)
}

/// Span of the header of the `index`-th `[[table]]` entry.
pub(crate) fn find_array_table_span(src: &str, table: &str, index: usize) -> Option<SourceSpan> {
    let header = format!("[[{}]]", table);
    src.match_indices(&header)
        .nth(index)
        .map(|(pos, _)| SourceSpan::from((pos, header.len())))
}
