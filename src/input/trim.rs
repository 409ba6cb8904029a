/// Strip leading and trailing whitespace from a raw input line.
///
/// The result borrows from `line`; nothing is copied. An empty or
/// whitespace-only line yields an empty slice positioned at the end of the
/// leading whitespace, so the scan never walks outside the buffer.
pub fn trim(line: &str) -> &str {
    let range = content_range(line);
    &line[range]
}

/// Byte range of the non-whitespace content of `line`.
pub fn content_range(line: &str) -> std::ops::Range<usize> {
    let start = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(i, _)| i);

    let end = line[start..]
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(start, |(i, c)| start + i + c.len_utf8());

    start..end
}
