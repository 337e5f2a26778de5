/// Renders a caret diagnostic pointing at `offset` in `source`.
///
/// The output is three lines: the source line containing the offset, a caret
/// under the offending character and a rule leading back to the left margin.
/// Columns are counted in characters, so multi-byte text before the offset
/// does not shift the caret. An offset past the end points just after the
/// last character.
///
/// # Example
/// ```
/// use shunt::error::diagnostic::render_caret;
///
/// let rendered = render_caret("2 + * 3", 4);
/// assert_eq!(rendered, "2 + * 3\n    ▲\n────╯");
/// ```
#[must_use]
pub fn render_caret(source: &str, offset: usize) -> String {
    let offset = clamp_to_boundary(source, offset);

    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..].find('\n').map_or(source.len(), |i| offset + i);
    let line = source[line_start..line_end].trim_end_matches('\r');
    let column = source[line_start..offset].chars().count();

    format!("{line}\n{}▲\n{}╯", " ".repeat(column), "─".repeat(column))
}

/// Moves `offset` back onto a character boundary inside `source`.
fn clamp_to_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
