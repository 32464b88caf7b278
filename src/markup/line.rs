//! Single-line classification for the markup source format.

/// Classification of one source line.
///
/// Payloads borrow from the classified line. `Heading` levels run 0
/// (document title) through 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `# ` through `#### ` prefixed heading.
    Heading { level: u8, text: &'a str },
    /// Horizontal rule (`---`).
    Rule,
    /// Table data row with its extracted cells.
    TableRow(Vec<&'a str>),
    /// Table separator row (dashes, colons, and pipes only); demarcates
    /// the header from the data and carries no data itself.
    TableSeparator,
    /// `- ` or `* ` prefixed list item.
    Bullet(&'a str),
    /// `1. `-style list item.
    Numbered(&'a str),
    /// Whitespace-only line.
    Blank,
    /// Anything else.
    Paragraph(&'a str),
}

/// Classify one line of markup.
///
/// Classification is total: every line maps to exactly one [`LineKind`],
/// with unrecognized content falling through to [`LineKind::Paragraph`].
/// Rules are checked in priority order; the first match wins.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    // Longer marker prefixes first: `#` is a prefix of `##`.
    if let Some(text) = trimmed.strip_prefix("#### ") {
        return LineKind::Heading { level: 3, text };
    }
    if let Some(text) = trimmed.strip_prefix("### ") {
        return LineKind::Heading { level: 2, text };
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return LineKind::Heading { level: 1, text };
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return LineKind::Heading { level: 0, text };
    }

    if trimmed == "---" {
        return LineKind::Rule;
    }

    // A table row needs a second pipe after the leading one; a lone `|`
    // at the start of a line is just paragraph text.
    if trimmed.starts_with('|') && trimmed[1..].contains('|') {
        if is_separator_row(trimmed) {
            return LineKind::TableSeparator;
        }
        return LineKind::TableRow(split_cells(trimmed));
    }

    if let Some(text) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return LineKind::Bullet(text.trim());
    }

    if let Some(text) = strip_numbered_prefix(trimmed) {
        return LineKind::Numbered(text);
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Paragraph(trimmed)
}

/// A separator row contains nothing but dashes, colons, pipes, and
/// whitespace (`|---|:---:|`).
fn is_separator_row(line: &str) -> bool {
    line.chars()
        .all(|c| matches!(c, '-' | '|' | ':') || c.is_whitespace())
}

/// Extract the cells of a table row.
///
/// Splitting on `|` produces an empty fragment before the leading pipe
/// and a final fragment after the last one; both outer fragments are
/// dropped, so cell count is always pipe count minus one. The remaining
/// fragments are trimmed.
fn split_cells(line: &str) -> Vec<&str> {
    let fragments: Vec<&str> = line.split('|').collect();
    fragments[1..fragments.len() - 1]
        .iter()
        .map(|cell| cell.trim())
        .collect()
}

/// Strip a `1. `-style prefix: one or more ASCII digits, a period, and a
/// single whitespace character.
fn strip_numbered_prefix(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let rest = line[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}
