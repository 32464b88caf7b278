//! Block translation: grouping classified lines into builder calls.

use crate::docx::{Document, ListStyle};

use super::line::{LineKind, classify};

/// Glyph repeated to stand in for a horizontal rule; the target format
/// has no native rule primitive for body text.
const RULE_GLYPH: &str = "\u{2500}";

/// Width of the rule paragraph, in glyphs.
const RULE_WIDTH: usize = 50;

/// One logical unit of output, covering one or more consumed input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    Bullet(&'a str),
    Numbered(&'a str),
    Paragraph(&'a str),
    /// Ordered data rows, header first; each row an ordered sequence of
    /// cells. Separator rows are discarded during grouping.
    Table(Vec<Vec<&'a str>>),
}

/// Iterator over the logical blocks of a markup document.
///
/// Finite and non-restartable: the cursor only moves forward, and each
/// line is consumed exactly once. Blank lines and stray separator rows
/// are skipped without emitting a block.
pub struct Blocks<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            pos: 0,
        }
    }

    /// Grow a table block from the current cursor position.
    ///
    /// Consumes contiguous table-row and separator lines: separator rows
    /// contribute no data, table rows become additional data rows, and
    /// any other kind (including a blank line) stops the block.
    fn take_table(&mut self, header: Vec<&'a str>) -> Vec<Vec<&'a str>> {
        let mut rows = vec![header];
        while let Some(&line) = self.lines.get(self.pos) {
            match classify(line) {
                LineKind::TableSeparator => {}
                LineKind::TableRow(cells) => rows.push(cells),
                _ => break,
            }
            self.pos += 1;
        }
        rows
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        while self.pos < self.lines.len() {
            let line = self.lines[self.pos];
            self.pos += 1;

            let block = match classify(line) {
                LineKind::Blank => continue,
                // A separator with no header row above it demarcates
                // nothing and carries no data.
                LineKind::TableSeparator => continue,
                LineKind::Heading { level, text } => Block::Heading { level, text },
                LineKind::Rule => Block::Rule,
                LineKind::Bullet(text) => Block::Bullet(text),
                LineKind::Numbered(text) => Block::Numbered(text),
                LineKind::Paragraph(text) => Block::Paragraph(text),
                LineKind::TableRow(cells) => Block::Table(self.take_table(cells)),
            };
            return Some(block);
        }
        None
    }
}

/// Translate markup text into builder calls against `doc`.
///
/// Issues exactly one builder call per block, in source order. Tables are
/// created with the header's column count and filled position-by-position;
/// ragged rows degrade (extra cells dropped, missing cells blank) rather
/// than failing the run.
pub fn translate(text: &str, doc: &mut Document) {
    for block in Blocks::new(text) {
        match block {
            Block::Heading { level, text } => doc.add_heading(text, level),
            Block::Rule => doc.add_paragraph(RULE_GLYPH.repeat(RULE_WIDTH)),
            Block::Bullet(text) => doc.add_list_paragraph(text, ListStyle::Bulleted),
            Block::Numbered(text) => doc.add_list_paragraph(text, ListStyle::Numbered),
            Block::Paragraph(text) => doc.add_paragraph(text),
            Block::Table(rows) => {
                let cols = rows[0].len();
                let table = doc.add_table(1, cols);
                for (col, cell) in rows[0].iter().enumerate() {
                    table.set_cell(0, col, *cell);
                }
                for cells in &rows[1..] {
                    let row = table.add_row();
                    for (col, cell) in cells.iter().enumerate() {
                        table.set_cell(row, col, *cell);
                    }
                }
            }
        }
    }
}
