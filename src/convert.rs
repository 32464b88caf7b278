//! One-shot markup-to-DOCX conversion.

use std::path::Path;

use crate::docx::{Document, write_docx};
use crate::error::{Error, Result};
use crate::markup::translate;
use crate::util::decode_text;

/// Convert markup text into a [`Document`] with the default styling.
///
/// Pure in-memory conversion; no I/O is performed.
///
/// # Example
///
/// ```
/// use mdox::convert_text;
///
/// let doc = convert_text("# Title\n\nSome text.\n");
/// assert_eq!(doc.body.len(), 2);
/// ```
pub fn convert_text(text: &str) -> Document {
    let mut doc = Document::new();
    translate(text, &mut doc);
    doc
}

/// Convert the markup file at `input` into a DOCX file at `output`.
///
/// The input must exist ([`Error::InputNotFound`] otherwise, before
/// anything is read or built). The entire input is translated in memory
/// and the output is written exactly once, at the end, overwriting any
/// existing file.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let bytes = std::fs::read(input)?;
    let doc = convert_text(&decode_text(&bytes));
    write_docx(&doc, output)
}
