//! DOCX document model and writer.
//!
//! [`Document`] is the in-memory model the translator builds against: a
//! default font plus an ordered body of headings, paragraphs, and tables.
//! The translator only appends through the builder surface, and
//! [`write_docx`] serializes the result once, at the end of a run.
//!
//! A DOCX file is a ZIP package of OOXML parts. The writer emits the
//! fixed packaging parts as constants and generates `word/styles.xml`
//! (carrying the document's default font) and `word/document.xml` (the
//! body) per document.

mod document;
mod writer;

pub use document::{Body, Document, ListStyle, Table};
pub use writer::{write_docx, write_docx_to_writer};
