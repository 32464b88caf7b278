//! # mdox
//!
//! A fast, lightweight converter from line-oriented markup to DOCX.
//!
//! ## Features
//!
//! - Headings (`#` through `####`), horizontal rules, pipe tables,
//!   bulleted and numbered lists, plain paragraphs
//! - Total, best-effort parsing: unrecognized lines become paragraphs,
//!   ragged tables degrade instead of failing
//! - Self-contained DOCX output (styles and numbering included)
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdox::convert_file;
//!
//! // Convert a markup file to DOCX
//! convert_file("notes.md", "notes.docx").unwrap();
//! ```
//!
//! ## Working with Documents
//!
//! [`Document`] is the central data type: an in-memory rich-text model
//! built through semantic calls and saved once at the end:
//!
//! ```
//! use mdox::{Document, ListStyle};
//!
//! let mut doc = Document::new();
//! doc.set_default_font("Calibri", 11);
//!
//! // Add content
//! doc.add_heading("My Notes", 0);
//! doc.add_paragraph("Some text.");
//! doc.add_list_paragraph("first point", ListStyle::Bulleted);
//!
//! // Tables are row/cell addressable
//! let table = doc.add_table(1, 2);
//! table.set_cell(0, 0, "Name");
//! table.set_cell(0, 1, "Value");
//! ```

pub mod convert;
pub mod docx;
pub mod error;
pub mod markup;
pub(crate) mod util;

pub use convert::{convert_file, convert_text};
pub use docx::{Body, Document, ListStyle, Table, write_docx, write_docx_to_writer};
pub use error::{Error, Result};
pub use markup::{Block, Blocks, LineKind, classify, translate};
