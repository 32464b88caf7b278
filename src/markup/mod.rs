//! Markup source parsing.
//!
//! The input format is a line-oriented markdown subset: every structural
//! marker sits at the start of a line, and only tables span more than one
//! line. Parsing runs in two phases:
//!
//! - [`classify`] turns a single line into a [`LineKind`] using only
//!   local facts
//! - [`Blocks`] walks the full line sequence with a forward-only cursor,
//!   grouping lines into logical [`Block`]s, and [`translate()`] issues
//!   one document-builder call per block
//!
//! Classification is total: unrecognized content falls through to a plain
//! paragraph, so malformed input degrades instead of failing the run.

mod line;
mod translate;

pub use line::{LineKind, classify};
pub use translate::{Block, Blocks, translate};
