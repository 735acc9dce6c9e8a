//! `emdo_core` is the embed-resolution engine behind the
//! [`emdo`](https://crates.io/crates/emdo_cli) command. It converts a
//! markdown document containing embed fences (an `` ```embed `` opener, one
//! directive per line, a bare `` ``` `` closer) into the same document with
//! each fence replaced by fenced code blocks built from the referenced
//! source files.
//!
//! ## Processing pipeline
//!
//! ```text
//! Markdown document
//!   → engine (two-state line scanner, recognizes embed fences)
//!   → directive parser (pattern + optional block name per line)
//!   → file resolver (recursive glob, sorted matches, full reads)
//!   → style table (extension → comment style)
//!   → block extractor (emdo/emdone marker pairs, line-anchored matching)
//!   → dedenter (common leading-whitespace margin removal)
//!   → back into the output stream as fenced code blocks
//! ```
//!
//! Embedded `.md` files are converted recursively and spliced in without a
//! code fence; a per-conversion [`RecursionGuard`] rejects cyclic inclusion.
//! All failures are fatal and surface as an [`EmdoError`] carrying the
//! offending pattern, filename, or marker text verbatim.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use emdo_core::convert;
//!
//! let input = std::fs::read_to_string("readme.src.md").unwrap();
//! let output = convert(&input, Path::new(".")).unwrap();
//! std::fs::write("readme.md", output).unwrap();
//! ```

pub use dedent::*;
pub use directive::*;
pub use engine::*;
pub use error::*;
pub use extract::*;
pub use resolver::*;
pub use styles::*;

mod dedent;
mod directive;
mod engine;
mod error;
mod extract;
mod resolver;
mod styles;
