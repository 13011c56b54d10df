//! # Text - Line-Oriented Tables over Maybe Containers
//!
//! Turns text into typed tables with the container algebra from
//! `maybe-core`, without I/O: callers hand in a `&str` and get back a
//! `Mat<T>` that is either the whole table or the first thing that went wrong.
//!
//! ```rust
//! use maybe_text::{ops, parse_cells, tokenize, TableConfig};
//!
//! let config = TableConfig::default().with_comment("#");
//! let table = parse_cells::<i64>(tokenize("# scores\n1 2 3\n4 5 6\n", &config));
//! let sums = ops::non_negative(ops::row_sums(table));
//! assert_eq!(sums.unbox().unwrap(), vec![6, 15]);
//! ```
//!
//! ## Modules
//!
//! - [`config`] - how text is cut into rows and cells
//! - [`reader`] - text → `Seq<String>` → `Mat<String>` → `Mat<T>`
//! - [`ops`] - column extraction, row sums, validation, transpose
//! - [`error`] - positioned table errors

pub mod config;
pub mod error;
pub mod ops;
pub mod reader;

pub use config::{Delimiter, TableConfig};
pub use error::TextError;
pub use reader::{infer_cells, lines, parse_cells, require_rectangular, tokenize, TableReader};
