//! ui
//!
//! Display formatting for descriptors.
//!
//! # Design
//!
//! Formatters are pure functions from descriptors (plus a color capability)
//! to display strings. They never mutate their inputs and never touch a
//! kernel, so they are testable against fabricated descriptors. Column
//! layout computes one shared width across every supplied table so that
//! unrelated sections align visually; text wrapping reflows to a
//! caller-supplied width without truncation.

mod colors;
mod table;
mod wrap;

pub use colors::{AnsiColors, Colors, PlainColors};
pub use table::{render_tables, Table};
pub use wrap::wrap;
