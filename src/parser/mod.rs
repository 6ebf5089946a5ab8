//! parser
//!
//! Converts raw process argument vectors into validated, typed values.
//!
//! # Pipeline
//!
//! ```text
//! argv --tokenize--> Tokenized --bind--> ParsedOutput
//! ```
//!
//! - [`tokenize`] applies the fixed tokenization policy: flag recognition,
//!   alias collapse, short-option grouping, `--no-x` negation, array
//!   flattening, count accumulation, and the literal `--` separator.
//! - [`bind`] walks the declared argument descriptors with a positional
//!   cursor, applying defaults, spread consumption, and parse hooks, and
//!   collects unknown flags.
//!
//! # Responsibilities
//!
//! The parser resolves values; it never enforces presence. Missing required
//! arguments or flags are the execution layer's concern (see
//! [`crate::validate`]), keeping value resolution and presence validation
//! as separate concerns.

mod binder;
mod output;
mod tokenizer;

pub use binder::bind;
pub use output::{ParsedOutput, Tokenized};
pub use tokenizer::{tokenize, FlagUniverse};
