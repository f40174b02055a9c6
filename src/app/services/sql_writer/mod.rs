//! SQL rendering for normalized catalog rows
//!
//! - [`quote`] - Literal quoting rules
//! - [`script`] - Delete-then-insert script assembly and output

pub mod quote;
pub mod script;

#[cfg(test)]
mod tests;

pub use quote::{quote_text, sql_quote};
pub use script::{ScriptBuilder, SqlScript, values_tuple};
