//! Order-preserving pretty JSON rendering and file output.

mod formatter;
mod pretty;

pub use pretty::{DEFAULT_INDENT, PrettyJsonWriter, parse};
