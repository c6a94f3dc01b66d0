//! jast: inspect Java syntax trees serialized as JSON.
//!
//! The node model and traversal engine live in the `jast_tree` crate; this
//! crate is the command-line front door over it.

pub use jast_tree as tree;

pub mod cli;
pub mod error;
pub mod output;
