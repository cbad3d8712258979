//! Terminal presentation for the binary
//!
//! Views return strings; commands decide where they go.

pub mod context;
pub mod error;
pub mod primitives;
pub mod prompter;
pub mod scoped;
pub mod terminal;
pub mod theme;
pub mod views;
