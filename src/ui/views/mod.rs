pub mod document;
pub mod runtime;
