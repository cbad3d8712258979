//! Update use case

mod options;
mod use_case;


pub use options::{UpdateMode, UpdateOptions};
pub use use_case::{UpdateResult, UpdateUseCase};
