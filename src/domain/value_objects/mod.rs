//! Value Objects
//!
//! Immutable types compared by value.

mod server_flavor;
mod service_name;

pub use server_flavor::ServerFlavor;
pub use service_name::{check_service_name, normalize_service_name, ServiceNameError};
