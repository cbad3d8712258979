//! Container Runtime Implementations
//!
//! Concrete implementations of the RuntimeGateway port.

mod compose;

pub use compose::{parse_container_name, parse_service_list, DockerComposeGateway};
