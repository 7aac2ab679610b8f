//! Configuration types
//!
//! Board-agnostic configuration structures, deserialized with serde and
//! validated against the host before setup.

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;
