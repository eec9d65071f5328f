//! Service layer.
//!
//! Services orchestrate validate → persist → notify → publish for one
//! entity type, depending only on the capability traits.

pub mod user;

pub use user::{ServiceError, UserService, USER_CREATED};
