//! Authenticated user model and role predicates

mod model;
mod roles;

pub use model::{User, UserDto};
pub use roles::format_roles;
