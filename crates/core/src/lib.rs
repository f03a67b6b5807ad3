//! Core domain layer for the RoomSense monitoring client
//!
//! This crate contains the pure domain types, including:
//! - Wire DTOs and their view-model adapters
//! - Role predicates over the authenticated user
//! - The amenity and capture-type catalogues
//! - The 7-day chart series transform
//!
//! Everything here is synchronous and side-effect free; network access
//! lives in `roomsense-client`.

pub mod acquisition;
pub mod amenity;
pub mod capture;
pub mod hydra;
pub mod room;
pub mod user;

pub use amenity::Amenity;
pub use hydra::HydraCollection;
