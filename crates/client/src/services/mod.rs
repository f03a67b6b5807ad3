//! Stateless domain services over the REST endpoints
//!
//! Each function builds the endpoint path, calls the API client, and
//! maps the raw response through the DTO adapters. Failures from the
//! client are propagated unchanged.

pub mod acquisition;
pub mod auth;
pub mod capture_types;
pub mod charts;
pub mod rooms;
