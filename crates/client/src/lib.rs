//! HTTP client and fetch-state layer for the RoomSense monitoring app
//!
//! This crate contains everything that talks to the backend:
//! - `ApiClient`, a thin reqwest wrapper with bearer auth and
//!   centralized 401 handling
//! - `SessionContext`, the injected auth context with a pluggable
//!   token store
//! - Stateless domain services over the REST endpoints
//! - `Query`/`KeyedQuery`, the per-entity fetch state containers

pub mod config;
pub mod error;
pub mod http;
pub mod queries;
pub mod query;
pub mod services;
pub mod session;

pub use config::ClientConfig;
pub use error::ApiError;
pub use http::ApiClient;
pub use query::{KeyedQuery, Query, QueryState};
pub use session::SessionContext;

pub type Result<T> = std::result::Result<T, ApiError>;
