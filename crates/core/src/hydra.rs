//! Hydra-style collection wrapper
//!
//! The backend returns JSON-LD paginated collections with a `member`
//! array. Only the fields the client consumes are modelled.

use serde::Deserialize;

/// Paginated collection wrapper returned by list endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HydraCollection<T> {
    /// Items in the current page; absent means empty
    #[serde(default = "Vec::new")]
    pub member: Vec<T>,
    /// Total item count across all pages, when the server reports it
    #[serde(default)]
    pub total_items: Option<u64>,
}

impl<T> HydraCollection<T> {
    /// Consume the wrapper and return the member array
    pub fn into_members(self) -> Vec<T> {
        self.member
    }
}
