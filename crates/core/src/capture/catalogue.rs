//! Capture-type catalogue
//!
//! The catalogue is fetched once and consulted by id. Lookups for ids
//! the server never described fall back to a synthesized label; a
//! lookup can therefore never fail.

use std::collections::HashMap;

use super::CaptureType;

/// Id-indexed catalogue of capture types
#[derive(Debug, Clone, Default)]
pub struct CaptureTypeCatalogue {
    types: HashMap<u64, CaptureType>,
}

impl CaptureTypeCatalogue {
    pub fn new(types: Vec<CaptureType>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn get(&self, id: u64) -> Option<&CaptureType> {
        self.types.get(&id)
    }

    /// Display name for a capture-type id, `"Unknown (<id>)"` when absent
    pub fn name_for(&self, id: u64) -> String {
        match self.types.get(&id) {
            Some(capture_type) => capture_type.name.clone(),
            None => format!("Unknown ({})", id),
        }
    }

    /// Description for a capture-type id, empty when absent
    pub fn description_for(&self, id: u64) -> String {
        self.types
            .get(&id)
            .map(|capture_type| capture_type.description.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
