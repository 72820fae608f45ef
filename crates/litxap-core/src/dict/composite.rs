use std::sync::Arc;

use tracing::debug;

use super::{Dictionary, LookupError};
use crate::entry::DictionaryEntry;

/// A dictionary that concatenates results from multiple layers.
///
/// Layers are asked in order and their entries kept in that order. A word
/// is only reported missing when no layer has it; any other failure from
/// any layer fails the whole lookup.
pub struct CompositeDictionary {
    layers: Vec<Arc<dyn Dictionary>>,
}

impl CompositeDictionary {
    pub fn new(layers: Vec<Arc<dyn Dictionary>>) -> Self {
        Self { layers }
    }
}

impl Dictionary for CompositeDictionary {
    fn lookup_entries(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let mut all = Vec::new();
        for (layer, dict) in self.layers.iter().enumerate() {
            match dict.lookup_entries(word) {
                Ok(entries) => all.extend(entries),
                Err(LookupError::NotFound) => {}
                Err(err) => {
                    debug!(word, layer, error = %err, "dictionary layer failed");
                    return Err(err);
                }
            }
        }
        if all.is_empty() {
            return Err(LookupError::NotFound);
        }
        Ok(all)
    }
}
