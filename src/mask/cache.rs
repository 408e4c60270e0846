//! Memoized mask compilation.

use std::collections::HashMap;
use std::sync::Arc;

use super::compiled::CompiledMask;
use super::compiler::compile;

/// Compiled masks keyed by their raw text.
///
/// A [`CompiledMask`] depends only on the mask string, so entries never go
/// stale.
#[derive(Debug, Default)]
pub struct MaskCache {
    masks: HashMap<String, Arc<CompiledMask>>,
}

impl MaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compile(&mut self, mask: &str) -> Arc<CompiledMask> {
        if let Some(compiled) = self.masks.get(mask) {
            return Arc::clone(compiled);
        }
        let compiled = Arc::new(compile(mask));
        self.masks.insert(mask.to_string(), Arc::clone(&compiled));
        compiled
    }

    pub fn len(&self) -> usize {
        self.masks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }

    pub fn clear(&mut self) {
        self.masks.clear();
    }
}
