//! Layered configuration with precedence
//!
//! Layers are pushed low to high; a lookup returns the value from the
//! highest layer that has one. The CLI stacks:
//! 1. Stack file (`Cairn.<stack>.yaml`)
//! 2. Environment variables (`CAIRN_CONFIG_*`)

use super::ConfigStore;
use std::fmt;
use tracing::trace;

/// Ordered stack of configuration stores
#[derive(Default)]
pub struct LayeredConfigStore {
    layers: Vec<Box<dyn ConfigStore>>,
}

impl LayeredConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer that takes precedence over every existing one
    pub fn with_layer(mut self, layer: impl ConfigStore + 'static) -> Self {
        self.push(layer);
        self
    }

    pub fn push(&mut self, layer: impl ConfigStore + 'static) {
        self.layers.push(Box::new(layer));
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl fmt::Debug for LayeredConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayeredConfigStore")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl ConfigStore for LayeredConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().enumerate().rev().find_map(|(idx, layer)| {
            let value = layer.get(key)?;
            trace!("Config key '{}' resolved from layer {}", key, idx);
            Some(value)
        })
    }
}
