//! Ordered list of shadow layers.
//!
//! Every operation leaves `self` untouched and returns a new list, so a
//! failed operation can never leave the list half-updated.

use crate::layer::{LayerId, ShadowLayer, ShadowParams};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Layer list errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    #[error("Index {index} out of range for {len} layer(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Layer not found: {0}")]
    NotFound(LayerId),
}

/// Result type for layer list operations.
pub type LayerResult<T> = Result<T, LayerError>;

/// Shadow layers in paint order (first entry is painted on top).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LayerList {
    layers: Vec<ShadowLayer>,
}

impl LayerList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer at the end.
    ///
    /// If a layer with the same id is already present the new one gets a
    /// fresh id, so appending the same layer twice yields two entries.
    pub fn append(&self, layer: ShadowLayer) -> LayerList {
        let layer = if self.contains(layer.id()) {
            layer.renewed()
        } else {
            layer
        };
        log::debug!("Appending layer {} at index {}", layer.id(), self.layers.len());

        let mut layers = self.layers.clone();
        layers.push(layer);
        Self { layers }
    }

    /// Move the layer at `from` so that it ends up at index `to`.
    ///
    /// Layers between the two positions shift by one.
    pub fn reorder(&self, from: usize, to: usize) -> LayerResult<LayerList> {
        self.check_index(from)?;
        self.check_index(to)?;
        log::debug!("Moving layer from index {from} to {to}");

        let mut layers = self.layers.clone();
        if from != to {
            let layer = layers.remove(from);
            layers.insert(to, layer);
        }
        Ok(Self { layers })
    }

    /// Remove the layer with the given id.
    pub fn remove(&self, id: LayerId) -> LayerResult<LayerList> {
        let index = self.position(id).ok_or(LayerError::NotFound(id))?;
        log::debug!("Removing layer {id} at index {index}");

        let mut layers = self.layers.clone();
        layers.remove(index);
        Ok(Self { layers })
    }

    /// Replace the layer with the given id by applying `mutator` to its
    /// parameters. The result is clamped; id and position are kept.
    pub fn update<F>(&self, id: LayerId, mutator: F) -> LayerResult<LayerList>
    where
        F: FnOnce(ShadowParams) -> ShadowParams,
    {
        let index = self.position(id).ok_or(LayerError::NotFound(id))?;

        let current = &self.layers[index];
        let replacement = current.with_params(mutator(current.params()));

        let mut layers = self.layers.clone();
        layers[index] = replacement;
        Ok(Self { layers })
    }

    fn check_index(&self, index: usize) -> LayerResult<()> {
        if index < self.layers.len() {
            Ok(())
        } else {
            Err(LayerError::IndexOutOfRange {
                index,
                len: self.layers.len(),
            })
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Get a layer by id.
    pub fn get(&self, id: LayerId) -> Option<&ShadowLayer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Get a layer by index.
    pub fn at(&self, index: usize) -> Option<&ShadowLayer> {
        self.layers.get(index)
    }

    /// Index of the layer with the given id.
    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.id() == id)
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.position(id).is_some()
    }

    /// Layers in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ShadowLayer> {
        self.layers.iter()
    }

    /// Layer ids in order.
    pub fn ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(ShadowLayer::id).collect()
    }

    /// Serialize the list to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a list from JSON. Duplicate ids are renewed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'de> Deserialize<'de> for LayerList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let layers = Vec::<ShadowLayer>::deserialize(deserializer)?;
        Ok(layers.into_iter().collect())
    }
}

impl FromIterator<ShadowLayer> for LayerList {
    fn from_iter<I: IntoIterator<Item = ShadowLayer>>(iter: I) -> Self {
        iter.into_iter()
            .fold(LayerList::new(), |list, layer| list.append(layer))
    }
}

impl<'a> IntoIterator for &'a LayerList {
    type Item = &'a ShadowLayer;
    type IntoIter = std::slice::Iter<'a, ShadowLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
