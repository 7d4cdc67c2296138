use std::collections::BTreeMap;
use std::sync::Arc;

use log::debug;

use crate::descriptor::{DescriptorError, SceneDescriptor};

/// Exported scene name -> shared handle on the descriptor registered under
/// that name. Lookup aggregate only; ownership is by refcount, so a handle
/// pulled out of the map stays valid on its own.
pub type SceneDescriptorReferences = BTreeMap<String, Arc<SceneDescriptor>>;

/// Owns the full set of scene descriptors for a project, keyed by exported
/// name. Exported names are unique; a second registration under the same
/// name is rejected and the registry is left untouched.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    by_exported_name: SceneDescriptorReferences,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under its exported name and hand back a shared
    /// handle on it.
    pub fn insert(
        &mut self,
        descriptor: SceneDescriptor,
    ) -> Result<Arc<SceneDescriptor>, DescriptorError> {
        if self.by_exported_name.contains_key(descriptor.exported_name()) {
            return Err(DescriptorError::DuplicateExportedName(
                descriptor.exported_name().to_string(),
            ));
        }
        let descriptor = Arc::new(descriptor);
        debug!(
            "registered scene `{}` (id {}, {} exported nodes)",
            descriptor.exported_name(),
            descriptor.id(),
            descriptor.exported_node_references().len()
        );
        self.by_exported_name
            .insert(descriptor.exported_name().to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    pub fn get(&self, exported_name: &str) -> Option<&Arc<SceneDescriptor>> {
        self.by_exported_name.get(exported_name)
    }

    /// Ids are unique by the exporter's contract, so the first match is the
    /// only one.
    pub fn find_by_id(&self, id: &str) -> Option<&Arc<SceneDescriptor>> {
        self.by_exported_name.values().find(|d| d.id() == id)
    }

    pub fn len(&self) -> usize {
        self.by_exported_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_exported_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<SceneDescriptor>)> {
        self.by_exported_name.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The name -> descriptor lookup table itself, for consumers that want
    /// to walk or clone the whole mapping.
    pub fn references(&self) -> &SceneDescriptorReferences {
        &self.by_exported_name
    }
}
