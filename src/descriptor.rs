//! Scene-asset metadata records. Instances are produced by the export
//! pipeline and consumed read-only by the scene loader; this crate never
//! parses or loads anything itself.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Node export name -> node id, for resolving scene-internal nodes by name.
/// The exporter populates and freezes the mapping before any descriptor
/// binds to it; descriptors share it by `Arc` rather than copying it.
pub type ExportedNodeReferences = BTreeMap<String, String>;

#[derive(Debug)]
pub enum DescriptorError {
    EmptyExportedName,
    EmptyId,
    DuplicateExportedName(String),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExportedName => write!(f, "scene descriptor has an empty exported name"),
            Self::EmptyId => write!(f, "scene descriptor has an empty id"),
            Self::DuplicateExportedName(name) => {
                write!(f, "a scene is already registered under exported name `{name}`")
            }
        }
    }
}

impl std::error::Error for DescriptorError {}

/// Immutable record of one exported scene: its export name, stable id, the
/// paths to its scene graph and resource model assets, the nodes it exports,
/// and whether the loader must instance it immediately.
#[derive(Debug, Clone)]
pub struct SceneDescriptor {
    exported_name: String,
    id: String,
    scene_graph_path: String,
    resource_model_path: String,
    exported_node_references: Arc<ExportedNodeReferences>,
    initially_instanced: bool,
}

impl SceneDescriptor {
    /// All fields are supplied up front; the descriptor is read-only after
    /// this. Only the identity fields are validated here — path existence
    /// and mapping contents are the exporter's contract.
    pub fn new(
        exported_name: impl Into<String>,
        id: impl Into<String>,
        scene_graph_path: impl Into<String>,
        resource_model_path: impl Into<String>,
        exported_node_references: Arc<ExportedNodeReferences>,
        initially_instanced: bool,
    ) -> Result<Self, DescriptorError> {
        let exported_name = exported_name.into();
        if exported_name.is_empty() {
            return Err(DescriptorError::EmptyExportedName);
        }
        let id = id.into();
        if id.is_empty() {
            return Err(DescriptorError::EmptyId);
        }
        Ok(Self {
            exported_name,
            id,
            scene_graph_path: scene_graph_path.into(),
            resource_model_path: resource_model_path.into(),
            exported_node_references,
            initially_instanced,
        })
    }

    pub fn exported_name(&self) -> &str {
        &self.exported_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scene_graph_path(&self) -> &str {
        &self.scene_graph_path
    }

    pub fn resource_model_path(&self) -> &str {
        &self.resource_model_path
    }

    /// Shared handle on the exported-node mapping. Same allocation the
    /// exporter holds, not a copy.
    pub fn exported_node_references(&self) -> &Arc<ExportedNodeReferences> {
        &self.exported_node_references
    }

    /// Resolve one exported node by its export name.
    pub fn exported_node_id(&self, name: &str) -> Option<&str> {
        self.exported_node_references.get(name).map(String::as_str)
    }

    pub fn initially_instanced(&self) -> bool {
        self.initially_instanced
    }
}
