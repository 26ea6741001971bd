use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Scope type names used on entity links.
pub mod scope_types {
    /// Process instance scope.
    pub const BPMN: &str = "bpmn";
    /// Case instance scope.
    pub const CMMN: &str = "cmmn";
    /// Task scope.
    pub const TASK: &str = "task";
}

/// Kind of relationship an entity link describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityLinkType {
    /// The reference scope was created by the owning scope.
    #[default]
    Child,
}

/// Position of the reference scope in the owning hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchyType {
    /// The owning scope is the root of the hierarchy.
    Root,
    /// The owning scope is the direct parent.
    Parent,
}

/// Directed link from an owning scope to a referenced scope.
///
/// For link type `Child`, `scope_*` names the parent and `reference_scope_*`
/// names the child.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoricEntityLink {
    pub id: String,
    pub link_type: EntityLinkType,
    pub scope_id: String,
    pub sub_scope_id: Option<String>,
    pub scope_type: String,
    pub scope_definition_id: Option<String>,
    pub parent_element_id: Option<String>,
    pub reference_scope_id: String,
    pub reference_scope_type: String,
    pub reference_scope_definition_id: Option<String>,
    pub root_scope_id: Option<String>,
    pub root_scope_type: Option<String>,
    pub hierarchy_type: Option<HierarchyType>,
    pub create_time: DateTime<Utc>,
}

impl HistoricEntityLink {
    /// Whether `(id, scope_type)` is the owning side of this link.
    pub fn is_owned_by(&self, id: &str, scope_type: &str) -> bool {
        self.scope_id == id && self.scope_type == scope_type
    }

    /// Whether `(id, scope_type)` is the referenced side of this link.
    pub fn references(&self, id: &str, scope_type: &str) -> bool {
        self.reference_scope_id == id && self.reference_scope_type == scope_type
    }
}
