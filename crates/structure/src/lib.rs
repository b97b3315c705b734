//! The in-memory layout structure model.
//!
//! A layout's visual composition is persisted as an opaque JSON blob of the
//! form `{"mainItemId": ..., "items": {id: item}}`. This crate deserializes
//! that blob into an arena of id-keyed items (parent/child links are ids,
//! not pointers), supports insertion at an explicit position, and serializes
//! back out at the persistence boundary. The model is owned by one importer
//! for the duration of one layout's import.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Error type for structure model operations.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("malformed structure data: {0}")]
    Malformed(serde_json::Error),

    #[error("structure data could not be serialized: {0}")]
    Serialize(serde_json::Error),

    #[error("unknown structure item: {0}")]
    UnknownItem(ItemId),
}

/// The identifier of a single structure item.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random item id for a newly placed element.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the structure tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureItem {
    pub item_id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ItemId>,
    /// Element type, e.g. `Root` or `Fragment`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque element payload, carried through untouched.
    #[serde(default)]
    pub definition: serde_json::Value,
    #[serde(default)]
    pub children: Vec<ItemId>,
}

/// The structure model of one layout: an arena of items plus a designated
/// main item under which page elements are placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStructure {
    main_item_id: ItemId,
    items: IndexMap<ItemId, StructureItem>,
}

impl LayoutStructure {
    /// A fresh structure containing only a main `Root` item.
    pub fn empty() -> Self {
        let main_item_id = ItemId::generate();
        let mut items = IndexMap::new();
        items.insert(
            main_item_id.clone(),
            StructureItem {
                item_id: main_item_id.clone(),
                parent_id: None,
                kind: "Root".to_string(),
                definition: serde_json::Value::Null,
                children: Vec::new(),
            },
        );
        Self { main_item_id, items }
    }

    /// Deserializes previously persisted structure data.
    pub fn of(data: &str) -> Result<Self, StructureError> {
        let structure: Self = serde_json::from_str(data).map_err(StructureError::Malformed)?;
        if !structure.items.contains_key(&structure.main_item_id) {
            return Err(StructureError::UnknownItem(structure.main_item_id));
        }
        Ok(structure)
    }

    /// Serializes the model back to its persisted form.
    pub fn to_data(&self) -> Result<String, StructureError> {
        serde_json::to_string(self).map_err(StructureError::Serialize)
    }

    pub fn main_item_id(&self) -> &ItemId {
        &self.main_item_id
    }

    pub fn item(&self, id: &ItemId) -> Option<&StructureItem> {
        self.items.get(id)
    }

    /// Child ids of an item, in placement order. Empty for unknown ids.
    pub fn children_of(&self, id: &ItemId) -> &[ItemId] {
        self.items
            .get(id)
            .map(|item| item.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a detached item to the arena. It carries no parent until placed
    /// with [`LayoutStructure::insert_child_at`].
    pub fn add_item(
        &mut self,
        kind: impl Into<String>,
        definition: serde_json::Value,
    ) -> ItemId {
        let id = ItemId::generate();
        self.items.insert(
            id.clone(),
            StructureItem {
                item_id: id.clone(),
                parent_id: None,
                kind: kind.into(),
                definition,
                children: Vec::new(),
            },
        );
        id
    }

    /// Places an existing item under a parent at the given position.
    ///
    /// The position is clamped to the current child count, so appending past
    /// the end is not an error. Both items must already be in the arena.
    pub fn insert_child_at(
        &mut self,
        parent_id: &ItemId,
        child_id: ItemId,
        position: usize,
    ) -> Result<(), StructureError> {
        if !self.items.contains_key(parent_id) {
            return Err(StructureError::UnknownItem(parent_id.clone()));
        }
        let child = self
            .items
            .get_mut(&child_id)
            .ok_or_else(|| StructureError::UnknownItem(child_id.clone()))?;
        child.parent_id = Some(parent_id.clone());

        let parent = self
            .items
            .get_mut(parent_id)
            .ok_or_else(|| StructureError::UnknownItem(parent_id.clone()))?;
        let position = position.min(parent.children.len());
        parent.children.insert(position, child_id);
        Ok(())
    }
}
