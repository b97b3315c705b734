//! The page structure importer.
//!
//! Walks the page-element tree of a page definition and places each element
//! into the draft layout's structure model at its positional index. Only a
//! root of type `Root` is imported; anything else is a clean no-op.

use crate::error::InitializationError;
use siteinit_descriptor::{PageDefinition, PageElementNode};
use siteinit_structure::{ItemId, LayoutStructure};
use siteinit_traits::LayoutStructureService;
use siteinit_types::Layout;

pub struct PageStructureImporter<'a> {
    structures: &'a dyn LayoutStructureService,
}

impl<'a> PageStructureImporter<'a> {
    pub fn new(structures: &'a dyn LayoutStructureService) -> Self {
        Self { structures }
    }

    /// Imports a page definition's element tree into a draft layout.
    ///
    /// No-op when the definition has no `pageElement` or its root is not of
    /// type `Root`. Otherwise the draft's persisted structure is
    /// deserialized, each child of the root is placed under the main item at
    /// its 0-based array position (recursing into nested children the same
    /// way), and the mutated model is handed back to the structure service.
    pub fn import_page_definition(
        &self,
        draft: &Layout,
        definition: &PageDefinition,
    ) -> Result<(), InitializationError> {
        let Some(root) = &definition.page_element else {
            return Ok(());
        };
        if !root.is_root() {
            log::debug!(
                "skipping page-element import for layout {}: root type '{}' is not importable",
                draft.id,
                root.kind
            );
            return Ok(());
        }

        let data = self.structures.fetch_structure_data(draft)?;
        let mut structure = LayoutStructure::of(&data)?;
        let main_item_id = structure.main_item_id().clone();

        for (position, serialized) in root.page_elements.iter().enumerate() {
            self.import_page_element(&mut structure, &main_item_id, serialized, position)?;
        }

        self.structures.save_structure(draft, &structure)?;
        Ok(())
    }

    /// Places one serialized element under a parent at `position`, then its
    /// children under it, preserving array order at every level.
    fn import_page_element(
        &self,
        structure: &mut LayoutStructure,
        parent_id: &ItemId,
        serialized: &str,
        position: usize,
    ) -> Result<(), InitializationError> {
        let node = PageElementNode::parse(serialized)?;
        let item_id = structure.add_item(node.kind.clone(), node.definition.clone());
        structure.insert_child_at(parent_id, item_id.clone(), position)?;

        for (child_position, child) in node.page_elements.iter().enumerate() {
            self.import_page_element(structure, &item_id, child, child_position)?;
        }
        Ok(())
    }
}
