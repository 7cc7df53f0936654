use crate::region::Region;
use serde::Serialize;
use tandem_catalog::Template;
use thiserror::Error;

/// Render failures, surfaced as values. The renderer downgrades these to
/// an error outcome; nothing panics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RenderError {
    #[error("duplicate region path: {0}")]
    DuplicateRegionPath(String),
}

/// The path-addressable set of editable regions for one render, in
/// document order.
#[derive(Debug, Clone, Serialize)]
pub struct RegionTree {
    regions: Vec<Region>,
}

impl RegionTree {
    /// Instantiate every region leaf of a template. Region paths must be
    /// unique; a duplicate would make gestures ambiguous.
    pub fn from_template(template: &Template) -> Result<Self, RenderError> {
        let mut regions: Vec<Region> = Vec::new();
        let mut duplicate = None;
        template.tree.visit_regions(&mut |node| {
            if let Some(region) = Region::from_node(node) {
                if regions.iter().any(|existing| existing.path() == region.path()) {
                    duplicate.get_or_insert_with(|| region.path().to_string());
                } else {
                    regions.push(region);
                }
            }
        });
        match duplicate {
            Some(path) => Err(RenderError::DuplicateRegionPath(path)),
            None => Ok(RegionTree { regions }),
        }
    }

    pub fn region(&self, path: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.path() == path)
    }

    pub fn region_mut(&mut self, path: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|region| region.path() == path)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
