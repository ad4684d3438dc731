//! Ordered, read-only list of curriculum modules.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Module, ModuleId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("curriculum has no modules")]
    Empty,

    #[error("module id `{0}` appears more than once")]
    DuplicateId(ModuleId),

    #[error("module `{0}` is not in the curriculum")]
    NotFound(ModuleId),
}

/// Modules in curriculum order. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumCatalog {
    modules: Vec<Module>,
}

impl CurriculumCatalog {
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateId` when two modules share an id.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        if modules.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if !seen.insert(module.id()) {
                return Err(CatalogError::DuplicateId(module.id().clone()));
            }
        }
        Ok(Self { modules })
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if `id` is not in the catalog.
    pub fn module(&self, id: &ModuleId) -> Result<&Module, CatalogError> {
        self.modules
            .iter()
            .find(|module| module.id() == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    /// Position of `id` in curriculum order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if `id` is not in the catalog.
    pub fn index_of(&self, id: &ModuleId) -> Result<usize, CatalogError> {
        self.modules
            .iter()
            .position(|module| module.id() == id)
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// The catalog is never empty, so there is always a first module.
    #[must_use]
    pub fn first(&self) -> &Module {
        &self.modules[0]
    }

    #[must_use]
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.modules.iter().any(|module| module.id() == id)
    }

    #[must_use]
    pub fn ids(&self) -> Vec<ModuleId> {
        self.modules.iter().map(|module| module.id().clone()).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{catalog, id, module};
    use super::*;

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(CurriculumCatalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CurriculumCatalog::new(vec![module("intro", 1), module("intro", 2)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(id("intro")));
    }

    #[test]
    fn lookups_follow_curriculum_order() {
        let catalog = catalog(&["intro", "workspace", "frontend"]);
        assert_eq!(catalog.total_count(), 3);
        assert_eq!(catalog.index_of(&id("frontend")).unwrap(), 2);
        assert_eq!(catalog.first().id(), &id("intro"));
        assert_eq!(catalog.module(&id("workspace")).unwrap().id(), &id("workspace"));
    }

    #[test]
    fn unknown_id_is_an_error_not_a_default() {
        let catalog = catalog(&["intro"]);
        assert_eq!(
            catalog.module(&id("backend")).unwrap_err(),
            CatalogError::NotFound(id("backend"))
        );
        assert!(catalog.index_of(&id("backend")).is_err());
        assert!(!catalog.contains(&id("backend")));
    }
}
