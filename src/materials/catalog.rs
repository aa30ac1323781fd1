use bevy::prelude::*;
use indexmap::IndexMap;

use super::presets::MaterialConfig;

/// Ordered material presets keyed by name, plus the current selection.
///
/// Insertion order is the order shown in the picker and the order of the
/// digit keys. Re-adding a name replaces that entry in place.
#[derive(Resource, Clone, Debug, Default)]
pub struct MaterialCatalog {
    entries: IndexMap<String, MaterialConfig>,
    selected: usize,
}

impl MaterialCatalog {
    pub fn new(presets: impl IntoIterator<Item = MaterialConfig>) -> Self {
        let mut catalog = Self::default();
        for preset in presets {
            catalog.entries.insert(preset.name.clone(), preset);
        }
        catalog
    }

    /// Insert or replace a preset and select it. Returns its index.
    pub fn add(&mut self, preset: MaterialConfig) -> usize {
        let (index, _) = self.entries.insert_full(preset.name.clone(), preset);
        self.selected = index;
        index
    }

    /// Select the preset at `index`, returning it if it exists.
    pub fn select(&mut self, index: usize) -> Option<&MaterialConfig> {
        let (_, preset) = self.entries.get_index(index)?;
        self.selected = index;
        Some(preset)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&MaterialConfig> {
        self.entries.get_index(self.selected).map(|(_, preset)| preset)
    }

    pub fn get(&self, name: &str) -> Option<&MaterialConfig> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialConfig> {
        self.entries.values()
    }

    pub fn to_vec(&self) -> Vec<MaterialConfig> {
        self.entries.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::presets::lab_presets;

    #[test]
    fn keeps_insertion_order() {
        let catalog = MaterialCatalog::new(lab_presets());
        let names: Vec<&str> = catalog.iter().map(|preset| preset.name.as_str()).collect();
        assert_eq!(names, ["Steel", "Concrete", "Glass", "Wood"]);
        assert_eq!(catalog.selected().map(|p| p.name.as_str()), Some("Steel"));
    }

    #[test]
    fn adding_selects_new_entry() {
        let mut catalog = MaterialCatalog::new(lab_presets());
        let index = catalog.add(MaterialConfig::new("Granite", 130.0, true, 0.01));
        assert_eq!(index, 4);
        assert_eq!(catalog.selected_index(), 4);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn adding_existing_name_replaces_in_place() {
        let mut catalog = MaterialCatalog::new(lab_presets());
        let index = catalog.add(MaterialConfig::new("Glass", 70.0, true, 0.01));
        assert_eq!(index, 2);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("Glass").map(|p| p.strength_mpa), Some(70.0));
    }

    #[test]
    fn selecting_out_of_range_keeps_selection() {
        let mut catalog = MaterialCatalog::new(lab_presets());
        catalog.select(3);
        assert!(catalog.select(9).is_none());
        assert_eq!(catalog.selected_index(), 3);
    }
}
