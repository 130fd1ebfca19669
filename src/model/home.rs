use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::furniture::Furniture;
use super::level::{Level, Room, Wall};
use super::view3d::ViewSnapshot;
use crate::config::PrintSettings;
use crate::error::HomeError;

/// Read-only view of the home state used by header/footer variables
pub trait HomeModelSnapshot {
    /// Name shown to the user (file name without directory and extension)
    fn presentation_name(&self) -> Option<String>;

    /// Raw file name the home was saved to
    fn raw_name(&self) -> Option<&str>;

    /// Name of the selected level, if any
    fn selected_level_name(&self) -> Option<&str>;

    /// Whether the selected level is viewable
    fn selected_level_viewable(&self) -> bool;
}

/// A home design
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Home {
    /// File the home was saved to
    pub name: Option<String>,
    pub levels: Vec<Level>,
    pub selected_level: Option<usize>,
    pub furniture: Vec<Furniture>,
    pub walls: Vec<Wall>,
    pub rooms: Vec<Room>,
    /// Stored print attributes
    pub print: Option<PrintSettings>,
    /// Projected snapshot of the 3D view
    pub view3d: Option<ViewSnapshot>,
}

impl Home {
    /// Parse a home from its JSON description
    pub fn from_json(content: &str) -> Result<Self, HomeError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a home from a JSON file
    pub fn load(path: &Path) -> Result<Self, HomeError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn selected_level(&self) -> Option<&Level> {
        self.selected_level.and_then(|index| self.levels.get(index))
    }

    /// Name of the level at `index`, if the home has levels
    pub fn level_name(&self, index: Option<usize>) -> Option<&str> {
        index
            .and_then(|i| self.levels.get(i))
            .map(|level| level.name.as_str())
    }

    /// Furniture shown in the furniture list
    pub fn visible_furniture(&self) -> impl Iterator<Item = &Furniture> {
        self.furniture.iter().filter(|piece| piece.visible)
    }
}

impl HomeModelSnapshot for Home {
    fn presentation_name(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let stem = Path::new(name).file_stem()?.to_string_lossy().into_owned();
        if stem.is_empty() {
            None
        } else {
            Some(stem)
        }
    }

    fn raw_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn selected_level_name(&self) -> Option<&str> {
        self.selected_level().map(|level| level.name.as_str())
    }

    fn selected_level_viewable(&self) -> bool {
        self.selected_level().map_or(true, |level| level.viewable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_name_strips_directory_and_extension() {
        let home = Home {
            name: Some("/projects/homes/Beach house.sh3d".to_string()),
            ..Default::default()
        };
        assert_eq!(home.presentation_name().as_deref(), Some("Beach house"));
        assert_eq!(home.raw_name(), Some("/projects/homes/Beach house.sh3d"));
    }

    #[test]
    fn test_unnamed_home() {
        let home = Home::default();
        assert!(home.presentation_name().is_none());
        assert!(home.selected_level_name().is_none());
        assert!(home.selected_level_viewable());
    }

    #[test]
    fn test_parse_home_json() {
        let json = r#"{
            "name": "flat.sh3d",
            "levels": [{"name": "Ground"}, {"name": "Attic", "elevation": 250, "viewable": false}],
            "selected_level": 1,
            "furniture": [{"name": "Sofa", "width": 200, "depth": 90, "height": 80, "level": 0}],
            "walls": [{"start": [0, 0], "end": [500, 0]}]
        }"#;
        let home = Home::from_json(json).unwrap();
        assert_eq!(home.levels.len(), 2);
        assert_eq!(home.selected_level_name(), Some("Attic"));
        assert!(!home.selected_level_viewable());
        assert_eq!(home.walls[0].thickness, 10.0);
        assert!(home.furniture[0].visible);
        assert!(home.print.is_none());
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = Home::from_json("{ \"levels\": 3 }").unwrap_err();
        assert!(matches!(err, HomeError::Parse(_)));
    }
}
