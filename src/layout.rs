//! Building layout configuration.
//!
//! The layout fixes the shape of the generated building: which floors
//! exist, which halls each floor has and the ordered room names inside
//! each hall. Only equipment is randomized; the shape never is.
//!
//! A layout can be loaded from TOML:
//!
//! ```toml
//! [[floors]]
//! id = 2
//!
//! [[floors.halls]]
//! name = "Left Wing"
//! rooms = ["Seminar Hall"]
//! ```

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const CORRIDOR_ROOMS: &[&str] = &["Front Side", "Back Side"];

// floor id → (left wing rooms, right wing rooms); every floor also has a corridor
const DEFAULT_FLOORS: &[(u32, &[&str], &[&str])] = &[
    (2, &["Seminar Hall"], &["Auditorium"]),
    (
        3,
        &["Bay 1", "Bay 2", "Bay 3", "Bay 4", "Bay 5"],
        &[
            "CEO Cabin",
            "HR Office",
            "Conference Room",
            "Accounts",
            "Reception",
            "IOT Lab",
        ],
    ),
    (4, &["Auditorium"], &["Seminar Hall"]),
    (5, &["Bay 1"], &["Server Room", "Network Lab"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingLayout {
    pub floors: Vec<FloorLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLayout {
    pub id: u32,
    #[serde(default)]
    pub halls: Vec<HallLayout>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallLayout {
    pub name: String,
    pub rooms: Vec<String>,
}

impl HallLayout {
    #[must_use]
    pub fn new(name: &str, rooms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            rooms: rooms.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

impl Default for BuildingLayout {
    /// Floors 2 to 5, each split into a left wing, a corridor and a right wing.
    fn default() -> Self {
        let floors = DEFAULT_FLOORS
            .iter()
            .map(|&(id, left, right)| FloorLayout {
                id,
                halls: vec![
                    HallLayout::new("Left Wing", left),
                    HallLayout::new("Corridor", CORRIDOR_ROOMS),
                    HallLayout::new("Right Wing", right),
                ],
            })
            .collect();

        Self { floors }
    }
}

impl BuildingLayout {
    /// Reads and validates a TOML layout file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LayoutError> {
        let content = std::fs::read_to_string(&path).map_err(|source| LayoutError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;

        let layout = Self::from_toml_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            floors = layout.floors.len(),
            "loaded building layout"
        );
        Ok(layout)
    }

    /// Parses and validates a TOML layout document.
    pub fn from_toml_str(content: &str) -> Result<Self, LayoutError> {
        let layout: Self = toml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    #[must_use]
    pub fn floor(&self, id: u32) -> Option<&FloorLayout> {
        self.floors.iter().find(|f| f.id == id)
    }

    /// Checks the structural rules that generation relies on.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Invalid`] when there are no floors, when a
    /// floor id repeats, when a hall name repeats within a floor, when a
    /// hall has no rooms, or when a hall or room name is blank.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.floors.is_empty() {
            return Err(invalid("layout has no floors".to_string()));
        }

        let mut floor_ids = HashSet::new();
        for floor in &self.floors {
            if !floor_ids.insert(floor.id) {
                return Err(invalid(format!("floor {} is defined twice", floor.id)));
            }

            let mut hall_names = HashSet::new();
            for hall in &floor.halls {
                if hall.name.trim().is_empty() {
                    return Err(invalid(format!("floor {} has a hall without a name", floor.id)));
                }
                if !hall_names.insert(hall.name.as_str()) {
                    return Err(invalid(format!(
                        "floor {} has two halls named '{}'",
                        floor.id, hall.name
                    )));
                }
                if hall.rooms.is_empty() {
                    return Err(invalid(format!(
                        "hall '{}' on floor {} has no rooms",
                        hall.name, floor.id
                    )));
                }
                if hall.rooms.iter().any(|r| r.trim().is_empty()) {
                    return Err(invalid(format!(
                        "hall '{}' on floor {} has a room without a name",
                        hall.name, floor.id
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> LayoutError {
    LayoutError::Invalid { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_layout_is_valid() {
        let layout = BuildingLayout::default();
        assert!(layout.validate().is_ok());

        let ids: Vec<u32> = layout.floors.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5]);
    }

    #[test]
    fn every_default_floor_has_three_wings() {
        for floor in &BuildingLayout::default().floors {
            let names: Vec<&str> = floor.halls.iter().map(|h| h.name.as_str()).collect();
            assert_eq!(names, vec!["Left Wing", "Corridor", "Right Wing"]);
            assert_eq!(floor.halls[1].rooms, vec!["Front Side", "Back Side"]);
        }
    }

    #[test]
    fn fifth_floor_hosts_the_server_room() {
        let layout = BuildingLayout::default();
        let floor = layout.floor(5).unwrap();
        assert_eq!(floor.halls[0].rooms, vec!["Bay 1"]);
        assert!(floor.halls[2].rooms.iter().any(|r| r == "Server Room"));
        assert_eq!(floor.halls[2].rooms.len(), 2);
    }

    #[test]
    fn parses_toml_layout() {
        let layout = BuildingLayout::from_toml_str(
            r#"
            [[floors]]
            id = 1

            [[floors.halls]]
            name = "Lobby"
            rooms = ["Reception", "Corridor"]

            [[floors]]
            id = 7
            "#,
        )
        .unwrap();

        assert_eq!(layout.floors.len(), 2);
        assert_eq!(layout.floors[0].halls[0].rooms, vec!["Reception", "Corridor"]);
        assert!(layout.floor(7).unwrap().halls.is_empty());
    }

    #[test]
    fn rejects_duplicate_floor_ids() {
        let err = BuildingLayout::from_toml_str(
            r"
            [[floors]]
            id = 2

            [[floors]]
            id = 2
            ",
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "invalid layout: floor 2 is defined twice");
    }

    #[test]
    fn rejects_hall_without_rooms() {
        let layout = BuildingLayout {
            floors: vec![FloorLayout {
                id: 1,
                halls: vec![HallLayout::new("Empty", &[])],
            }],
        };
        assert!(matches!(layout.validate(), Err(LayoutError::Invalid { .. })));
    }

    #[test]
    fn rejects_empty_layout_and_bad_toml() {
        assert!(matches!(
            BuildingLayout::from_toml_str("floors = []"),
            Err(LayoutError::Invalid { .. })
        ));
        assert!(matches!(
            BuildingLayout::from_toml_str("floors = 3"),
            Err(LayoutError::Parse { .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = BuildingLayout::load("/nonexistent/etrack-layout.toml").unwrap_err();
        assert!(matches!(err, LayoutError::FileRead { .. }));
    }
}
