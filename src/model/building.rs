use super::Property;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32, // unique within its hall
    pub name: String,
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    pub id: u32, // unique within its floor
    pub name: String,
    pub rooms: Vec<Room>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Floor {
    pub id: u32,
    pub name: String,
    pub halls: Vec<Hall>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub floors: Vec<Floor>,
}

impl Room {
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }
}

impl Hall {
    #[must_use]
    pub fn room(&self, id: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.rooms.iter().flat_map(Room::properties)
    }
}

impl Floor {
    #[must_use]
    pub fn hall(&self, id: u32) -> Option<&Hall> {
        self.halls.iter().find(|h| h.id == id)
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.halls.iter().map(|h| h.rooms.len()).sum()
    }

    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.halls.iter().flat_map(Hall::properties)
    }
}

impl Building {
    #[must_use]
    pub fn new(floors: Vec<Floor>) -> Self {
        Self { floors }
    }

    /// Looks up a floor by id. `None` is the "floor not found" outcome.
    #[must_use]
    pub fn floor(&self, id: u32) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn hall(&self, floor_id: u32, hall_id: u32) -> Option<&Hall> {
        self.floor(floor_id).and_then(|f| f.hall(hall_id))
    }

    #[must_use]
    pub fn room(&self, floor_id: u32, hall_id: u32, room_id: u32) -> Option<&Room> {
        self.hall(floor_id, hall_id).and_then(|h| h.room(room_id))
    }

    /// Finds a property anywhere in the building by its id.
    #[must_use]
    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties().find(|p| p.id == id)
    }

    /// Every property in floor, hall, room, then generation order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.floors.iter().flat_map(Floor::properties)
    }

    #[must_use]
    pub fn hall_count(&self) -> usize {
        self.floors.iter().map(|f| f.halls.len()).sum()
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.floors.iter().map(Floor::room_count).sum()
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.floors
            .iter()
            .flat_map(|f| &f.halls)
            .flat_map(|h| &h.rooms)
            .map(|r| r.properties.len())
            .sum()
    }
}
