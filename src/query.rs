//! Flattening, filtering and editing the equipment of a building.

use crate::error::EditError;
use crate::model::{Building, Property, PropertyStatus, PropertyType};
use std::str::FromStr;

/// A property together with the location that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedProperty<'a> {
    pub floor_id: u32,
    pub hall_id: u32,
    pub room_id: u32,
    pub property: &'a Property,
}

/// Lists every property in floor, hall, room, then generation order.
///
/// The order is fully determined by the building value, so two calls on the
/// same building always agree.
#[must_use]
pub fn flatten(building: &Building) -> Vec<LocatedProperty<'_>> {
    let mut located = Vec::with_capacity(building.property_count());

    for floor in &building.floors {
        for hall in &floor.halls {
            for room in &hall.rooms {
                located.extend(room.properties.iter().map(|property| LocatedProperty {
                    floor_id: floor.id,
                    hall_id: hall.id,
                    room_id: room.id,
                    property,
                }));
            }
        }
    }

    located
}

/// Constraints on a flattened property list. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    pub floor_id: Option<u32>,
    pub hall_id: Option<u32>,
    pub room_id: Option<u32>,
    pub property_type: Option<PropertyType>,
    pub status: Option<PropertyStatus>,
}

impl PropertyFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn floor(mut self, floor_id: u32) -> Self {
        self.floor_id = Some(floor_id);
        self
    }

    #[must_use]
    pub fn hall(mut self, hall_id: u32) -> Self {
        self.hall_id = Some(hall_id);
        self
    }

    #[must_use]
    pub fn room(mut self, room_id: u32) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn property_type(mut self, property_type: Option<PropertyType>) -> Self {
        self.property_type = property_type;
        self
    }

    #[must_use]
    pub fn status(mut self, status: Option<PropertyStatus>) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn matches(&self, item: &LocatedProperty<'_>) -> bool {
        self.floor_id.is_none_or(|id| id == item.floor_id)
            && self.hall_id.is_none_or(|id| id == item.hall_id)
            && self.room_id.is_none_or(|id| id == item.room_id)
            && self
                .property_type
                .is_none_or(|t| t == item.property.property_type)
            && self.status.is_none_or(|s| s == item.property.status)
    }
}

/// Keeps the items matching every constraint of `filter`, in their original order.
#[must_use]
pub fn filter_properties<'a>(
    properties: &[LocatedProperty<'a>],
    filter: &PropertyFilter,
) -> Vec<LocatedProperty<'a>> {
    properties
        .iter()
        .filter(|item| filter.matches(item))
        .copied()
        .collect()
}

/// Parses a selector value where `"all"` means no constraint.
pub fn parse_selection<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value.eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// The user-editable fields of a property. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyEdit {
    pub status: Option<PropertyStatus>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
}

impl PropertyEdit {
    #[must_use]
    pub fn status(status: PropertyStatus) -> Self {
        Self {
            status: Some(status),
            notes: None,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// Returns a copy of `building` with one property's status and notes replaced.
///
/// The property keeps its id, type, brand, model and purchase date, and no
/// other property changes. The input building is left untouched.
///
/// # Errors
///
/// Returns [`EditError::PropertyNotFound`] if no property has `property_id`.
pub fn apply_property_edit(
    building: &Building,
    property_id: &str,
    edit: &PropertyEdit,
) -> Result<Building, EditError> {
    let mut updated = building.clone();

    let property = updated
        .floors
        .iter_mut()
        .flat_map(|f| f.halls.iter_mut())
        .flat_map(|h| h.rooms.iter_mut())
        .flat_map(|r| r.properties.iter_mut())
        .find(|p| p.id == property_id)
        .ok_or_else(|| EditError::PropertyNotFound {
            id: property_id.to_string(),
        })?;

    if let Some(status) = edit.status {
        property.status = status;
    }
    if let Some(notes) = &edit.notes {
        property.notes.clone_from(notes);
    }

    tracing::info!(
        property_id,
        status = %property.status,
        "property edited"
    );

    Ok(updated)
}
