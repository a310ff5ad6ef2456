use super::Generator;
use crate::error::LayoutError;
use crate::layout::{BuildingLayout, FloorLayout};
use crate::model::{Building, Floor, Hall, PropertyType, Room};
use rand::Rng;

const MAX_PER_TYPE: usize = 3;

fn is_corridor(room_name: &str) -> bool {
    room_name.eq_ignore_ascii_case("corridor")
}

impl<R: Rng> Generator<R> {
    /// Generates a room and its equipment.
    ///
    /// Corridors only receive fans and lights; other rooms receive every
    /// type. Each applicable type gets between 0 and 3 items, with ids of
    /// the form `{floor}-{hall}-{room}-{type}-{index}`.
    pub fn room(&mut self, floor_id: u32, hall_id: u32, room_id: u32, room_name: &str) -> Room {
        let types: &[PropertyType] = if is_corridor(room_name) {
            &PropertyType::CORRIDOR
        } else {
            &PropertyType::ALL
        };

        let mut properties = Vec::new();
        for &property_type in types {
            let count = self.rng.gen_range(0..=MAX_PER_TYPE);
            for index in 0..count {
                let id = format!("{floor_id}-{hall_id}-{room_id}-{property_type}-{index}");
                properties.push(self.property(property_type, id));
            }
        }

        Room {
            id: room_id,
            name: room_name.to_string(),
            properties,
        }
    }

    /// Generates a hall whose rooms take 1-based ids in the given order.
    pub fn hall<S: AsRef<str>>(
        &mut self,
        floor_id: u32,
        hall_id: u32,
        hall_name: &str,
        room_names: &[S],
    ) -> Hall {
        let rooms = (1..)
            .zip(room_names)
            .map(|(room_id, name)| self.room(floor_id, hall_id, room_id, name.as_ref()))
            .collect();

        Hall {
            id: hall_id,
            name: hall_name.to_string(),
            rooms,
        }
    }

    /// Generates the floor with id `floor_id` as described by `layout`.
    ///
    /// A floor id the layout does not describe yields a floor with no halls.
    pub fn floor(&mut self, layout: &BuildingLayout, floor_id: u32) -> Floor {
        match layout.floor(floor_id) {
            Some(floor_layout) => self.floor_from(floor_layout),
            None => {
                tracing::debug!(floor_id, "floor not in layout, generating it empty");
                Floor {
                    id: floor_id,
                    name: format!("Floor {floor_id}"),
                    halls: Vec::new(),
                }
            }
        }
    }

    fn floor_from(&mut self, floor_layout: &FloorLayout) -> Floor {
        let floor_id = floor_layout.id;
        let halls = (1..)
            .zip(&floor_layout.halls)
            .map(|(hall_id, hall)| self.hall(floor_id, hall_id, &hall.name, &hall.rooms))
            .collect();

        Floor {
            id: floor_id,
            name: format!("Floor {floor_id}"),
            halls,
        }
    }

    /// Generates every floor of `layout`, in layout order.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Invalid`] if `layout` fails
    /// [`BuildingLayout::validate`], e.g. when two floors share an id.
    pub fn building(&mut self, layout: &BuildingLayout) -> Result<Building, LayoutError> {
        layout.validate()?;

        let floors = layout.floors.iter().map(|f| self.floor_from(f)).collect();

        let building = Building::new(floors);
        tracing::info!(
            floors = building.floors.len(),
            rooms = building.room_count(),
            properties = building.property_count(),
            "generated building"
        );
        Ok(building)
    }
}
