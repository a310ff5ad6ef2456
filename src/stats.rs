//! Roll-ups over lists of equipment.
//!
//! Every function accepts any iterator of `&Property`, so the same code
//! serves a whole building, a floor, a single room or a filtered list.
//! Percentages never divide by zero: an empty scope is 100% healthy and an
//! empty type has a 0% failure rate.

use crate::model::{Building, Floor, Hall, Property, PropertyStatus, PropertyType};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub working: usize,
    pub not_working: usize,
}

impl StatusCounts {
    fn record(&mut self, status: PropertyStatus) {
        match status {
            PropertyStatus::Working => self.working += 1,
            PropertyStatus::NotWorking => self.not_working += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.working + self.not_working
    }

    /// Share of working items, rounded half up to a whole percent.
    #[must_use]
    pub fn health_percentage(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 100;
        }
        ((200 * self.working + total) / (2 * total)) as u8
    }
}

/// Per-type tally, as shown in the type breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSummary {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub working: usize,
    pub not_working: usize,
}

impl TypeSummary {
    fn empty(property_type: PropertyType) -> Self {
        Self {
            property_type,
            working: 0,
            not_working: 0,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.working + self.not_working
    }

    /// Working share rounded half up; 100 when there are none.
    #[must_use]
    pub fn working_percentage(&self) -> u8 {
        StatusCounts {
            working: self.working,
            not_working: self.not_working,
        }
        .health_percentage()
    }

    /// Percentage of this type that is not working; 0 when there are none.
    #[must_use]
    pub fn not_working_percentage(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.not_working as f64 / total as f64 * 100.0,
        }
    }
}

/// Per-location tally for a floor, hall or room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSummary {
    pub id: u32,
    pub name: String,
    pub count: usize,
    pub working: usize,
    pub not_working: usize,
}

impl LocationSummary {
    fn new<'a>(id: u32, name: &str, properties: impl IntoIterator<Item = &'a Property>) -> Self {
        let counts = count_by_status(properties);
        Self {
            id,
            name: name.to_string(),
            count: counts.total(),
            working: counts.working,
            not_working: counts.not_working,
        }
    }

    #[must_use]
    pub fn health_percentage(&self) -> u8 {
        StatusCounts {
            working: self.working,
            not_working: self.not_working,
        }
        .health_percentage()
    }
}

#[must_use]
pub fn count_by_status<'a>(properties: impl IntoIterator<Item = &'a Property>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for property in properties {
        counts.record(property.status);
    }
    counts
}

#[must_use]
pub fn health_percentage<'a>(properties: impl IntoIterator<Item = &'a Property>) -> u8 {
    count_by_status(properties).health_percentage()
}

/// Item count per type. Every type has an entry, zero included, and the map
/// iterates in declaration order.
#[must_use]
pub fn count_by_type<'a>(
    properties: impl IntoIterator<Item = &'a Property>,
) -> BTreeMap<PropertyType, usize> {
    let mut counts: BTreeMap<PropertyType, usize> =
        PropertyType::ALL.into_iter().map(|t| (t, 0)).collect();
    for property in properties {
        *counts.entry(property.property_type).or_insert(0) += 1;
    }
    counts
}

/// Working / not working split for every type, in declaration order.
#[must_use]
pub fn type_summaries<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Vec<TypeSummary> {
    let mut summaries: Vec<TypeSummary> =
        PropertyType::ALL.into_iter().map(TypeSummary::empty).collect();

    for property in properties {
        if let Some(summary) = summaries
            .iter_mut()
            .find(|s| s.property_type == property.property_type)
        {
            match property.status {
                PropertyStatus::Working => summary.working += 1,
                PropertyStatus::NotWorking => summary.not_working += 1,
            }
        }
    }

    summaries
}

/// Type summaries ordered by how many items each type has, largest first.
/// Equal counts keep declaration order.
#[must_use]
pub fn type_insights<'a>(properties: impl IntoIterator<Item = &'a Property>) -> Vec<TypeSummary> {
    let mut summaries = type_summaries(properties);
    summaries.sort_by(|a, b| b.total().cmp(&a.total()));
    summaries
}

/// The type with the highest share of broken items.
///
/// Ties go to the type declared first, so an all-healthy or empty input
/// reports monitors.
#[must_use]
pub fn most_problematic_type<'a>(
    properties: impl IntoIterator<Item = &'a Property>,
) -> TypeSummary {
    type_summaries(properties)
        .into_iter()
        .fold(None, |worst: Option<TypeSummary>, summary| match worst {
            Some(w) if w.not_working_percentage() >= summary.not_working_percentage() => Some(w),
            _ => Some(summary),
        })
        .unwrap_or_else(|| TypeSummary::empty(PropertyType::Monitor))
}

#[must_use]
pub fn floor_summaries(building: &Building) -> Vec<LocationSummary> {
    building
        .floors
        .iter()
        .map(|f| LocationSummary::new(f.id, &f.name, f.properties()))
        .collect()
}

#[must_use]
pub fn hall_summaries(floor: &Floor) -> Vec<LocationSummary> {
    floor
        .halls
        .iter()
        .map(|h| LocationSummary::new(h.id, &h.name, h.properties()))
        .collect()
}

#[must_use]
pub fn room_summaries(hall: &Hall) -> Vec<LocationSummary> {
    hall.rooms
        .iter()
        .map(|r| LocationSummary::new(r.id, &r.name, r.properties()))
        .collect()
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingStats {
    pub floors: usize,
    pub halls: usize,
    pub rooms: usize,
    pub properties: usize,
    pub status: StatusCounts,
    pub health_percentage: u8,
    pub most_problematic: TypeSummary,
}

impl BuildingStats {
    #[must_use]
    pub fn collect(building: &Building) -> Self {
        let status = count_by_status(building.properties());
        Self {
            floors: building.floors.len(),
            halls: building.hall_count(),
            rooms: building.room_count(),
            properties: status.total(),
            status,
            health_percentage: status.health_percentage(),
            most_problematic: most_problematic_type(building.properties()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn item(id: usize, property_type: PropertyType, status: PropertyStatus) -> Property {
        Property {
            id: format!("p-{id}"),
            property_type,
            brand: "Brand".to_string(),
            model: "Model".to_string(),
            status,
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
            notes: None,
        }
    }

    fn with_working(working: usize, total: usize) -> Vec<Property> {
        (0..total)
            .map(|i| {
                let status = if i < working {
                    PropertyStatus::Working
                } else {
                    PropertyStatus::NotWorking
                };
                item(i, PropertyType::Monitor, status)
            })
            .collect()
    }

    #[test]
    fn status_counts_partition_the_input() {
        let properties = with_working(4, 9);
        let counts = count_by_status(&properties);
        assert_eq!(counts, StatusCounts { working: 4, not_working: 5 });
        assert_eq!(counts.total(), properties.len());
    }

    #[test]
    fn empty_scope_is_fully_healthy() {
        assert_eq!(health_percentage(&Vec::<Property>::new()), 100);
        assert_eq!(StatusCounts::default().health_percentage(), 100);
    }

    #[test]
    fn seven_of_ten_is_seventy_percent() {
        assert_eq!(health_percentage(&with_working(7, 10)), 70);
    }

    #[test]
    fn health_rounds_half_up() {
        assert_eq!(health_percentage(&with_working(1, 8)), 13); // 12.5
        assert_eq!(health_percentage(&with_working(2, 3)), 67);
        assert_eq!(health_percentage(&with_working(1, 3)), 33);
        assert_eq!(health_percentage(&with_working(0, 5)), 0);
        assert_eq!(health_percentage(&with_working(5, 5)), 100);
    }

    #[test]
    fn health_stays_in_range() {
        for total in 1..40 {
            for working in 0..=total {
                let pct = health_percentage(&with_working(working, total));
                assert!(pct <= 100, "{working}/{total} gave {pct}");
            }
        }
    }

    #[test]
    fn type_counts_include_zero_entries() {
        let properties = vec![
            item(0, PropertyType::Fan, PropertyStatus::Working),
            item(1, PropertyType::Fan, PropertyStatus::NotWorking),
            item(2, PropertyType::Ac, PropertyStatus::Working),
        ];

        let counts = count_by_type(&properties);
        assert_eq!(counts.len(), PropertyType::ALL.len());
        assert_eq!(counts[&PropertyType::Fan], 2);
        assert_eq!(counts[&PropertyType::Ac], 1);
        assert_eq!(counts[&PropertyType::Monitor], 0);

        let order: Vec<PropertyType> = counts.keys().copied().collect();
        assert_eq!(order, PropertyType::ALL.to_vec());
    }

    #[test]
    fn most_problematic_picks_highest_failure_share() {
        let properties = vec![
            item(0, PropertyType::Monitor, PropertyStatus::NotWorking),
            item(1, PropertyType::Monitor, PropertyStatus::Working),
            item(2, PropertyType::Monitor, PropertyStatus::Working),
            item(3, PropertyType::Light, PropertyStatus::NotWorking),
            item(4, PropertyType::Light, PropertyStatus::Working),
        ];

        let worst = most_problematic_type(&properties);
        assert_eq!(worst.property_type, PropertyType::Light);
        assert_eq!(worst.not_working, 1);
        assert_eq!(worst.total(), 2);
    }

    #[test]
    fn most_problematic_ties_go_to_first_type() {
        let properties = vec![
            item(0, PropertyType::Ac, PropertyStatus::NotWorking),
            item(1, PropertyType::Keyboard, PropertyStatus::NotWorking),
        ];
        assert_eq!(
            most_problematic_type(&properties).property_type,
            PropertyType::Keyboard
        );
        assert_eq!(
            most_problematic_type(&Vec::<Property>::new()).property_type,
            PropertyType::Monitor
        );
    }

    #[test]
    fn insights_put_most_common_types_first() {
        let properties = vec![
            item(0, PropertyType::Fan, PropertyStatus::Working),
            item(1, PropertyType::Light, PropertyStatus::Working),
            item(2, PropertyType::Light, PropertyStatus::NotWorking),
            item(3, PropertyType::Light, PropertyStatus::Working),
            item(4, PropertyType::Mouse, PropertyStatus::Working),
        ];

        let order: Vec<(PropertyType, usize, u8)> = type_insights(&properties)
            .iter()
            .map(|s| (s.property_type, s.total(), s.working_percentage()))
            .collect();
        assert_eq!(
            order,
            vec![
                (PropertyType::Light, 3, 67),
                (PropertyType::Mouse, 1, 100),
                (PropertyType::Fan, 1, 100),
                (PropertyType::Monitor, 0, 100),
                (PropertyType::Keyboard, 0, 100),
                (PropertyType::WifiRouter, 0, 100),
                (PropertyType::Ac, 0, 100),
            ]
        );
    }

    #[test]
    fn empty_type_has_zero_failure_rate() {
        let summaries = type_summaries(&Vec::<Property>::new());
        assert!(summaries.iter().all(|s| s.not_working_percentage() < f64::EPSILON));
    }

    fn generated() -> Building {
        crate::generator::Generator::seeded(6, NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
            .building(&crate::layout::BuildingLayout::default())
            .unwrap()
    }

    fn assert_consistent(summary: &LocationSummary, expected: usize) {
        assert_eq!(summary.count, expected, "{}", summary.name);
        assert_eq!(summary.working + summary.not_working, summary.count);
        assert!(summary.health_percentage() <= 100);
    }

    #[test]
    fn floor_summaries_cover_each_floor() {
        let building = generated();
        let summaries = floor_summaries(&building);

        assert_eq!(summaries.len(), building.floors.len());
        for (summary, floor) in summaries.iter().zip(&building.floors) {
            assert_eq!((summary.id, summary.name.as_str()), (floor.id, floor.name.as_str()));
            assert_consistent(summary, floor.properties().count());
            assert_eq!(summary.working, count_by_status(floor.properties()).working);
        }
        let total: usize = summaries.iter().map(|s| s.count).sum();
        assert_eq!(total, building.property_count());
    }

    #[test]
    fn hall_and_room_summaries_cover_each_subtree() {
        let building = generated();
        for floor in &building.floors {
            for (summary, hall) in hall_summaries(floor).iter().zip(&floor.halls) {
                assert_eq!(summary.id, hall.id);
                assert_consistent(summary, hall.properties().count());

                let rooms = room_summaries(hall);
                assert_eq!(rooms.len(), hall.rooms.len());
                for (room_summary, room) in rooms.iter().zip(&hall.rooms) {
                    assert_eq!(room_summary.name, room.name);
                    assert_consistent(room_summary, room.properties.len());
                    assert_eq!(room_summary.health_percentage(), health_percentage(&room.properties));
                }
                assert_eq!(rooms.iter().map(|r| r.count).sum::<usize>(), summary.count);
            }
        }
    }

    #[test]
    fn empty_room_summary_is_fully_healthy() {
        let hall = Hall {
            id: 1,
            name: "Corridor".to_string(),
            rooms: vec![crate::model::Room {
                id: 1,
                name: "Front Side".to_string(),
                properties: Vec::new(),
            }],
        };

        let summaries = room_summaries(&hall);
        assert_eq!(
            summaries,
            vec![LocationSummary {
                id: 1,
                name: "Front Side".to_string(),
                count: 0,
                working: 0,
                not_working: 0,
            }]
        );
        assert_eq!(summaries[0].health_percentage(), 100);
    }

    #[test]
    fn location_health_uses_its_own_counts() {
        let summary = LocationSummary {
            id: 3,
            name: "Floor 3".to_string(),
            count: 10,
            working: 7,
            not_working: 3,
        };
        assert_eq!(summary.health_percentage(), 70);
    }
}
