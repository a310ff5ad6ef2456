use chrono::NaiveDate;
use etrack::error::LayoutError;
use etrack::generator::Generator;
use etrack::layout::{BuildingLayout, FloorLayout, HallLayout};
use etrack::model::{Building, Floor, Property, PropertyStatus, PropertyType};
use etrack::query::{apply_property_edit, filter_properties, flatten, PropertyEdit, PropertyFilter};
use etrack::stats::{count_by_status, count_by_type, health_percentage, BuildingStats};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn generator(seed: u64) -> Generator<StdRng> {
    Generator::seeded(seed, today())
}

fn building(seed: u64) -> Building {
    generator(seed).building(&BuildingLayout::default()).unwrap()
}

#[test]
fn flatten_counts_every_room_property() {
    for seed in 0..10 {
        let building = building(seed);
        let per_room: usize = building
            .floors
            .iter()
            .flat_map(|f| &f.halls)
            .flat_map(|h| &h.rooms)
            .map(|r| r.properties.len())
            .sum();

        assert_eq!(flatten(&building).len(), per_room);
        assert_eq!(building.property_count(), per_room);
    }
}

#[test]
fn status_counts_cover_every_subtree() {
    let building = building(3);

    let whole = count_by_status(building.properties());
    assert_eq!(whole.total(), building.property_count());

    for floor in &building.floors {
        let counts = count_by_status(floor.properties());
        assert_eq!(counts.working + counts.not_working, floor.properties().count());
        for hall in &floor.halls {
            for room in &hall.rooms {
                let counts = count_by_status(&room.properties);
                assert_eq!(counts.total(), room.properties.len());
                let pct = health_percentage(&room.properties);
                assert!(pct <= 100);
                if room.properties.is_empty() {
                    assert_eq!(pct, 100);
                }
            }
        }
    }
}

#[test]
fn type_counts_list_every_type_for_any_room() {
    let building = building(5);
    for room in building.floors.iter().flat_map(|f| &f.halls).flat_map(|h| &h.rooms) {
        let counts = count_by_type(&room.properties);
        assert_eq!(counts.len(), PropertyType::ALL.len());
        assert_eq!(counts.values().sum::<usize>(), room.properties.len());
    }
}

#[test]
fn scenario_a_corridor_room() {
    for seed in 0..25 {
        let room = generator(seed).room(2, 1, 1, "Corridor");
        assert_eq!(room.id, 1);
        assert_eq!(room.name, "Corridor");
        assert!(room
            .properties
            .iter()
            .all(|p| p.property_type == PropertyType::Light || p.property_type == PropertyType::Fan));
    }
}

#[test]
fn scenario_b_third_floor() {
    let floor = generator(1).floor(&BuildingLayout::default(), 3);
    assert_eq!(floor.name, "Floor 3");
    assert_eq!(floor.halls.len(), 3);

    let names: Vec<&str> = floor.halls.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Left Wing", "Corridor", "Right Wing"]);

    let bays: Vec<&str> = floor.halls[0].rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(bays, vec!["Bay 1", "Bay 2", "Bay 3", "Bay 4", "Bay 5"]);

    let right = &floor.halls[2].rooms;
    assert_eq!(right.len(), 6);
    assert!(right.iter().any(|r| r.name == "CEO Cabin"));
    assert!(right.iter().any(|r| r.name == "IOT Lab"));
}

#[test]
fn scenario_c_seventy_percent_health() {
    let properties: Vec<Property> = (0..10)
        .map(|i| Property {
            id: format!("3-1-1-monitor-{i}"),
            property_type: PropertyType::Monitor,
            brand: "Dell".to_string(),
            model: "P2419H".to_string(),
            status: if i < 7 {
                PropertyStatus::Working
            } else {
                PropertyStatus::NotWorking
            },
            purchase_date: today(),
            notes: None,
        })
        .collect();

    assert_eq!(health_percentage(&properties), 70);
    assert_eq!(health_percentage(&Vec::<Property>::new()), 100);
}

#[test]
fn scenario_d_floor_outside_layout() {
    let floor = generator(0).floor(&BuildingLayout::default(), 99);
    assert_eq!(
        floor,
        Floor {
            id: 99,
            name: "Floor 99".to_string(),
            halls: Vec::new(),
        }
    );
}

#[test]
fn scenario_e_edit_one_status() {
    let building = building(8);
    let (floor_id, hall_id, room_id, target) = flatten(&building)
        .into_iter()
        .find(|l| l.property.status == PropertyStatus::Working)
        .map(|l| (l.floor_id, l.hall_id, l.room_id, l.property.clone()))
        .unwrap();

    let room_before = building.room(floor_id, hall_id, room_id).unwrap();
    let before = count_by_status(&room_before.properties);

    let updated = apply_property_edit(
        &building,
        &target.id,
        &PropertyEdit::status(PropertyStatus::NotWorking),
    )
    .unwrap();

    let room_after = updated.room(floor_id, hall_id, room_id).unwrap();
    let after = count_by_status(&room_after.properties);
    assert_eq!(after.working, before.working - 1);
    assert_eq!(after.not_working, before.not_working + 1);

    let edited = updated.property(&target.id).unwrap();
    assert_eq!(
        edited,
        &Property {
            status: PropertyStatus::NotWorking,
            ..target.clone()
        }
    );

    let changed: Vec<&str> = building
        .properties()
        .zip(updated.properties())
        .filter(|(a, b)| a != b)
        .map(|(a, _)| a.id.as_str())
        .collect();
    assert_eq!(changed, vec![target.id.as_str()]);
}

#[test]
fn filtering_is_pure_and_order_preserving() {
    let building = building(12);
    let all = flatten(&building);
    let filter = PropertyFilter::new()
        .floor(5)
        .property_type(Some(PropertyType::WifiRouter));

    let first = filter_properties(&all, &filter);
    let second = filter_properties(&all, &filter);
    assert_eq!(first, second);

    let positions: Vec<usize> = first
        .iter()
        .map(|l| all.iter().position(|a| a.property.id == l.property.id).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn custom_layout_drives_generation() {
    let layout = BuildingLayout {
        floors: vec![FloorLayout {
            id: 1,
            halls: vec![HallLayout::new("Lobby", &["Reception", "corridor"])],
        }],
    };
    layout.validate().unwrap();

    let building = generator(6).building(&layout).unwrap();
    assert_eq!(building.floors.len(), 1);

    let lobby = building.hall(1, 1).unwrap();
    assert_eq!(lobby.name, "Lobby");
    assert!(lobby.rooms[1]
        .properties
        .iter()
        .all(|p| PropertyType::CORRIDOR.contains(&p.property_type)));
    assert!(building.floor(2).is_none());
}

#[test]
fn repeated_floor_id_is_rejected_before_generation() {
    let layout = BuildingLayout {
        floors: vec![
            FloorLayout {
                id: 2,
                halls: vec![HallLayout::new("A", &["R1"])],
            },
            FloorLayout {
                id: 2,
                halls: vec![HallLayout::new("B", &["R2", "R3"])],
            },
        ],
    };

    assert!(matches!(
        generator(1).building(&layout),
        Err(LayoutError::Invalid { .. })
    ));
}

#[test]
fn same_seed_same_building() {
    assert_eq!(building(77), building(77));
    let stats = BuildingStats::collect(&building(77));
    assert_eq!(stats.floors, 4);
    assert_eq!(stats.halls, 12);
    assert_eq!(stats.status.total(), stats.properties);
}
