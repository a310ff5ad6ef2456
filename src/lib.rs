//! # Etrack
//!
//! A terminal facility tracker for browsing a building's floors, halls and
//! rooms and the equipment installed in them.
//!
//! ## Features
//!
//! - Generate a building from a declarative layout (seedable)
//! - Status, type and per-location roll-ups with health percentages
//! - Filter equipment by floor, hall, room, type and status
//! - Edit a property's status and notes without touching the rest
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use etrack::generator::Generator;
//! use etrack::layout::BuildingLayout;
//! use etrack::stats::health_percentage;
//!
//! # fn main() -> Result<(), etrack::error::LayoutError> {
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let building = Generator::seeded(42, today).building(&BuildingLayout::default())?;
//! println!("Rooms: {}", building.room_count());
//! println!("Health: {}%", health_percentage(building.properties()));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod layout;
pub mod model;
pub mod query;
pub mod session;
pub mod stats;
pub mod ui;
