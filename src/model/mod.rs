pub mod building;
pub mod property;

pub use building::{Building, Floor, Hall, Room};
pub use property::{Property, PropertyStatus, PropertyType};
