use crate::error::ExportError;
use crate::model::Building;
use crate::query::{filter_properties, flatten, PropertyFilter};
use std::fs::File;
use std::path::Path;

/// Writes one row per property matching `filter`, in building order.
///
/// Returns the number of rows written.
pub fn export_csv<P: AsRef<Path>>(
    building: &Building,
    filter: &PropertyFilter,
    path: P,
) -> Result<usize, ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Floor",
        "Hall",
        "Room",
        "ID",
        "Type",
        "Brand",
        "Model",
        "Status",
        "Purchase Date",
        "Notes",
    ])?;

    let all = flatten(building);
    let rows = filter_properties(&all, filter);

    for item in &rows {
        let hall = building.hall(item.floor_id, item.hall_id);
        let room = hall.and_then(|h| h.room(item.room_id));
        let property = item.property;

        let floor_id = item.floor_id.to_string();
        let purchase_date = property.purchase_date.to_string();

        writer.write_record([
            floor_id.as_str(),
            hall.map_or("-", |h| h.name.as_str()),
            room.map_or("-", |r| r.name.as_str()),
            property.id.as_str(),
            property.property_type.as_str(),
            property.brand.as_str(),
            property.model.as_str(),
            property.status.as_str(),
            purchase_date.as_str(),
            property.notes.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    tracing::info!(path = %path_ref.display(), rows = rows.len(), "exported CSV");
    Ok(rows.len())
}
