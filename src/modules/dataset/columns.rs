//! Builds batch items from selected table columns and writes the
//! results back as appended columns.

use crate::modules::batch::domain::{BatchItem, BatchMode, ItemResult, Outcome, OutcomePayload};
use crate::shared::errors::{AppError, AppResult};

use super::table::CsvTable;

/// Which columns of the uploaded table feed the batch. Only the fields
/// matching the mode (and sub-mode) are read.
#[derive(Debug, Clone, Default)]
pub struct ColumnSelection {
    /// GEOCODE: the address column
    pub address: Option<String>,
    /// REVERSE, single-column form: one "lat,lng" string column
    pub coordinate: Option<String>,
    /// REVERSE, split form: separate lat / lng columns
    pub lat: Option<String>,
    pub lng: Option<String>,
    /// ROUTE: origin and destination columns
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// One item per table row, in row order.
pub fn build_items(
    table: &CsvTable,
    mode: BatchMode,
    selection: &ColumnSelection,
) -> AppResult<Vec<BatchItem>> {
    match mode {
        BatchMode::Geocode => {
            let address = required_column(table, selection.address.as_deref(), "address")?;
            Ok((0..table.row_count())
                .map(|row| BatchItem::Value(table.value(row, address).to_string()))
                .collect())
        }
        BatchMode::Reverse => {
            if let Some(name) = selection.coordinate.as_deref() {
                let coordinate = required_column(table, Some(name), "coordinate")?;
                Ok((0..table.row_count())
                    .map(|row| BatchItem::Value(table.value(row, coordinate).to_string()))
                    .collect())
            } else {
                let lat = required_column(table, selection.lat.as_deref(), "latitude")?;
                let lng = required_column(table, selection.lng.as_deref(), "longitude")?;
                Ok((0..table.row_count())
                    .map(|row| BatchItem::Pair {
                        lat: table.value(row, lat).to_string(),
                        lng: table.value(row, lng).to_string(),
                    })
                    .collect())
            }
        }
        BatchMode::Route => {
            let origin = required_column(table, selection.origin.as_deref(), "origin")?;
            let destination =
                required_column(table, selection.destination.as_deref(), "destination")?;
            Ok((0..table.row_count())
                .map(|row| BatchItem::Route {
                    origin: table.value(row, origin).to_string(),
                    destination: table.value(row, destination).to_string(),
                })
                .collect())
        }
    }
}

fn required_column(table: &CsvTable, name: Option<&str>, role: &str) -> AppResult<usize> {
    let name = name
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("no {} column selected", role)))?;

    table.column_index(name).ok_or_else(|| {
        AppError::ConfigError(format!("{} column '{}' not found in the dataset", role, name))
    })
}

/// Append the mode's result columns and fill them from the outcomes.
/// Failed rows keep blank cells; the error detail lives in the batch log.
pub fn augment_table(table: &mut CsvTable, mode: BatchMode, outcomes: &[Outcome]) {
    match mode {
        BatchMode::Geocode => {
            let lat = table.add_column("latitude");
            let lng = table.add_column("longitude");
            for outcome in outcomes {
                if let ItemResult::Success(OutcomePayload::Geocoded(point)) = &outcome.result {
                    table.set(outcome.index, lat, point.lat.to_string());
                    table.set(outcome.index, lng, point.lng.to_string());
                }
            }
        }
        BatchMode::Reverse => {
            let address = table.add_column("resolved_address");
            let admin1 = table.add_column("admin1");
            let admin2 = table.add_column("admin2");
            let admin3 = table.add_column("admin3");
            for outcome in outcomes {
                if let ItemResult::Success(OutcomePayload::Reversed(location)) = &outcome.result {
                    table.set(outcome.index, address, location.address.clone());
                    table.set(outcome.index, admin1, location.admin1.clone());
                    table.set(outcome.index, admin2, location.admin2.clone());
                    table.set(outcome.index, admin3, location.admin3.clone());
                }
            }
        }
        BatchMode::Route => {
            let distance = table.add_column("distance_km");
            let duration = table.add_column("duration_min");
            for outcome in outcomes {
                if let ItemResult::Success(OutcomePayload::Routed { summary, .. }) =
                    &outcome.result
                {
                    table.set(outcome.index, distance, summary.distance_km.clone());
                    table.set(outcome.index, duration, summary.duration_min.clone());
                }
            }
        }
    }
}
