//! Shared domain models.

use serde::{Deserialize, Serialize};

/// A single timetable entry.
///
/// All four fields are free-form strings; nothing is validated beyond
/// presence and duplicates are allowed. `departure_time` doubles as the
/// store's sort key under plain string comparison, so `"9:00"` and
/// `"09:00"` are distinct keys that order differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Station the train departs from.
    pub departure_point: String,
    /// Train number as printed on the timetable.
    #[serde(rename = "number_train")]
    pub number: String,
    /// Departure time, kept verbatim as entered.
    #[serde(rename = "time_departure")]
    pub departure_time: String,
    /// Destination station, matched case-insensitively by queries.
    pub destination: String,
}

impl TrainRecord {
    /// Build a record from its four fields.
    pub fn new(
        departure_point: impl Into<String>,
        number: impl Into<String>,
        departure_time: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            departure_point: departure_point.into(),
            number: number.into(),
            departure_time: departure_time.into(),
            destination: destination.into(),
        }
    }
}
