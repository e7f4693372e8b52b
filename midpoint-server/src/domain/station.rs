//! Station identifiers and raw station records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one (station, line) record.
///
/// A physical station served by two lines has two records, and therefore two
/// distinct `StationId`s sharing the same name.
///
/// # Examples
///
/// ```
/// use midpoint_server::domain::StationId;
///
/// let id = StationId::from("gangnam");
/// assert_eq!(id.as_str(), "gangnam");
/// assert_eq!(id.to_string(), "gangnam");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a transit line (e.g. `"2"` for Seoul line 2).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Create a line id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LineId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A raw station record as supplied by the dataset.
///
/// Records sharing a `line_id` must appear in physical line order; the graph
/// builder links them in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: StationId,
    pub name: String,
    pub line_id: LineId,
    pub latitude: f64,
    pub longitude: f64,
}

impl StationRecord {
    /// Create a new record.
    pub fn new(
        id: impl Into<StationId>,
        name: impl Into<String>,
        line_id: impl Into<LineId>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            line_id: line_id.into(),
            latitude,
            longitude,
        }
    }

    /// The key used to match records of the same physical station.
    pub fn name_key(&self) -> String {
        normalize_name(&self.name)
    }

    /// The record's coordinates.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

/// Normalize a station name for transfer matching by removing all whitespace.
///
/// ```
/// use midpoint_server::domain::normalize_name;
///
/// assert_eq!(normalize_name(" 종로 3가 "), "종로3가");
/// assert_eq!(normalize_name("Seoul\tStation"), "SeoulStation");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_id_display_and_debug() {
        let id = StationId::from("sadang_2");
        assert_eq!(format!("{}", id), "sadang_2");
        assert_eq!(format!("{:?}", id), "StationId(sadang_2)");
    }

    #[test]
    fn line_id_display_and_debug() {
        let line = LineId::from("4");
        assert_eq!(format!("{}", line), "4");
        assert_eq!(format!("{:?}", line), "LineId(4)");
    }

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize_name("동대문 역사 문화 공원"), "동대문역사문화공원");
        assert_eq!(normalize_name("  "), "");
        assert_eq!(normalize_name("시청"), "시청");
    }

    #[test]
    fn record_deserializes_camel_case() {
        let json = r#"{"id":"gangnam","name":"강남","lineId":"2","latitude":37.4979,"longitude":127.0276}"#;
        let record: StationRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, StationId::from("gangnam"));
        assert_eq!(record.line_id, LineId::from("2"));
        assert_eq!(record.position(), LatLng::new(37.4979, 127.0276));
    }

    #[test]
    fn record_serializes_ids_transparently() {
        let record = StationRecord::new("cityhall_1", "시청", "1", 37.5657, 126.9769);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], "cityhall_1");
        assert_eq!(value["lineId"], "1");
    }

    #[test]
    fn name_key_ignores_spacing() {
        let a = StationRecord::new("a", "종로3가", "1", 0.0, 0.0);
        let b = StationRecord::new("b", "종로 3가", "3", 0.0, 0.0);
        assert_eq!(a.name_key(), b.name_key());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalized names never contain whitespace
        #[test]
        fn normalized_has_no_whitespace(s in "[ a-z\t가-힣]{0,16}") {
            prop_assert!(!normalize_name(&s).chars().any(char::is_whitespace));
        }

        /// Normalization is idempotent
        #[test]
        fn normalize_idempotent(s in "[ a-z\t가-힣]{0,16}") {
            let once = normalize_name(&s);
            prop_assert_eq!(normalize_name(&once), once.clone());
        }
    }
}
