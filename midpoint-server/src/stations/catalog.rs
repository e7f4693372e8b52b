//! Station lookup and keyword search.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{LineId, StationId, StationRecord, normalize_name};

use super::lines::SubwayLine;

/// Suffix riders often type after a station name ("강남역").
const STATION_SUFFIX: char = '역';

/// A search hit: the station record plus display data for its line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMatch {
    #[serde(flatten)]
    pub station: StationRecord,
    /// Line name, empty when the line is not in the catalog.
    pub line_name: String,
    pub line_color: Option<String>,
}

/// Read-only station catalog backing station search.
///
/// Ids returned here are the same ids the transit graph is keyed by.
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    records: Vec<StationRecord>,
    by_id: HashMap<StationId, usize>,
    lines: IndexMap<LineId, SubwayLine>,
}

impl StationCatalog {
    /// Create a catalog from station records and line metadata.
    pub fn new(records: Vec<StationRecord>, lines: Vec<SubwayLine>) -> Self {
        let by_id = records
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.id.clone(), idx))
            .collect();
        let lines = lines.into_iter().map(|l| (l.id.clone(), l)).collect();

        Self {
            records,
            by_id,
            lines,
        }
    }

    /// Look up a station by id.
    pub fn get(&self, id: &StationId) -> Option<&StationRecord> {
        self.by_id.get(id).map(|&idx| &self.records[idx])
    }

    /// Look up a line by id.
    pub fn line(&self, id: &LineId) -> Option<&SubwayLine> {
        self.lines.get(id)
    }

    /// All lines in catalog order.
    pub fn lines(&self) -> impl Iterator<Item = &SubwayLine> {
        self.lines.values()
    }

    /// All station records in dataset order.
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Get the number of station records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Search stations whose name contains `keyword`.
    ///
    /// Whitespace is ignored on both sides and a trailing "역" is dropped from
    /// the keyword. A blank keyword matches nothing. Results keep dataset
    /// order, one per (station, line) record.
    pub fn search(&self, keyword: &str, limit: usize) -> Vec<StationMatch> {
        let Some(needle) = search_key(keyword) else {
            return Vec::new();
        };

        self.records
            .iter()
            .filter(|r| r.name_key().contains(&needle))
            .take(limit)
            .map(|r| self.to_match(r))
            .collect()
    }

    fn to_match(&self, record: &StationRecord) -> StationMatch {
        let line = self.line(&record.line_id);
        StationMatch {
            station: record.clone(),
            line_name: line.map(|l| l.name.clone()).unwrap_or_default(),
            line_color: line.map(|l| l.color.clone()),
        }
    }
}

/// Normalize a search keyword. Returns `None` for a blank keyword.
fn search_key(keyword: &str) -> Option<String> {
    let key = normalize_name(keyword);
    if key.is_empty() {
        return None;
    }
    match key.strip_suffix(STATION_SUFFIX) {
        Some(stripped) if !stripped.is_empty() => Some(stripped.to_string()),
        _ => Some(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::lines::seoul_lines;

    fn catalog() -> StationCatalog {
        StationCatalog::new(
            vec![
                StationRecord::new("seoul_1", "서울역", "1", 37.5563, 126.9723),
                StationRecord::new("gangnam", "강남", "2", 37.4979, 127.0276),
                StationRecord::new("jongno3_1", "종로3가", "1", 37.5716, 126.9918),
                StationRecord::new("jongno3_3", "종로3가", "3", 37.5716, 126.9918),
                StationRecord::new("mystery", "미지", "99", 0.0, 0.0),
            ],
            seoul_lines(),
        )
    }

    #[test]
    fn search_key_normalization() {
        assert_eq!(search_key("  강남역 "), Some("강남".to_string()));
        assert_eq!(search_key("종로 3가"), Some("종로3가".to_string()));
        assert_eq!(search_key("역"), Some("역".to_string()));
        assert_eq!(search_key("   "), None);
        assert_eq!(search_key(""), None);
    }

    #[test]
    fn blank_keyword_matches_nothing() {
        assert!(catalog().search("  ", 10).is_empty());
    }

    #[test]
    fn suffix_is_stripped() {
        let hits = catalog().search("강남역", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].station.id, StationId::from("gangnam"));
        assert_eq!(hits[0].line_name, "2호선");
        assert_eq!(hits[0].line_color.as_deref(), Some("#00A84D"));
    }

    #[test]
    fn station_named_with_suffix_still_matches() {
        let hits = catalog().search("서울역", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].station.id, StationId::from("seoul_1"));
    }

    #[test]
    fn transfer_station_returns_one_hit_per_line() {
        let hits = catalog().search("종로", 10);
        let ids: Vec<_> = hits.iter().map(|h| h.station.id.as_str()).collect();
        assert_eq!(ids, vec!["jongno3_1", "jongno3_3"]);
    }

    #[test]
    fn limit_caps_results() {
        assert_eq!(catalog().search("종로", 1).len(), 1);
    }

    #[test]
    fn unknown_line_has_empty_name() {
        let hits = catalog().search("미지", 10);
        assert_eq!(hits[0].line_name, "");
        assert!(hits[0].line_color.is_none());
    }

    #[test]
    fn get_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(&StationId::from("gangnam")).unwrap().name, "강남");
        assert!(catalog.get(&StationId::from("nowhere")).is_none());
    }

    #[test]
    fn records_keep_dataset_order() {
        let binding = catalog();
        let ids: Vec<_> = binding.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["seoul_1", "gangnam", "jongno3_1", "jongno3_3", "mystery"]);
    }

    #[test]
    fn whitespace_in_keyword_is_ignored() {
        let catalog = StationCatalog::new(
            vec![StationRecord::new("ddp_2", "동대문역사문화공원", "2", 37.5651, 127.0079)],
            seoul_lines(),
        );

        for keyword in ["역사 문화", " 동대문 역사", "문화공원역"] {
            let hits = catalog.search(keyword, 10);
            assert_eq!(hits.len(), 1, "{keyword}");
            assert_eq!(hits[0].station.id.as_str(), "ddp_2");
        }
    }

    #[test]
    fn match_serializes_flat() {
        let hits = catalog().search("강남", 10);
        let value = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(value["id"], "gangnam");
        assert_eq!(value["lineId"], "2");
        assert_eq!(value["lineName"], "2호선");
    }
}
