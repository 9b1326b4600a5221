// src/model/mod.rs
use std::fmt;

use chrono::{DateTime, Local};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Aggregate statistics computed by the backend for one uploaded dataset.
///
/// Missing numeric fields fall back to their defaults instead of failing the
/// decode, so a partially-shaped response still renders.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub total_equipment_count: u64,
    #[serde(default)]
    pub average_flowrate: f64,
    #[serde(default)]
    pub average_pressure: f64,
    #[serde(default)]
    pub average_temperature: f64,
    // Kept as a vector of pairs: the JSON object's order is the display order
    // for both the breakdown table and the pie chart.
    #[serde(default, deserialize_with = "ordered_counts")]
    pub equipment_type_distribution: Vec<(String, u64)>,
}

/// One row of the server-side upload log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub dataset_name: String,
    pub uploaded_at: String,
}

impl HistoryRecord {
    /// `uploaded_at` rendered as a local date-time, or the raw string if it
    /// is not valid ISO-8601.
    pub fn uploaded_at_local(&self) -> String {
        match DateTime::parse_from_rfc3339(&self.uploaded_at) {
            Ok(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
            Err(_) => self.uploaded_at.clone(),
        }
    }
}

fn ordered_counts<'de, D>(deserializer: D) -> Result<Vec<(String, u64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountsVisitor;

    impl<'de> Visitor<'de> for CountsVisitor {
        type Value = Vec<(String, u64)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of equipment type names to counts")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, count)) = map.next_entry::<String, u64>()? {
                entries.push((name, count));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(CountsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_preserves_document_order() {
        let json = r#"{
            "total_equipment_count": 10,
            "average_flowrate": 120.5,
            "average_pressure": 3.2,
            "average_temperature": 75.0,
            "equipment_type_distribution": {"Pump": 6, "Tank": 4, "Exchanger": 0}
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total_equipment_count, 10);
        assert_eq!(
            result.equipment_type_distribution,
            vec![
                ("Pump".to_string(), 6),
                ("Tank".to_string(), 4),
                ("Exchanger".to_string(), 0),
            ]
        );
    }

    #[test]
    fn missing_fields_decode_to_defaults() {
        let result: AnalysisResult = serde_json::from_str(r#"{"average_pressure": 3.2}"#).unwrap();
        assert_eq!(result.total_equipment_count, 0);
        assert_eq!(result.average_flowrate, 0.0);
        assert_eq!(result.average_pressure, 3.2);
        assert!(result.equipment_type_distribution.is_empty());
    }

    #[test]
    fn history_records_decode_in_server_order() {
        let json = r#"[
            {"id": 7, "dataset_name": "plant_b.csv", "uploaded_at": "2024-05-02T09:00:00Z"},
            {"id": 3, "dataset_name": "plant_a.csv", "uploaded_at": "2024-05-01T09:00:00Z"}
        ]"#;
        let records: Vec<HistoryRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 7);
        assert_eq!(records[1].dataset_name, "plant_a.csv");
    }

    #[test]
    fn uploaded_at_formats_as_local_datetime() {
        let record = HistoryRecord {
            id: 1,
            dataset_name: "data.csv".to_string(),
            uploaded_at: "2024-05-02T09:30:15.123456Z".to_string(),
        };
        let formatted = record.uploaded_at_local();
        assert_eq!(formatted.len(), 19);
        assert!(!formatted.contains('T'));
    }

    #[test]
    fn uploaded_at_falls_back_to_raw_string() {
        let record = HistoryRecord {
            id: 1,
            dataset_name: "data.csv".to_string(),
            uploaded_at: "not a timestamp".to_string(),
        };
        assert_eq!(record.uploaded_at_local(), "not a timestamp");
    }
}
