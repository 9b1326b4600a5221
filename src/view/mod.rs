// src/view/mod.rs
//
// Pure projections from an AnalysisResult to the shapes each widget renders.
// Nothing here touches the network or mutable state; theming is applied at
// draw time via the token table in `theme`.

pub mod theme;

use eframe::egui::Color32;

use crate::model::AnalysisResult;

pub const SUMMARY_TITLE: &str = "DATA INTELLIGENCE";
pub const BREAKDOWN_TITLE: &str = "ASSET BREAKDOWN";
pub const BAR_CHART_TITLE: &str = "PARAMETER AVERAGES";
pub const PIE_CHART_TITLE: &str = "DISTRIBUTION";

/// Every breakdown row carries this placeholder badge; status is not part of
/// the analysis payload.
pub const STATUS_ACTIVE: &str = "ACTIVE";

// Bar colors for Flowrate / Pressure / Temperature, theme-independent.
const BAR_PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x36, 0xa2, 0xeb),
    Color32::from_rgb(0xff, 0x63, 0x84),
    Color32::from_rgb(0x4b, 0xc0, 0xc0),
];

// Pie slice colors, cycled when the distribution has more categories.
const PIE_PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x00, 0xf3, 0xff),
    Color32::from_rgb(0xbc, 0x13, 0xfe),
    Color32::from_rgb(0xff, 0x00, 0x64),
    Color32::from_rgb(0xff, 0xff, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x9d),
    Color32::from_rgb(0xc8, 0xc8, 0xc8),
];

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub equipment_type: String,
    pub count: u64,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarCategory {
    pub label: &'static str,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub categories: [BarCategory; 3],
    /// Per-bar value overlays are suppressed for this chart.
    pub show_value_labels: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total in [0, 1]; 0 when the total is 0.
    pub fraction: f64,
    pub percent_label: String,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

/// The four summary cards: count plus the three averages with their static
/// unit labels. Values are shown as received, without rounding.
pub fn summary_cards(result: &AnalysisResult) -> [MetricCard; 4] {
    [
        MetricCard {
            label: "Total Equipment",
            value: result.total_equipment_count.to_string(),
            unit: None,
        },
        MetricCard {
            label: "Avg Flowrate",
            value: format_metric(result.average_flowrate),
            unit: Some("L/hr"),
        },
        MetricCard {
            label: "Avg Pressure",
            value: format_metric(result.average_pressure),
            unit: Some("Bar"),
        },
        MetricCard {
            label: "Avg Temperature",
            value: format_metric(result.average_temperature),
            unit: Some("°C"),
        },
    ]
}

/// One row per distribution entry, in the payload's order.
pub fn breakdown_rows(result: &AnalysisResult) -> Vec<BreakdownRow> {
    result
        .equipment_type_distribution
        .iter()
        .map(|(name, count)| BreakdownRow {
            equipment_type: name.clone(),
            count: *count,
            status: STATUS_ACTIVE,
        })
        .collect()
}

/// Fixed category order regardless of field order in the payload.
pub fn bar_chart(result: &AnalysisResult) -> BarChartData {
    let categories = [
        BarCategory {
            label: "Flowrate",
            value: result.average_flowrate,
            color: BAR_PALETTE[0],
        },
        BarCategory {
            label: "Pressure",
            value: result.average_pressure,
            color: BAR_PALETTE[1],
        },
        BarCategory {
            label: "Temperature",
            value: result.average_temperature,
            color: BAR_PALETTE[2],
        },
    ];
    BarChartData {
        categories,
        show_value_labels: false,
    }
}

/// One slice per distribution entry, in the payload's order. Colors cycle
/// through the palette modulo its length; percentages are one decimal place
/// of `value / sum * 100`, with a zero sum yielding "0.0%" per slice.
pub fn pie_chart(result: &AnalysisResult) -> PieChartData {
    let sum: f64 = result
        .equipment_type_distribution
        .iter()
        .map(|(_, count)| *count as f64)
        .sum();

    let slices = result
        .equipment_type_distribution
        .iter()
        .enumerate()
        .map(|(i, (name, count))| {
            let value = *count as f64;
            let fraction = if sum > 0.0 { value / sum } else { 0.0 };
            PieSlice {
                label: name.clone(),
                value,
                fraction,
                percent_label: format!("{:.1}%", fraction * 100.0),
                color: PIE_PALETTE[i % PIE_PALETTE.len()],
            }
        })
        .collect();

    PieChartData { slices }
}

// Keeps one decimal for whole numbers ("75.0") while leaving fractional
// values as-is ("120.5").
fn format_metric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            total_equipment_count: 10,
            average_flowrate: 120.5,
            average_pressure: 3.2,
            average_temperature: 75.0,
            equipment_type_distribution: vec![
                ("Pump".to_string(), 6),
                ("Tank".to_string(), 4),
            ],
        }
    }

    #[test]
    fn summary_cards_show_values_with_units() {
        let cards = summary_cards(&sample());
        assert_eq!(cards[0].value, "10");
        assert_eq!(cards[0].unit, None);
        assert_eq!((cards[1].value.as_str(), cards[1].unit), ("120.5", Some("L/hr")));
        assert_eq!((cards[2].value.as_str(), cards[2].unit), ("3.2", Some("Bar")));
        assert_eq!((cards[3].value.as_str(), cards[3].unit), ("75.0", Some("°C")));
    }

    #[test]
    fn breakdown_has_one_active_row_per_entry() {
        let rows = breakdown_rows(&sample());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].equipment_type, "Pump");
        assert_eq!(rows[0].count, 6);
        assert_eq!(rows[0].status, "ACTIVE");
        assert_eq!(rows[1].equipment_type, "Tank");
        assert_eq!(rows[1].count, 4);
        assert_eq!(rows[1].status, "ACTIVE");
    }

    #[test]
    fn bar_categories_keep_fixed_order() {
        // Field order in the JSON document must not matter.
        let shuffled: AnalysisResult = serde_json::from_str(
            r#"{
                "average_temperature": 75.0,
                "equipment_type_distribution": {"Pump": 6},
                "average_flowrate": 120.5,
                "total_equipment_count": 10,
                "average_pressure": 3.2
            }"#,
        )
        .unwrap();
        let chart = bar_chart(&shuffled);
        let labels: Vec<_> = chart.categories.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Flowrate", "Pressure", "Temperature"]);
        assert_eq!(chart.categories[0].value, 120.5);
        assert_eq!(chart.categories[1].value, 3.2);
        assert_eq!(chart.categories[2].value, 75.0);
        assert!(!chart.show_value_labels);
    }

    #[test]
    fn pie_percentages_match_scenario() {
        let chart = pie_chart(&sample());
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.slices[0].percent_label, "60.0%");
        assert_eq!(chart.slices[1].percent_label, "40.0%");
    }

    #[test]
    fn pie_fractions_sum_to_one() {
        let result = AnalysisResult {
            equipment_type_distribution: vec![
                ("Pump".to_string(), 3),
                ("Tank".to_string(), 1),
                ("Exchanger".to_string(), 7),
                ("Valve".to_string(), 2),
            ],
            ..Default::default()
        };
        let total: f64 = pie_chart(&result).slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_yields_zero_percent_labels() {
        let result = AnalysisResult {
            equipment_type_distribution: vec![
                ("Pump".to_string(), 0),
                ("Tank".to_string(), 0),
            ],
            ..Default::default()
        };
        for slice in pie_chart(&result).slices {
            assert_eq!(slice.percent_label, "0.0%");
            assert_eq!(slice.fraction, 0.0);
        }
    }

    #[test]
    fn table_and_pie_iterate_in_the_same_order() {
        let result = AnalysisResult {
            equipment_type_distribution: vec![
                ("Tank".to_string(), 4),
                ("Pump".to_string(), 6),
                ("Exchanger".to_string(), 1),
            ],
            ..Default::default()
        };
        let table_order: Vec<_> = breakdown_rows(&result)
            .into_iter()
            .map(|r| r.equipment_type)
            .collect();
        let pie_order: Vec<_> = pie_chart(&result).slices.into_iter().map(|s| s.label).collect();
        assert_eq!(table_order, pie_order);
    }

    #[test]
    fn pie_palette_wraps_around() {
        let result = AnalysisResult {
            equipment_type_distribution: (0..8)
                .map(|i| (format!("Type{i}"), 1))
                .collect(),
            ..Default::default()
        };
        let slices = pie_chart(&result).slices;
        assert_eq!(slices[6].color, slices[0].color);
        assert_eq!(slices[7].color, slices[1].color);
    }

    #[test]
    fn metric_formatting_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_metric(75.0), "75.0");
        assert_eq!(format_metric(120.5), "120.5");
        assert_eq!(format_metric(0.0), "0.0");
        assert_eq!(format_metric(f64::NAN), "NaN");
    }
}
