//! Chart blocks for assistant answers.
//!
//! Pure mapping from the backend's (data, chart_type) pair to one of four
//! rsx blocks. The payload is trusted to match the declared tag; entries
//! missing the declared keys are skipped, and when nothing usable remains
//! the block degrades to the JSON dump.

use dioxus::prelude::*;
use serde_json::Value;

use crate::api::analytics::ChartType;

/// Fixed palette for pie slices, reused in order for bar rows.
pub const CHART_PALETTE: [&str; 7] = [
    "#3498db", "#27ae60", "#f39c12", "#e74c3c", "#9b59b6", "#1abc9c", "#e67e22",
];

/// One labeled value extracted from the payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn extract_points(data: &Value, label_key: &str, value_key: &str) -> Vec<ChartPoint> {
    let Some(entries) = data.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let label = entry.get(label_key)?;
            let label = match label {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let value = value_as_f64(entry.get(value_key)?)?;
            Some(ChartPoint { label, value })
        })
        .collect()
}

/// Categorical points keyed by `name`/`value`, for bar and pie blocks.
pub fn bar_points(data: &Value) -> Vec<ChartPoint> {
    extract_points(data, "name", "value")
}

/// Time-series points keyed by `date`/`count`.
pub fn line_points(data: &Value) -> Vec<ChartPoint> {
    extract_points(data, "date", "count")
}

/// CSS conic-gradient covering the full disc, one stop range per slice.
pub fn pie_gradient(points: &[ChartPoint]) -> String {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return format!("conic-gradient({} 0% 100%)", CHART_PALETTE[0]);
    }

    let mut stops = Vec::with_capacity(points.len());
    let mut cursor = 0.0;
    for (i, point) in points.iter().enumerate() {
        let share = point.value.max(0.0) / total * 100.0;
        let color = CHART_PALETTE[i % CHART_PALETTE.len()];
        // Accumulated rounding can land the last stop short of 100%,
        // leaving a hairline unpainted wedge.
        let end = if i == points.len() - 1 {
            100.0
        } else {
            cursor + share
        };
        stops.push(format!("{} {:.2}% {:.2}%", color, cursor, end));
        cursor += share;
    }
    format!("conic-gradient({})", stops.join(", "))
}

/// Bar row widths as percentages of the largest value. Negative values
/// clamp to zero-width rows, matching the pie's treatment.
pub fn bar_widths(points: &[ChartPoint]) -> Vec<f64> {
    let max = points.iter().map(|p| p.value.max(0.0)).fold(0.0, f64::max);
    points
        .iter()
        .map(|p| {
            if max > 0.0 {
                p.value.max(0.0) / max * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// SVG polyline points for a 100x40 viewport.
pub fn polyline_points(points: &[ChartPoint]) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    let span = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 / (points.len() - 1) as f64 * 100.0;
            let y = 38.0 - (p.value - min) / span * 36.0;
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pretty-printed JSON for the table/dump block.
pub fn pretty_dump(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

/// Dispatches to the block matching the declared chart type.
#[component]
pub fn ChartBlock(data: Value, chart_type: Option<ChartType>) -> Element {
    match chart_type {
        Some(ChartType::Bar) => {
            let points = bar_points(&data);
            if points.is_empty() {
                rsx! { DataTableBlock { data } }
            } else {
                rsx! { BarChartBlock { points } }
            }
        }
        Some(ChartType::Pie) => {
            let points = bar_points(&data);
            if points.is_empty() {
                rsx! { DataTableBlock { data } }
            } else {
                rsx! { PieChartBlock { points } }
            }
        }
        Some(ChartType::Line) => {
            let points = line_points(&data);
            if points.len() < 2 {
                rsx! { DataTableBlock { data } }
            } else {
                rsx! { LineChartBlock { points } }
            }
        }
        Some(ChartType::Table) | None => rsx! { DataTableBlock { data } },
    }
}

/// Horizontal proportional bars, one row per category.
#[component]
pub fn BarChartBlock(points: Vec<ChartPoint>) -> Element {
    let widths = bar_widths(&points);

    rsx! {
        div {
            class: "chart-block chart-bar",

            for (i, point) in points.iter().enumerate() {
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",

                    span {
                        style: "min-width: 110px; font-size: 0.85rem; color: #7f8c8d; font-weight: 500; text-align: right;",
                        "{point.label}"
                    }

                    div {
                        style: "
                            flex: 1;
                            background: #ecf0f1;
                            border-radius: 12px;
                            height: 22px;
                            position: relative;
                            overflow: hidden;
                        ",

                        div {
                            style: format!(
                                "background: {}; height: 100%; border-radius: 12px; width: {:.1}%; transition: width 0.5s ease;",
                                CHART_PALETTE[i % CHART_PALETTE.len()],
                                widths[i]
                            ),
                        }

                        span {
                            style: "
                                position: absolute;
                                right: 8px;
                                top: 50%;
                                transform: translateY(-50%);
                                font-size: 0.8rem;
                                color: #2c3e50;
                                font-weight: 600;
                            ",
                            "{point.value}"
                        }
                    }
                }
            }
        }
    }
}

/// Conic-gradient disc plus a color legend.
#[component]
pub fn PieChartBlock(points: Vec<ChartPoint>) -> Element {
    let gradient = pie_gradient(&points);
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();

    rsx! {
        div {
            class: "chart-block chart-pie",
            style: "display: flex; align-items: center; gap: 20px; flex-wrap: wrap;",

            div {
                style: format!(
                    "width: 140px; height: 140px; border-radius: 50%; background: {}; box-shadow: 0 2px 8px rgba(0,0,0,0.12);",
                    gradient
                ),
            }

            div {
                style: "display: grid; gap: 6px;",

                for (i, point) in points.iter().enumerate() {
                    div {
                        style: "display: flex; align-items: center; gap: 8px; font-size: 0.85rem;",

                        span {
                            style: format!(
                                "width: 12px; height: 12px; border-radius: 3px; background: {};",
                                CHART_PALETTE[i % CHART_PALETTE.len()]
                            ),
                        }
                        span {
                            style: "color: #2c3e50; font-weight: 500;",
                            "{point.label}"
                        }
                        span {
                            style: "color: #7f8c8d;",
                            if total > 0.0 {
                                "{point.value} ({point.value / total * 100.0:.1}%)"
                            } else {
                                "{point.value}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inline SVG polyline over the date/count series.
#[component]
pub fn LineChartBlock(points: Vec<ChartPoint>) -> Element {
    let path = polyline_points(&points);
    let first_label = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = points.last().map(|p| p.label.clone()).unwrap_or_default();

    rsx! {
        div {
            class: "chart-block chart-line",

            svg {
                view_box: "0 0 100 40",
                preserve_aspect_ratio: "none",
                style: "width: 100%; height: 160px; background: #f8f9fa; border-radius: 8px;",

                polyline {
                    points: "{path}",
                    fill: "none",
                    stroke: CHART_PALETTE[0],
                    stroke_width: "1.5",
                    stroke_linejoin: "round",
                    stroke_linecap: "round",
                }
            }

            div {
                style: "display: flex; justify-content: space-between; font-size: 0.75rem; color: #7f8c8d; margin-top: 4px;",
                span { "{first_label}" }
                span { "{last_label}" }
            }
        }
    }
}

/// Raw payload dump, the default for absent or unrecognized tags.
#[component]
pub fn DataTableBlock(data: Value) -> Element {
    let dump = pretty_dump(&data);

    rsx! {
        div {
            class: "chart-block chart-table",

            pre {
                style: "
                    background: #2c3e50;
                    color: #ecf0f1;
                    padding: 12px;
                    border-radius: 8px;
                    font-size: 0.8rem;
                    overflow-x: auto;
                    max-height: 260px;
                    margin: 0;
                ",
                "{dump}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bar_points_name_value() {
        let data = json!([
            {"name": "A", "value": 3},
            {"name": "B", "value": 7.5},
            {"name": "C", "value": "12"}
        ]);

        let points = bar_points(&data);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "A");
        assert_eq!(points[0].value, 3.0);
        assert_eq!(points[2].value, 12.0);
    }

    #[test]
    fn test_bar_points_skips_malformed_entries() {
        let data = json!([
            {"name": "A", "value": 3},
            {"name": "missing value"},
            {"value": 9},
            {"name": "B", "value": null}
        ]);

        let points = bar_points(&data);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].label, "A");
    }

    #[test]
    fn test_bar_points_non_array_is_empty() {
        assert!(bar_points(&json!({"rows": []})).is_empty());
        assert!(bar_points(&json!("text")).is_empty());
    }

    #[test]
    fn test_line_points_date_count() {
        let data = json!([
            {"date": "2026-08-01", "count": 4},
            {"date": "2026-08-02", "count": 9}
        ]);

        let points = line_points(&data);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].label, "2026-08-01");
        assert_eq!(points[1].value, 9.0);
    }

    #[test]
    fn test_bar_widths_clamp_negative_and_scale_fractional() {
        let points = vec![
            ChartPoint { label: "down".to_string(), value: -4.0 },
            ChartPoint { label: "half".to_string(), value: 0.25 },
            ChartPoint { label: "top".to_string(), value: 0.5 },
        ];

        let widths = bar_widths(&points);
        // Negative values render as empty rows, never negative widths.
        assert_eq!(widths[0], 0.0);
        // Fractional values still scale off the true maximum.
        assert_eq!(widths[1], 50.0);
        assert_eq!(widths[2], 100.0);
    }

    #[test]
    fn test_bar_widths_all_non_positive() {
        let points = vec![
            ChartPoint { label: "a".to_string(), value: 0.0 },
            ChartPoint { label: "b".to_string(), value: -1.0 },
        ];
        assert!(bar_widths(&points).iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_pie_gradient_covers_full_circle() {
        let points = vec![
            ChartPoint { label: "A".to_string(), value: 1.0 },
            ChartPoint { label: "B".to_string(), value: 3.0 },
        ];

        let gradient = pie_gradient(&points);
        assert!(gradient.starts_with("conic-gradient("));
        assert!(gradient.contains("0.00% 25.00%"));
        assert!(gradient.contains("25.00% 100.00%"));
    }

    #[test]
    fn test_pie_gradient_last_stop_reaches_full_circle() {
        // Thirds round to 33.33% each; the last stop must still close
        // the disc at 100% instead of 99.99%.
        let points = vec![
            ChartPoint { label: "A".to_string(), value: 1.0 },
            ChartPoint { label: "B".to_string(), value: 1.0 },
            ChartPoint { label: "C".to_string(), value: 1.0 },
        ];

        let gradient = pie_gradient(&points);
        assert!(gradient.ends_with("100.00%)"));
        assert!(!gradient.contains("99.99%"));
    }

    #[test]
    fn test_pie_gradient_zero_total() {
        let points = vec![ChartPoint { label: "A".to_string(), value: 0.0 }];
        let gradient = pie_gradient(&points);
        assert!(gradient.contains("0% 100%"));
    }

    #[test]
    fn test_polyline_spans_viewport() {
        let points = vec![
            ChartPoint { label: "d1".to_string(), value: 0.0 },
            ChartPoint { label: "d2".to_string(), value: 5.0 },
            ChartPoint { label: "d3".to_string(), value: 10.0 },
        ];

        let path = polyline_points(&points);
        let coords: Vec<&str> = path.split(' ').collect();
        assert_eq!(coords.len(), 3);
        assert!(coords[0].starts_with("0.00,"));
        assert!(coords[2].starts_with("100.00,"));
        // Highest value maps to the top of the viewport.
        assert!(coords[2].ends_with(",2.00"));
    }

    #[test]
    fn test_polyline_needs_two_points() {
        let points = vec![ChartPoint { label: "d1".to_string(), value: 1.0 }];
        assert!(polyline_points(&points).is_empty());
    }

    #[test]
    fn test_pretty_dump_contains_payload() {
        let data = json!([{"name": "A", "value": 3}]);
        let dump = pretty_dump(&data);
        assert!(dump.contains("\"name\": \"A\""));
        assert!(dump.contains("\"value\": 3"));
    }
}
