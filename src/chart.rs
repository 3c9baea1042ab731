/// Tipboard Chart Specifications
///
/// Plain serializable descriptions of the two charts, handed to an external
/// renderer. Building a spec is a pass-through over the filtered view: the
/// scatter maps rows to (total_bill, tip) points, the violin derives a
/// per-row tip-percentage column and tags each row with its split-category
/// label. No layout or drawing happens here.

use crate::dataset::CategoryColumn;
use crate::filter::FilteredView;
use serde::Serialize;

/// One scatter point; `label` carries the color-category value when a color
/// variable is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub total_bill: f64,
    pub tip: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
}

/// Scatter of total_bill vs tip over the filtered rows, optionally colored
/// by one of the categorical columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub points: Vec<ScatterPoint>,
    pub color: Option<CategoryColumn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<&'static str>,
}

impl ScatterChart {
    pub fn build(view: &FilteredView, color: Option<CategoryColumn>) -> Self {
        let points = view
            .records()
            .map(|record| ScatterPoint {
                total_bill: record.total_bill,
                tip: record.tip,
                label: color.map(|c| c.label(record)),
            })
            .collect();

        ScatterChart {
            points,
            color,
            legend_title: color.map(|c| c.display_name()),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }
}

/// One violin sample: the row's tip percentage and its split-category label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolinPoint {
    pub percent: f64,
    pub group: &'static str,
}

/// Violin/box chart of the tip-percentage distribution, split by a chosen
/// categorical column. The title and legend carry the column's capitalized
/// display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolinChart {
    pub title: String,
    pub y_axis_title: &'static str,
    pub legend_title: &'static str,
    pub split: CategoryColumn,
    pub points: Vec<ViolinPoint>,
}

impl ViolinChart {
    pub fn build(view: &FilteredView, split: CategoryColumn) -> Self {
        let points = view
            .records()
            .map(|record| ViolinPoint {
                percent: record.tip_fraction(),
                group: split.label(record),
            })
            .collect();

        ViolinChart {
            title: format!("Distribution of Tip Percentages by {}", split.display_name()),
            y_axis_title: "Tip Percentage",
            legend_title: split.display_name(),
            split,
            points,
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("JSON serialization error: {}", e))
    }
}
