/// Tipboard Filtered View
///
/// The filter pipeline's core: a pure function from the current filter state
/// (bill interval + meal selection) to an ordered subset of the dataset.
/// A `FilteredView` keeps a row-index mapping into the shared dataset rather
/// than copying records, and every downstream consumer (value boxes, table
/// grid, charts) reads through it.

use crate::dataset::{MealTime, TipRecord, TipsDataset};
use std::rc::Rc;

/// Which meal services are selected. Both are selected by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MealSelection {
    pub lunch: bool,
    pub dinner: bool,
}

impl MealSelection {
    pub fn all() -> Self {
        MealSelection {
            lunch: true,
            dinner: true,
        }
    }

    pub fn none() -> Self {
        MealSelection {
            lunch: false,
            dinner: false,
        }
    }

    pub fn only(meal: MealTime) -> Self {
        match meal {
            MealTime::Lunch => MealSelection {
                lunch: true,
                dinner: false,
            },
            MealTime::Dinner => MealSelection {
                lunch: false,
                dinner: true,
            },
        }
    }

    pub fn contains(&self, meal: MealTime) -> bool {
        match meal {
            MealTime::Lunch => self.lunch,
            MealTime::Dinner => self.dinner,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.lunch && !self.dinner
    }
}

impl Default for MealSelection {
    fn default() -> Self {
        MealSelection::all()
    }
}

/// The two filter inputs as one value: a closed bill interval and a meal
/// selection. The interval is produced by a widget bounded to the dataset's
/// observed range, so `lo <= hi` is not re-validated here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub bill_range: (f64, f64),
    pub meals: MealSelection,
}

impl FilterState {
    /// True when the record passes both predicates. The interval is
    /// inclusive of both bounds.
    pub fn matches(&self, record: &TipRecord) -> bool {
        let (lo, hi) = self.bill_range;
        record.total_bill >= lo && record.total_bill <= hi && self.meals.contains(record.time)
    }
}

/// Ordered subset of the dataset matching a [`FilterState`].
///
/// Built by a single scan over the dataset, so view order always matches
/// dataset order; filtering only removes rows, never reorders. An empty view
/// is valid and all aggregates handle it.
#[derive(Clone)]
pub struct FilteredView {
    dataset: Rc<TipsDataset>,
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn build(dataset: Rc<TipsDataset>, state: &FilterState) -> Self {
        let indices = dataset
            .iter()
            .enumerate()
            .filter(|(_, record)| state.matches(record))
            .map(|(i, _)| i)
            .collect();

        FilteredView { dataset, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dataset row indices of the visible rows, in dataset order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn get(&self, row: usize) -> Option<&TipRecord> {
        self.indices.get(row).and_then(|&i| self.dataset.get(i))
    }

    /// Visible records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &TipRecord> {
        self.indices.iter().filter_map(|&i| self.dataset.get(i))
    }

    pub fn dataset(&self) -> &Rc<TipsDataset> {
        &self.dataset
    }

    /// Mean of `total_bill` across visible rows. `None` when the view is
    /// empty, never NaN.
    pub fn avg_bill(&self) -> Option<f64> {
        if self.indices.is_empty() {
            return None;
        }
        let sum: f64 = self.records().map(|r| r.total_bill).sum();
        Some(sum / self.indices.len() as f64)
    }

    /// Mean of `tip / total_bill` across visible rows. Same empty guard as
    /// [`avg_bill`](Self::avg_bill).
    pub fn avg_tip_fraction(&self) -> Option<f64> {
        if self.indices.is_empty() {
            return None;
        }
        let sum: f64 = self.records().map(|r| r.tip_fraction()).sum();
        Some(sum / self.indices.len() as f64)
    }

    /// Export the visible rows as CSV with a header row, for the external
    /// table grid.
    pub fn to_csv(&self) -> String {
        let mut result = String::from("total_bill,tip,sex,smoker,day,time,size\n");
        for record in self.records() {
            result.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                record.total_bill,
                record.tip,
                record.sex.as_str(),
                record.smoker.as_str(),
                record.day.as_str(),
                record.time.as_str(),
                record.size
            ));
        }
        result
    }

    /// Export the visible rows as a JSON array of row objects.
    pub fn to_json(&self) -> Result<String, String> {
        let rows: Vec<&TipRecord> = self.records().collect();
        serde_json::to_string_pretty(&rows).map_err(|e| format!("JSON serialization error: {}", e))
    }
}

impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.dataset, &other.dataset) && self.indices == other.indices
    }
}

impl std::fmt::Debug for FilteredView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FilteredView {{ rows: {} of {} }}",
            self.indices.len(),
            self.dataset.len()
        )
    }
}
