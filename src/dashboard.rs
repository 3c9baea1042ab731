/// Tipboard Dashboard
///
/// Wires the whole pipeline: four inputs (bill interval, meal selection,
/// scatter color, violin split) feed a memoized filtered view, which feeds
/// the three value boxes, the table grid, and the two chart specs. A reset
/// event writes the interval and selection back to their defaults.
///
/// Setters only invalidate; accessors pull. Every consumer reading a derived
/// value between two input changes sees the same `Rc` snapshot.

use crate::chart::{ScatterChart, ViolinChart};
use crate::dataset::{CategoryColumn, TipsDataset};
use crate::filter::{FilterState, FilteredView, MealSelection};
use crate::reactive::{Derived, EventSource, Graph, Input};
use crate::summary;
use std::rc::Rc;

pub struct Dashboard {
    dataset: Rc<TipsDataset>,
    graph: Graph,
    bill_range: Input<(f64, f64)>,
    meals: Input<MealSelection>,
    scatter_color: Input<Option<CategoryColumn>>,
    violin_split: Input<CategoryColumn>,
    reset: EventSource,
    filtered: Derived<Rc<FilteredView>>,
    tippers: Derived<usize>,
    avg_tip_percent: Derived<Option<String>>,
    avg_bill: Derived<Option<String>>,
    scatter: Derived<Rc<ScatterChart>>,
    violin: Derived<Rc<ViolinChart>>,
}

impl Dashboard {
    /// Dashboard over the bundled 244-row tips dataset.
    pub fn new() -> Result<Dashboard, String> {
        Ok(Self::with_dataset(TipsDataset::bundled()?))
    }

    pub fn with_dataset(dataset: TipsDataset) -> Dashboard {
        let dataset = Rc::new(dataset);
        // Computed once; bounds the interval input and seeds reset defaults.
        let bounds = dataset.bill_range();

        let graph = Graph::new();
        let bill_range = Input::new(&graph, bounds);
        let meals = Input::new(&graph, MealSelection::all());
        let scatter_color: Input<Option<CategoryColumn>> = Input::new(&graph, None);
        let violin_split = Input::new(&graph, CategoryColumn::Day);

        let filtered = {
            let data = dataset.clone();
            let range = bill_range.clone();
            let selection = meals.clone();
            Derived::new(&graph, &[bill_range.id(), meals.id()], move || {
                let state = FilterState {
                    bill_range: range.get(),
                    meals: selection.get(),
                };
                Rc::new(FilteredView::build(data.clone(), &state))
            })
        };

        let tippers = {
            let view = filtered.clone();
            Derived::new(&graph, &[filtered.id()], move || {
                summary::tipper_count(&view.get())
            })
        };

        let avg_tip_percent = {
            let view = filtered.clone();
            Derived::new(&graph, &[filtered.id()], move || {
                summary::average_tip_percent(&view.get())
            })
        };

        let avg_bill = {
            let view = filtered.clone();
            Derived::new(&graph, &[filtered.id()], move || {
                summary::average_bill(&view.get())
            })
        };

        let scatter = {
            let view = filtered.clone();
            let color = scatter_color.clone();
            Derived::new(&graph, &[filtered.id(), scatter_color.id()], move || {
                Rc::new(ScatterChart::build(&view.get(), color.get()))
            })
        };

        let violin = {
            let view = filtered.clone();
            let split = violin_split.clone();
            Derived::new(&graph, &[filtered.id(), violin_split.id()], move || {
                Rc::new(ViolinChart::build(&view.get(), split.get()))
            })
        };

        let reset = EventSource::new();
        {
            let range = bill_range.clone();
            let selection = meals.clone();
            reset.subscribe(move || {
                // Both writes land before any dependent can recompute:
                // reads are lazy, so no intermediate state is observable.
                range.set(bounds);
                selection.set(MealSelection::all());
            });
        }

        Dashboard {
            dataset,
            graph,
            bill_range,
            meals,
            scatter_color,
            violin_split,
            reset,
            filtered,
            tippers,
            avg_tip_percent,
            avg_bill,
            scatter,
            violin,
        }
    }

    pub fn dataset(&self) -> &Rc<TipsDataset> {
        &self.dataset
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The interval input's fixed bounds: the dataset's observed
    /// (min, max) of total_bill.
    pub fn bill_bounds(&self) -> (f64, f64) {
        self.dataset.bill_range()
    }

    // === Inputs ===

    pub fn bill_range(&self) -> (f64, f64) {
        self.bill_range.get()
    }

    pub fn set_bill_range(&self, lo: f64, hi: f64) {
        self.bill_range.set((lo, hi));
    }

    pub fn meal_selection(&self) -> MealSelection {
        self.meals.get()
    }

    pub fn set_meal_selection(&self, selection: MealSelection) {
        self.meals.set(selection);
    }

    pub fn scatter_color(&self) -> Option<CategoryColumn> {
        self.scatter_color.get()
    }

    pub fn set_scatter_color(&self, color: Option<CategoryColumn>) {
        self.scatter_color.set(color);
    }

    pub fn violin_split(&self) -> CategoryColumn {
        self.violin_split.get()
    }

    pub fn set_violin_split(&self, split: CategoryColumn) {
        self.violin_split.set(split);
    }

    /// Fire the reset event: restores the interval to the dataset bounds and
    /// the meal selection to both. Edge-triggered; repeated activation
    /// re-fires even if nothing changed in between.
    pub fn reset(&self) {
        self.reset.emit();
    }

    // === Derived outputs ===

    /// The current filtered view. Memoized: repeated calls between input
    /// changes return the same snapshot.
    pub fn filtered_view(&self) -> Rc<FilteredView> {
        self.filtered.get()
    }

    pub fn tipper_count(&self) -> usize {
        self.tippers.get()
    }

    /// Blank (None) when no rows match.
    pub fn average_tip_percent(&self) -> Option<String> {
        self.avg_tip_percent.get()
    }

    /// Blank (None) when no rows match.
    pub fn average_bill(&self) -> Option<String> {
        self.avg_bill.get()
    }

    pub fn scatter_chart(&self) -> Rc<ScatterChart> {
        self.scatter.get()
    }

    pub fn violin_chart(&self) -> Rc<ViolinChart> {
        self.violin.get()
    }

    /// Visible rows as CSV, for the table grid.
    pub fn table_csv(&self) -> String {
        self.filtered.get().to_csv()
    }

    /// Visible rows as JSON, for the table grid.
    pub fn table_json(&self) -> Result<String, String> {
        self.filtered.get().to_json()
    }

    /// How many times the filtered view has been rebuilt.
    pub fn filter_recompute_count(&self) -> u64 {
        self.filtered.recompute_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MealTime;

    fn dashboard() -> Dashboard {
        Dashboard::new().unwrap()
    }

    #[test]
    fn test_defaults_show_full_dataset() {
        let dash = dashboard();
        assert_eq!(dash.bill_range(), dash.bill_bounds());
        assert_eq!(dash.meal_selection(), MealSelection::all());
        assert_eq!(dash.scatter_color(), None);
        assert_eq!(dash.violin_split(), CategoryColumn::Day);

        assert_eq!(dash.tipper_count(), 244);
        assert_eq!(dash.filtered_view().len(), dash.dataset().len());
        assert!(dash.average_bill().is_some());
        assert!(dash.average_tip_percent().is_some());
    }

    #[test]
    fn test_consumers_share_one_snapshot_per_cycle() {
        let dash = dashboard();
        let first = dash.filtered_view();
        let second = dash.filtered_view();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(dash.filter_recompute_count(), 1);

        dash.set_bill_range(10.0, 20.0);
        let third = dash.filtered_view();
        assert!(!Rc::ptr_eq(&first, &third));
        assert_eq!(dash.filter_recompute_count(), 2);
    }

    #[test]
    fn test_narrowing_with_lunch_only() {
        let dash = dashboard();
        dash.set_meal_selection(MealSelection::only(MealTime::Lunch));
        dash.set_bill_range(10.0, 20.0);

        let view = dash.filtered_view();
        assert!(!view.is_empty());
        for record in view.records() {
            // Dinner rows are gone regardless of bill amount, and every
            // remaining lunch row is inside the interval.
            assert_eq!(record.time, MealTime::Lunch);
            assert!(record.total_bill >= 10.0 && record.total_bill <= 20.0);
        }
    }

    #[test]
    fn test_empty_result_blanks_value_boxes() {
        let dash = dashboard();
        assert!(dash.average_bill().is_some());

        dash.set_meal_selection(MealSelection::none());
        assert_eq!(dash.tipper_count(), 0);
        assert_eq!(dash.average_tip_percent(), None);
        assert_eq!(dash.average_bill(), None);

        // And back again.
        dash.set_meal_selection(MealSelection::all());
        assert_eq!(dash.tipper_count(), 244);
        assert!(dash.average_tip_percent().is_some());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dash = dashboard();
        dash.set_bill_range(12.0, 14.0);
        dash.set_meal_selection(MealSelection::only(MealTime::Dinner));
        assert_ne!(dash.tipper_count(), 244);

        dash.reset();
        assert_eq!(dash.bill_range(), dash.bill_bounds());
        assert_eq!(dash.meal_selection(), MealSelection::all());
        assert_eq!(dash.tipper_count(), 244);

        // Re-triggering with unchanged state still fires the handler.
        let before = dash.filter_recompute_count();
        dash.reset();
        assert_eq!(dash.tipper_count(), 244);
        assert_eq!(dash.filter_recompute_count(), before + 1);
    }

    #[test]
    fn test_scatter_color_only_touches_scatter() {
        let dash = dashboard();
        let view_before = dash.filtered_view();
        let violin_before = dash.violin_chart();
        let filter_runs = dash.filter_recompute_count();

        dash.set_scatter_color(Some(CategoryColumn::Smoker));
        let scatter = dash.scatter_chart();
        assert_eq!(scatter.legend_title, Some("Smoker"));
        assert!(scatter.points.iter().all(|p| p.label.is_some()));

        // The filtered view and the other chart are untouched.
        assert!(Rc::ptr_eq(&view_before, &dash.filtered_view()));
        assert!(Rc::ptr_eq(&violin_before, &dash.violin_chart()));
        assert_eq!(dash.filter_recompute_count(), filter_runs);
    }

    #[test]
    fn test_violin_split_updates_title() {
        let dash = dashboard();
        assert_eq!(
            dash.violin_chart().title,
            "Distribution of Tip Percentages by Day"
        );

        dash.set_violin_split(CategoryColumn::Sex);
        let violin = dash.violin_chart();
        assert_eq!(violin.title, "Distribution of Tip Percentages by Sex");
        assert_eq!(violin.legend_title, "Sex");
        assert!(violin.points.iter().all(|p| p.group == "Male" || p.group == "Female"));
    }

    #[test]
    fn test_charts_follow_filtered_view() {
        let dash = dashboard();
        dash.set_bill_range(40.0, 51.0);
        let view = dash.filtered_view();
        let scatter = dash.scatter_chart();
        let violin = dash.violin_chart();

        assert_eq!(scatter.points.len(), view.len());
        assert_eq!(violin.points.len(), view.len());
        assert!(scatter.points.iter().all(|p| p.total_bill >= 40.0));
    }

    #[test]
    fn test_table_exports_track_filter() {
        let dash = dashboard();
        dash.set_bill_range(50.0, 51.0);
        let csv = dash.table_csv();
        // Only the 50.81 bill survives.
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("50.81"));

        let json: serde_json::Value = serde_json::from_str(&dash.table_json().unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
    }
}
