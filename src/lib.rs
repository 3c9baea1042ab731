/// Tipboard - Reactive Tips Dashboard Engine
///
/// A reactive filtering engine over the fixed restaurant-tips dataset.
/// Inputs (bill interval, meal selection, chart pickers, a reset event)
/// drive an explicit dependency graph; the filtered view and everything
/// derived from it (value boxes, table grid, chart specs) recompute lazily
/// and stay memoized between input changes.

pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod reactive;
pub mod summary;

pub use chart::{ScatterChart, ScatterPoint, ViolinChart, ViolinPoint};
pub use dashboard::Dashboard;
pub use dataset::{CategoryColumn, Day, MealTime, Sex, Smoker, TipRecord, TipsDataset};
pub use filter::{FilterState, FilteredView, MealSelection};
pub use reactive::{Derived, EventSource, Graph, Input, NodeId};
pub use summary::{format_currency, format_percent};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_complete_session() {
        let dash = Dashboard::new().unwrap();

        // Opening state: full dataset, both meals, full interval.
        assert_eq!(dash.tipper_count(), 244);
        let full_view = dash.filtered_view();
        assert_eq!(full_view.len(), 244);

        // Narrow to mid-range lunches.
        dash.set_bill_range(10.0, 20.0);
        dash.set_meal_selection(MealSelection::only(MealTime::Lunch));

        let view = dash.filtered_view();
        assert!(view.len() < 244);
        assert!(view
            .records()
            .all(|r| r.time == MealTime::Lunch && r.total_bill >= 10.0 && r.total_bill <= 20.0));

        // Value boxes agree with the view.
        assert_eq!(dash.tipper_count(), view.len());
        let avg = view.avg_bill().unwrap();
        assert_eq!(dash.average_bill(), Some(format_currency(avg)));

        // Charts render the same rows.
        dash.set_scatter_color(Some(CategoryColumn::Day));
        let scatter = dash.scatter_chart();
        assert_eq!(scatter.points.len(), view.len());
        assert_eq!(scatter.legend_title, Some("Day"));

        dash.set_violin_split(CategoryColumn::Smoker);
        let violin = dash.violin_chart();
        assert_eq!(violin.points.len(), view.len());
        assert_eq!(violin.title, "Distribution of Tip Percentages by Smoker");

        // Empty out the selection: everything blanks, nothing panics.
        dash.set_meal_selection(MealSelection::none());
        assert_eq!(dash.tipper_count(), 0);
        assert_eq!(dash.average_tip_percent(), None);
        assert_eq!(dash.average_bill(), None);
        assert!(dash.scatter_chart().points.is_empty());

        // Reset restores the opening state.
        dash.reset();
        assert_eq!(dash.bill_range(), dash.bill_bounds());
        assert_eq!(dash.tipper_count(), 244);

        // The restored view is a fresh snapshot equal in content.
        let restored = dash.filtered_view();
        assert!(!Rc::ptr_eq(&full_view, &restored));
        assert_eq!(*full_view, *restored);
    }
}
