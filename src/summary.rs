/// Tipboard Value Boxes
///
/// The three summary scalars shown above the table: tipper count, average
/// tip percentage, and average bill. Each is an independent pure function of
/// the filtered view. The two means render as `None` on an empty view so the
/// display goes blank instead of showing NaN.

use crate::filter::FilteredView;

/// Number of visible rows.
pub fn tipper_count(view: &FilteredView) -> usize {
    view.len()
}

/// Mean tip percentage, formatted with one decimal (e.g. "16.1%").
/// `None` when the view is empty.
pub fn average_tip_percent(view: &FilteredView) -> Option<String> {
    view.avg_tip_fraction().map(format_percent)
}

/// Mean bill, formatted as currency with two decimals (e.g. "$19.79").
/// `None` when the view is empty.
pub fn average_bill(view: &FilteredView) -> Option<String> {
    view.avg_bill().map(format_currency)
}

/// Format a fraction as a percentage with one decimal place.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a dollar amount with two decimal places.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
