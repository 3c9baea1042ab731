/// Dashboard Example
///
/// This example walks a full interactive session:
/// - Opening state over the bundled tips dataset
/// - Narrowing the bill interval and meal selection
/// - Value boxes blanking on an empty result
/// - Switching chart color/split variables
/// - Resetting the filters

use tipboard::{CategoryColumn, Dashboard, MealSelection, MealTime};

fn print_value_boxes(dash: &Dashboard) {
    println!("   Total tippers: {}", dash.tipper_count());
    println!(
        "   Average tip:   {}",
        dash.average_tip_percent().unwrap_or_default()
    );
    println!(
        "   Average bill:  {}",
        dash.average_bill().unwrap_or_default()
    );
}

fn main() {
    println!("=== Tipboard Dashboard Example ===\n");

    let dash = Dashboard::new().expect("bundled dataset loads");
    let (min_bill, max_bill) = dash.bill_bounds();

    println!("1. Opening state (bills ${:.2}..${:.2}, Lunch + Dinner):", min_bill, max_bill);
    print_value_boxes(&dash);
    println!();

    println!("2. Narrowing to $10-$20 lunches...");
    dash.set_bill_range(10.0, 20.0);
    dash.set_meal_selection(MealSelection::only(MealTime::Lunch));
    print_value_boxes(&dash);

    println!("   First rows of the table grid:");
    let view = dash.filtered_view();
    for record in view.records().take(3) {
        println!(
            "      ${:.2} bill, ${:.2} tip, {} on {}",
            record.total_bill,
            record.tip,
            record.time.as_str(),
            record.day.as_str()
        );
    }
    println!();

    println!("3. Excluding every row (no meals selected)...");
    dash.set_meal_selection(MealSelection::none());
    print_value_boxes(&dash);
    println!("   (both averages render blank, not NaN)\n");

    println!("4. Coloring the scatter by smoker and splitting the violin by sex...");
    dash.set_meal_selection(MealSelection::all());
    dash.set_scatter_color(Some(CategoryColumn::Smoker));
    dash.set_violin_split(CategoryColumn::Sex);

    let scatter = dash.scatter_chart();
    let violin = dash.violin_chart();
    println!(
        "   Scatter: {} points, legend '{}'",
        scatter.points.len(),
        scatter.legend_title.unwrap_or("none")
    );
    println!("   Violin:  '{}'", violin.title);
    println!();

    println!("5. Reset filter...");
    dash.reset();
    print_value_boxes(&dash);
    println!(
        "   Interval back to ${:.2}..${:.2}, filter rebuilt {} times this session",
        dash.bill_range().0,
        dash.bill_range().1,
        dash.filter_recompute_count()
    );

    println!("\n=== Example Complete ===");
}
