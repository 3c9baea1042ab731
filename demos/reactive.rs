/// Reactive Graph Example
///
/// This example demonstrates the dependency-graph primitives on their own:
/// - Inputs and derived values
/// - Lazy recomputation and memoization
/// - Edge-triggered events

use tipboard::{Derived, EventSource, Graph, Input};

fn main() {
    println!("=== Tipboard Reactive Graph Example ===\n");

    let graph = Graph::new();

    println!("1. An input and a derived value...");
    let celsius = Input::new(&graph, 20.0_f64);
    let reader = celsius.clone();
    let fahrenheit = Derived::new(&graph, &[celsius.id()], move || reader.get() * 9.0 / 5.0 + 32.0);
    println!("   {}C = {}F", celsius.get(), fahrenheit.get());
    println!();

    println!("2. Reads are memoized...");
    fahrenheit.get();
    fahrenheit.get();
    println!(
        "   three reads, {} recomputation(s)",
        fahrenheit.recompute_count()
    );
    println!();

    println!("3. Writes invalidate, the next read recomputes...");
    celsius.set(35.0);
    println!("   {}C = {}F", celsius.get(), fahrenheit.get());
    println!(
        "   {} recomputation(s) total",
        fahrenheit.recompute_count()
    );
    println!();

    println!("4. Edge-triggered events...");
    let reset = EventSource::new();
    let writer = celsius.clone();
    reset.subscribe(move || writer.set(0.0));

    reset.emit();
    reset.emit();
    println!(
        "   emitted {} times, input is now {}C ({}F)",
        reset.activations(),
        celsius.get(),
        fahrenheit.get()
    );

    println!("\n=== Example Complete ===");
}
