use mailrule::FilterExpr;

fn main() {
    let mut filter = FilterExpr::new();
    filter.push("free", false);
    filter.push("cheap", true);
    filter.push("pills", true);
    println!("filter: {filter}");

    for candidate in ["cheap pills here", "pills, cheap", "free pills", "nothing"] {
        println!("{candidate:?} -> {}", filter.matches(candidate));
    }

    let mut edited = filter.duplicate();
    edited
        .insert(2, "meds", false)
        .expect("index within bounds");
    println!("edited: {edited}");
    println!("\"cheap meds\" -> {}", edited.matches("cheap meds"));

    if let Err(err) = edited.remove(10) {
        println!("error: {err}");
    }
}
