// Terminal display and JSON report of the computed ride order.
//
// The formatted list is what the scheduler reads before pinning slips to
// the calendar: one slip per line, each annotated with how similar it is
// to the ride a week earlier. High adjacent similarity is exactly what
// the ordering tried to avoid, so those values get warning colors.

use colored::Colorize;
use serde::Serialize;

use crate::similarity::DistanceTable;
use crate::slip::RouteSlip;
use crate::tour::Tour;

/// Machine-readable ordering result, emitted by `order --json`.
#[derive(Debug, Serialize)]
pub struct OrderingReport {
    /// Slip names in scheduled order.
    pub order: Vec<String>,
    /// Total adjacent-pair similarity along the schedule.
    pub cost: f64,
}

impl OrderingReport {
    pub fn new(slips: &[RouteSlip], tour: &Tour) -> Self {
        Self {
            order: tour.order.iter().map(|&i| slips[i].name.clone()).collect(),
            cost: tour.cost,
        }
    }
}

/// Display the schedule as a numbered list, one slip per line.
pub fn display_order(slips: &[RouteSlip], tour: &Tour, table: &DistanceTable) {
    println!(
        "\n{}",
        format!("=== Ride Order ({} slips) ===", tour.order.len()).bold()
    );
    println!();

    for (pos, &idx) in tour.order.iter().enumerate() {
        if pos == 0 {
            println!("  {:>3}. {}", pos + 1, slips[idx].name);
        } else {
            let similarity = table.between(tour.order[pos - 1], idx);
            println!(
                "  {:>3}. {:<44} {}",
                pos + 1,
                slips[idx].name,
                colorize_similarity(similarity)
            );
        }
    }

    println!();
    println!("  Total adjacent similarity: {:.3}", tour.cost);
}

/// Printed when there was nothing to order.
pub fn display_no_order() {
    println!("No best path found (no route slips were given).");
}

/// Color a similarity-to-previous value by how loud the complaint about
/// riding nearly the same ride two weeks in a row would be.
fn colorize_similarity(similarity: f64) -> colored::ColoredString {
    let text = format!("{similarity:.2}");
    if similarity >= 0.5 {
        text.red()
    } else if similarity >= 0.25 {
        text.yellow()
    } else {
        text.green()
    }
}
