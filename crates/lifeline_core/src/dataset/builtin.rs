//! The built-in timeline dataset.
//!
//! # Responsibility
//! - Declare the fixed node/link graph the visualization layer renders.
//! - Expose it as a process-wide, lazily-built, immutable singleton.

use super::TimelineDataset;
use crate::model::node::{Link, Node};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<TimelineDataset> = Lazy::new(|| {
    TimelineDataset::new(builtin_nodes(), builtin_links())
        .expect("built-in timeline data must satisfy graph invariants")
});

/// Returns the built-in dataset.
///
/// The dataset is built on first access and shared for the rest of the
/// process; callers receive a plain shared reference and never need
/// locking.
///
/// # Panics
/// Panics on first access if the embedded data violates the graph
/// invariants. That is a defect in the declared data itself, fatal at
/// startup, with no recovery path.
pub fn builtin() -> &'static TimelineDataset {
    &BUILTIN
}

fn node(
    id: &str,
    name: &str,
    (year, month, day): (i32, u32, u32),
    description: &str,
    kind: &str,
) -> Node {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .expect("built-in event date must be a valid calendar date");
    Node::new(id, name, date, description, kind)
}

fn builtin_nodes() -> Vec<Node> {
    vec![
        node("birth", "Birth", (1990, 1, 1), "The beginning of your journey.", "milestone"),
        node("today", "Today", (2023, 6, 5), "Your current position in the timeline.", "present"),
        node("school", "Started School", (1995, 9, 1), "First day of elementary school.", "education"),
        node("highschool", "High School", (2004, 9, 1), "Started high school.", "education"),
        node("college", "College", (2008, 9, 1), "Started college education.", "education"),
        node("graduation", "Graduation", (2012, 5, 15), "Graduated from college with a degree.", "milestone"),
        node("firstjob", "First Job", (2012, 7, 10), "Started first professional job.", "career"),
        node("moved", "Moved to New City", (2015, 3, 20), "Relocated to a new city for better opportunities.", "life"),
        node("promotion", "Major Promotion", (2018, 11, 5), "Received a significant promotion at work.", "career"),
        node("travel", "World Travel", (2024, 6, 1), "Plan to travel around the world for 3 months.", "goal"),
        node("house", "Buy a House", (2025, 1, 15), "Goal to purchase first home.", "goal"),
        node("business", "Start Business", (2026, 3, 10), "Launch own business venture.", "goal"),
        node("family", "Start Family", (2027, 5, 20), "Begin a family.", "goal"),
        node("retirement", "Early Retirement", (2040, 1, 1), "Goal to achieve financial independence and retire early.", "goal"),
        // The source data carries this ad hoc category verbatim; it is
        // intentionally not normalized into the single-word set.
        node("coolthings", "say hi", (2028, 1, 1), "doing cool stuff", "cool thing"),
    ]
}

fn builtin_links() -> Vec<Link> {
    [
        ("birth", "school"),
        ("school", "highschool"),
        ("highschool", "college"),
        ("college", "graduation"),
        ("graduation", "firstjob"),
        ("firstjob", "moved"),
        ("moved", "promotion"),
        ("promotion", "today"),
        ("today", "travel"),
        ("today", "house"),
        ("house", "business"),
        ("house", "family"),
        ("business", "retirement"),
        ("family", "retirement"),
    ]
    .into_iter()
    .map(|(source, target)| Link::new(source, target))
    .collect()
}
