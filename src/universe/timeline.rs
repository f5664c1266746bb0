use serde::Serialize;

use super::catalog::{MAX_YEAR, MIN_YEAR};
use super::filter::YearRange;

const DECADE: i32 = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub year: i32,
    pub label: &'static str,
    pub color: &'static str,
}

pub static MILESTONES: [Milestone; 6] = [
    Milestone {
        year: 1998,
        label: "ISS Construction Begins",
        color: "#3B82F6",
    },
    Milestone {
        year: 2001,
        label: "First Long-Duration Studies",
        color: "#10B981",
    },
    Milestone {
        year: 2005,
        label: "Advanced Cell Research",
        color: "#8B5CF6",
    },
    Milestone {
        year: 2011,
        label: "Mars Mission Planning",
        color: "#EF4444",
    },
    Milestone {
        year: 2020,
        label: "COVID Space Research",
        color: "#F59E0B",
    },
    Milestone {
        year: 2024,
        label: "Artemis Program",
        color: "#EC4899",
    },
];

/// Ten-year window starting at `start`, clipped to the corpus years.
pub fn decade_window(start: i32) -> YearRange {
    let start = start.clamp(MIN_YEAR, MAX_YEAR);
    YearRange::new(start, (start + DECADE).min(MAX_YEAR))
}

pub fn decade_starts() -> impl Iterator<Item = i32> {
    (MIN_YEAR..=MAX_YEAR).step_by(DECADE as usize)
}

pub fn milestones_in(range: YearRange) -> impl Iterator<Item = &'static Milestone> {
    MILESTONES
        .iter()
        .filter(move |milestone| range.contains(milestone.year))
}
