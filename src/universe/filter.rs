use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::catalog::{MAX_YEAR, MIN_YEAR};
use super::paper::Paper;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Matches either the category id or its display name.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, paper: &Paper) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => paper.category_id == *wanted || paper.category == *wanted,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(value.to_owned()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Inclusive year interval. Endpoints are stored in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    pub const FULL: Self = Self {
        start: MIN_YEAR,
        end: MAX_YEAR,
    };

    pub fn new(a: i32, b: i32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(self) -> i32 {
        self.start
    }

    pub fn end(self) -> i32 {
        self.end
    }

    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub search: String,
    pub category: CategoryFilter,
    pub years: YearRange,
}

impl FilterSpec {
    pub fn matches(&self, paper: &Paper) -> bool {
        self.matches_search(paper) && self.category.matches(paper) && self.years.contains(paper.year)
    }

    fn matches_search(&self, paper: &Paper) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        paper.title.to_lowercase().contains(&needle)
            || paper.abstract_text.to_lowercase().contains(&needle)
    }

    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.category == CategoryFilter::All && self.years == YearRange::FULL
    }
}

/// Stable filter: keeps the input order.
pub fn filter_papers<'a, I>(papers: I, spec: &FilterSpec) -> Vec<&'a Paper>
where
    I: IntoIterator<Item = &'a Paper>,
{
    papers.into_iter().filter(|paper| spec.matches(paper)).collect()
}

pub fn filter_indices(papers: &[Paper], spec: &FilterSpec) -> Vec<usize> {
    papers
        .iter()
        .enumerate()
        .filter_map(|(index, paper)| spec.matches(paper).then_some(index))
        .collect()
}
