use std::collections::BTreeSet;

use serde::Serialize;

use super::generate::CORPUS_SIZE;
use super::paper::Paper;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AchievementMetric {
    PapersExplored,
    ConnectionsDiscovered,
    DecadesVisited,
    CategoriesVisited,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub metric: AchievementMetric,
    pub threshold: usize,
}

pub static ACHIEVEMENTS: [Achievement; 6] = [
    Achievement {
        id: "first-explorer",
        title: "Space Explorer",
        description: "Clicked your first research paper",
        metric: AchievementMetric::PapersExplored,
        threshold: 1,
    },
    Achievement {
        id: "paper-collector",
        title: "Research Collector",
        description: "Explored 10 research papers",
        metric: AchievementMetric::PapersExplored,
        threshold: 10,
    },
    Achievement {
        id: "connection-finder",
        title: "Connection Detective",
        description: "Discovered 25 research connections",
        metric: AchievementMetric::ConnectionsDiscovered,
        threshold: 25,
    },
    Achievement {
        id: "time-traveler",
        title: "Time Traveler",
        description: "Explored research across 3 decades",
        metric: AchievementMetric::DecadesVisited,
        threshold: 3,
    },
    Achievement {
        id: "category-master",
        title: "Research Master",
        description: "Explored all research categories",
        metric: AchievementMetric::CategoriesVisited,
        threshold: 6,
    },
    Achievement {
        id: "constellation-mapper",
        title: "Constellation Mapper",
        description: "Mapped 50 research connections",
        metric: AchievementMetric::ConnectionsDiscovered,
        threshold: 50,
    },
];

/// Running totals of what the user has clicked on this session.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ExplorationStats {
    papers_explored: usize,
    connections_discovered: usize,
    categories: BTreeSet<String>,
    decades: BTreeSet<i32>,
    unlocked: Vec<&'static Achievement>,
}

impl ExplorationStats {
    /// Records one selection event and returns achievements it unlocked.
    /// `touching` is the number of current connections touching `paper`.
    pub fn record_selection(&mut self, paper: &Paper, touching: usize) -> Vec<&'static Achievement> {
        self.papers_explored += 1;
        self.connections_discovered += touching;
        self.categories.insert(paper.category_id.clone());
        self.decades.insert(paper.decade());

        let fresh = ACHIEVEMENTS
            .iter()
            .filter(|achievement| {
                self.value(achievement.metric) >= achievement.threshold
                    && !self.is_unlocked(achievement.id)
            })
            .collect::<Vec<_>>();
        self.unlocked.extend(fresh.iter().copied());
        fresh
    }

    pub fn value(&self, metric: AchievementMetric) -> usize {
        match metric {
            AchievementMetric::PapersExplored => self.papers_explored,
            AchievementMetric::ConnectionsDiscovered => self.connections_discovered,
            AchievementMetric::DecadesVisited => self.decades.len(),
            AchievementMetric::CategoriesVisited => self.categories.len(),
        }
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|achievement| achievement.id == id)
    }

    pub fn unlocked(&self) -> &[&'static Achievement] {
        &self.unlocked
    }

    pub fn papers_explored(&self) -> usize {
        self.papers_explored
    }

    pub fn connections_discovered(&self) -> usize {
        self.connections_discovered
    }

    /// Fraction of the corpus explored, capped at 1.
    pub fn progress(&self) -> f32 {
        (self.papers_explored as f32 / CORPUS_SIZE as f32).min(1.0)
    }
}
