mod catalog;
mod clusters;
mod connections;
mod exploration;
mod filter;
mod generate;
mod highlight;
mod paper;
mod timeline;

pub use catalog::{
    CATEGORIES, JOURNALS, MAX_YEAR, MIN_YEAR, MISSION_PROGRAMS, MissionProgram, NASA_CENTERS,
    ResearchCategory, category_by_id,
};
pub use clusters::{
    CLUSTER_PREVIEW_MEMBERS, ClusterMember, ClusterSummary, MIN_CLUSTER_MEMBERS, aggregate_clusters,
};
pub use connections::{Connection, MAX_EDGES_PER_PAPER, synthesize_connections};
pub use exploration::{ACHIEVEMENTS, Achievement, AchievementMetric, ExplorationStats};
pub use filter::{CategoryFilter, FilterSpec, YearRange, filter_indices, filter_papers};
pub use generate::{CORPUS_SIZE, CategoryCount, Corpus, CorpusSummary, generate_corpus};
pub use highlight::HighlightState;
pub use paper::{CLUSTER_SIZE, Paper, PaperDraft, Position, impact_score};
pub use timeline::{MILESTONES, Milestone, decade_starts, decade_window, milestones_in};
