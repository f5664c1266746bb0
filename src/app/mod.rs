use std::collections::HashMap;

use eframe::egui::{Context, Pos2};
use paper_universe::universe::{
    Achievement, CategoryFilter, ClusterSummary, Connection, Corpus, ExplorationStats, FilterSpec,
    HighlightState, MAX_YEAR, MIN_YEAR, YearRange,
};
use rand::rngs::StdRng;

mod camera;
mod render_utils;
mod scene;
mod ui;

use self::camera::Camera;

pub struct UniverseApp {
    model: ViewModel,
}

struct ViewModel {
    corpus: Corpus,
    rng: StdRng,
    search: String,
    category: CategoryFilter,
    year_start: i32,
    year_end: i32,
    finder_query: String,
    selected: Option<String>,
    camera: Camera,
    show_connections: bool,
    show_clusters: bool,
    scene_dirty: bool,
    scene_revision: u64,
    scene: SceneCache,
    highlight: HighlightState,
    exploration: ExplorationStats,
    recent_unlock: Option<RecentUnlock>,
    visible_star_count: usize,
    visible_connection_count: usize,
}

/// Pipeline output for the current filter, rebuilt when `scene_dirty`.
#[derive(Default)]
struct SceneCache {
    filtered: Vec<usize>,
    index_by_id: HashMap<String, usize>,
    connections: Vec<Connection>,
    clusters: Vec<ClusterSummary>,
    scratch: ViewScratch,
}

#[derive(Default)]
struct ViewScratch {
    projected: Vec<Option<ProjectedStar>>,
    draw_order: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct ProjectedStar {
    screen: Pos2,
    radius: f32,
    depth: f32,
}

struct RecentUnlock {
    achievement: &'static Achievement,
    shown_at: f64,
}

impl UniverseApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, mut rng: StdRng) -> Self {
        let corpus = Corpus::from_rng(&mut rng);
        Self {
            model: ViewModel::new(corpus, rng),
        }
    }
}

impl eframe::App for UniverseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}

impl ViewModel {
    fn new(corpus: Corpus, rng: StdRng) -> Self {
        Self {
            corpus,
            rng,
            search: String::new(),
            category: CategoryFilter::All,
            year_start: MIN_YEAR,
            year_end: MAX_YEAR,
            finder_query: String::new(),
            selected: None,
            camera: Camera::default(),
            show_connections: true,
            show_clusters: true,
            scene_dirty: true,
            scene_revision: 0,
            scene: SceneCache::default(),
            highlight: HighlightState::default(),
            exploration: ExplorationStats::default(),
            recent_unlock: None,
            visible_star_count: 0,
            visible_connection_count: 0,
        }
    }

    fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            category: self.category.clone(),
            years: YearRange::new(self.year_start, self.year_end),
        }
    }
}
