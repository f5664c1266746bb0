use serde::Serialize;

use super::catalog::{MAX_YEAR, MIN_YEAR, MissionProgram, ResearchCategory};

pub const CLUSTER_SIZE: usize = 40;
pub const PULSING_CITATIONS: u32 = 75;
pub const POSITION_EXTENT: f32 = 150.0;

const MIN_SIZE: f32 = 0.3;
const MIN_BRIGHTNESS: f32 = 0.3;
const BRIGHTNESS_SPAN: i32 = MAX_YEAR - MIN_YEAR + 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

/// The raw sampled attributes of a paper, before derived fields exist.
#[derive(Clone, Debug)]
pub struct PaperDraft {
    pub index: usize,
    pub category: &'static ResearchCategory,
    pub year: i32,
    pub citations: u32,
    pub connections: u32,
    pub title: String,
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub journal: &'static str,
    pub nasa_center: &'static str,
    pub mission_program: &'static MissionProgram,
    pub position: Position,
    pub size_noise: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    pub category: String,
    pub category_id: String,
    pub citations: u32,
    pub connections: u32,
    pub color: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub doi: String,
    pub journal: String,
    pub nasa_center: String,
    pub mission_program: &'static MissionProgram,
    pub position: Position,
    pub size: f32,
    pub brightness: f32,
    pub pulsing: bool,
    pub cluster: u32,
    pub impact_score: u8,
}

impl Paper {
    /// Builds a paper from sampled attributes, deriving every computed
    /// field. Out-of-range years and coordinates are clamped here.
    pub fn from_draft(draft: PaperDraft) -> Self {
        let year = draft.year.clamp(MIN_YEAR, MAX_YEAR);
        let position = Position::new(
            draft.position.x.clamp(-POSITION_EXTENT, POSITION_EXTENT),
            draft.position.y.clamp(-POSITION_EXTENT, POSITION_EXTENT),
            draft.position.z.clamp(-POSITION_EXTENT, POSITION_EXTENT),
        );
        let ordinal = draft.index + 1;

        Self {
            id: format!("paper-{ordinal}"),
            title: draft.title,
            authors: draft.authors,
            year,
            category: draft.category.name.to_owned(),
            category_id: draft.category.id.to_owned(),
            citations: draft.citations,
            connections: draft.connections,
            color: draft.category.color.to_owned(),
            abstract_text: draft.abstract_text,
            doi: format!("10.1000/nasa.{year}.{ordinal}"),
            journal: draft.journal.to_owned(),
            nasa_center: draft.nasa_center.to_owned(),
            mission_program: draft.mission_program,
            position,
            size: star_size(draft.citations, draft.size_noise),
            brightness: brightness(year),
            pulsing: draft.citations > PULSING_CITATIONS,
            cluster: (draft.index / CLUSTER_SIZE) as u32,
            impact_score: impact_score(draft.citations, draft.connections, MAX_YEAR - year),
        }
    }

    pub fn age(&self) -> i32 {
        MAX_YEAR - self.year
    }

    pub fn decade(&self) -> i32 {
        self.year - self.year.rem_euclid(10)
    }
}

pub fn star_size(citations: u32, noise: f32) -> f32 {
    (citations as f32 / 150.0 + noise).max(MIN_SIZE)
}

pub fn brightness(year: i32) -> f32 {
    ((MAX_YEAR - year + 5) as f32 / BRIGHTNESS_SPAN as f32).max(MIN_BRIGHTNESS)
}

/// Averages citation, connection and recency sub-scores, each capped at 10.
pub fn impact_score(citations: u32, connections: u32, age: i32) -> u8 {
    let citation_score = (citations as f64 / 10.0).min(10.0);
    let connection_score = (connections as f64 / 5.0).min(10.0);
    let recency_score = (10.0 - age as f64 / 2.0).max(0.0);

    ((citation_score + connection_score + recency_score) / 3.0)
        .round()
        .clamp(0.0, 10.0) as u8
}
