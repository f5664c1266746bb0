use std::collections::BTreeSet;
use std::ops::Deref;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use super::catalog::{
    ABSTRACT_TEMPLATE_COUNT, CATEGORIES, ENVIRONMENTS, FIRST_NAMES, JOURNALS, LAST_NAMES, MAX_YEAR,
    MIN_YEAR, MISSION_PROGRAMS, NASA_CENTERS, STUDY_TYPES, render_abstract,
};
use super::paper::{POSITION_EXTENT, Paper, PaperDraft, Position};

pub const CORPUS_SIZE: usize = 608;

const MAX_CITATIONS: u32 = 200;
const MAX_CONNECTIONS: u32 = 30;
const MAX_AUTHORS: usize = 4;
const SIZE_NOISE: f32 = 0.7;

/// Session-scoped, immutable paper collection. Clones share storage.
#[derive(Clone, Debug)]
pub struct Corpus {
    papers: Arc<[Paper]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryCount {
    pub id: &'static str,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CorpusSummary {
    pub papers: usize,
    pub by_category: Vec<CategoryCount>,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub centers: usize,
    pub pulsing: usize,
    pub mean_impact: f32,
}

impl Corpus {
    pub fn generate() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let papers = generate_corpus(rng);
        info!(papers = papers.len(), "generated paper corpus");
        Self {
            papers: papers.into(),
        }
    }

    pub fn papers(&self) -> &[Paper] {
        &self.papers
    }

    pub fn get(&self, id: &str) -> Option<&Paper> {
        self.papers.iter().find(|paper| paper.id == id)
    }

    pub fn summary(&self) -> CorpusSummary {
        let by_category = CATEGORIES
            .iter()
            .map(|category| CategoryCount {
                id: category.id,
                name: category.name,
                count: self
                    .papers
                    .iter()
                    .filter(|paper| paper.category_id == category.id)
                    .count(),
            })
            .collect();

        let centers = self
            .papers
            .iter()
            .map(|paper| paper.nasa_center.as_str())
            .collect::<BTreeSet<_>>()
            .len();

        let mean_impact = if self.papers.is_empty() {
            0.0
        } else {
            self.papers
                .iter()
                .map(|paper| paper.impact_score as f32)
                .sum::<f32>()
                / self.papers.len() as f32
        };

        CorpusSummary {
            papers: self.papers.len(),
            by_category,
            first_year: self.papers.iter().map(|paper| paper.year).min(),
            last_year: self.papers.iter().map(|paper| paper.year).max(),
            centers,
            pulsing: self.papers.iter().filter(|paper| paper.pulsing).count(),
            mean_impact,
        }
    }
}

impl Deref for Corpus {
    type Target = [Paper];

    fn deref(&self) -> &Self::Target {
        &self.papers
    }
}

pub fn generate_corpus<R: Rng + ?Sized>(rng: &mut R) -> Vec<Paper> {
    (0..CORPUS_SIZE)
        .map(|index| Paper::from_draft(sample_draft(rng, index)))
        .collect()
}

fn pick<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> &'a T {
    // Every catalogue list is a non-empty constant.
    &items[rng.gen_range(0..items.len())]
}

fn sample_draft<R: Rng + ?Sized>(rng: &mut R, index: usize) -> PaperDraft {
    let category = pick(rng, &CATEGORIES);
    let year = rng.gen_range(MIN_YEAR..=MAX_YEAR);
    let citations = rng.gen_range(0..MAX_CITATIONS);
    let connections = rng.gen_range(0..MAX_CONNECTIONS);

    let study_type = *pick(rng, &STUDY_TYPES);
    let keyword = *pick(rng, category.keywords);
    let environment = *pick(rng, &ENVIRONMENTS);
    let title =
        format!("{study_type} {keyword} in {environment}: Implications for deep space missions");
    let abstract_text = render_abstract(
        rng.gen_range(0..ABSTRACT_TEMPLATE_COUNT),
        keyword,
        environment,
    );

    let authors = sample_authors(rng);
    let journal = *pick(rng, &JOURNALS);
    let nasa_center = *pick(rng, &NASA_CENTERS);
    let mission_program = pick(rng, &MISSION_PROGRAMS);

    let position = Position::new(
        rng.gen_range(-POSITION_EXTENT..=POSITION_EXTENT),
        rng.gen_range(-POSITION_EXTENT..=POSITION_EXTENT),
        rng.gen_range(-POSITION_EXTENT..=POSITION_EXTENT),
    );
    let size_noise = rng.gen_range(0.0..SIZE_NOISE);

    PaperDraft {
        index,
        category,
        year,
        citations,
        connections,
        title,
        abstract_text,
        authors,
        journal,
        nasa_center,
        mission_program,
        position,
        size_noise,
    }
}

fn sample_authors<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=MAX_AUTHORS);
    (0..count)
        .map(|_| {
            let first = pick(rng, &FIRST_NAMES);
            let last = pick(rng, &LAST_NAMES);
            format!("Dr. {first} {last}")
        })
        .collect()
}
