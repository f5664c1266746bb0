//! Property-based tests for the corpus pipeline using proptest.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use paper_universe::universe::{
    ACHIEVEMENTS, CATEGORIES, CLUSTER_SIZE, CORPUS_SIZE, CategoryFilter, Corpus, ExplorationStats,
    FilterSpec, HighlightState, MAX_EDGES_PER_PAPER, MAX_YEAR, MIN_CLUSTER_MEMBERS, MIN_YEAR,
    Paper, YearRange, aggregate_clusters, filter_papers, synthesize_connections,
};

fn category_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        (0..CATEGORIES.len()).prop_map(|slot| CategoryFilter::Only(CATEGORIES[slot].id.to_owned())),
        (0..CATEGORIES.len())
            .prop_map(|slot| CategoryFilter::Only(CATEGORIES[slot].name.to_owned())),
    ]
}

fn filter_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop_oneof![
            Just(String::new()),
            Just("microgravity".to_owned()),
            Just("BONE".to_owned()),
            "[a-z]{1,4}",
        ],
        category_filter(),
        MIN_YEAR..=MAX_YEAR,
        MIN_YEAR..=MAX_YEAR,
    )
        .prop_map(|(search, category, a, b)| FilterSpec {
            search,
            category,
            years: YearRange::new(a, b),
        })
}

fn ids(papers: &[&Paper]) -> Vec<String> {
    papers.iter().map(|paper| paper.id.clone()).collect()
}

// --- Generator properties ---

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn corpus_size_and_clusters_follow_generation_order(seed in any::<u64>()) {
        let corpus = Corpus::with_seed(seed);
        prop_assert_eq!(corpus.len(), CORPUS_SIZE);
        for (index, paper) in corpus.iter().enumerate() {
            prop_assert_eq!(paper.cluster as usize, index / CLUSTER_SIZE);
            prop_assert_eq!(&paper.id, &format!("paper-{}", index + 1));
        }
    }

    #[test]
    fn impact_scores_stay_in_range(seed in any::<u64>()) {
        let corpus = Corpus::with_seed(seed);
        for paper in corpus.iter() {
            prop_assert!(paper.impact_score <= 10);
            prop_assert!((MIN_YEAR..=MAX_YEAR).contains(&paper.year));
            prop_assert!(paper.size >= 0.3);
            prop_assert!(paper.brightness >= 0.3);
            prop_assert_eq!(paper.pulsing, paper.citations > 75);
        }
    }

    #[test]
    fn same_seed_yields_identical_corpus(seed in any::<u64>()) {
        let a = Corpus::with_seed(seed);
        let b = Corpus::with_seed(seed);
        prop_assert_eq!(a.papers(), b.papers());
    }
}

// --- Filter properties ---

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn filtering_is_idempotent(seed in 0u64..64, spec in filter_spec()) {
        let corpus = Corpus::with_seed(seed);
        let once = filter_papers(corpus.iter(), &spec);
        let twice = filter_papers(once.iter().copied(), &spec);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn filtering_preserves_order_and_matches(seed in 0u64..64, spec in filter_spec()) {
        let corpus = Corpus::with_seed(seed);
        let filtered = filter_papers(corpus.iter(), &spec);
        let expected = corpus
            .iter()
            .filter(|paper| spec.matches(paper))
            .collect::<Vec<_>>();
        prop_assert_eq!(ids(&filtered), ids(&expected));
        for paper in &filtered {
            prop_assert!(spec.years.contains(paper.year));
            prop_assert!(spec.category.matches(paper));
        }
    }
}

#[test]
fn identity_filter_returns_whole_corpus() {
    let corpus = Corpus::with_seed(5);
    let spec = FilterSpec::default();
    assert!(spec.is_identity());
    let filtered = filter_papers(corpus.iter(), &spec);
    assert_eq!(filtered.len(), CORPUS_SIZE);
    assert_eq!(ids(&filtered), ids(&corpus.iter().collect::<Vec<_>>()));
}

// --- Connection and cluster properties ---

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn connections_point_backwards_in_time(
        seed in 0u64..64,
        edge_seed in any::<u64>(),
        spec in filter_spec(),
    ) {
        let corpus = Corpus::with_seed(seed);
        let papers = filter_papers(corpus.iter(), &spec);
        let by_id = papers
            .iter()
            .map(|paper| (paper.id.as_str(), *paper))
            .collect::<HashMap<_, _>>();

        let connections = synthesize_connections(&papers, &mut StdRng::seed_from_u64(edge_seed));

        let mut per_source = HashMap::<&str, u32>::new();
        for connection in &connections {
            prop_assert_ne!(&connection.from_id, &connection.to_id);
            let source = by_id[connection.from_id.as_str()];
            let target = by_id[connection.to_id.as_str()];
            prop_assert!(target.year <= source.year);
            prop_assert!((0.0..1.0).contains(&connection.strength));
            *per_source.entry(connection.from_id.as_str()).or_default() += 1;
        }
        for (id, count) in per_source {
            prop_assert!(count <= by_id[id].connections.min(MAX_EDGES_PER_PAPER));
        }
    }

    #[test]
    fn clusters_have_enough_members_and_true_centroids(seed in 0u64..64, spec in filter_spec()) {
        let corpus = Corpus::with_seed(seed);
        let papers = filter_papers(corpus.iter(), &spec);
        let clusters = aggregate_clusters(&papers);

        let mut seen = HashSet::new();
        for summary in &clusters {
            prop_assert!(summary.member_count >= MIN_CLUSTER_MEMBERS);
            prop_assert!(seen.insert(summary.cluster));

            let members = papers
                .iter()
                .filter(|paper| paper.cluster == summary.cluster)
                .collect::<Vec<_>>();
            prop_assert_eq!(members.len(), summary.member_count);

            let count = members.len() as f32;
            let mean_x = members.iter().map(|paper| paper.position.x).sum::<f32>() / count;
            let mean_y = members.iter().map(|paper| paper.position.y).sum::<f32>() / count;
            let mean_z = members.iter().map(|paper| paper.position.z).sum::<f32>() / count;
            prop_assert!((summary.centroid.x - mean_x).abs() < 1e-2);
            prop_assert!((summary.centroid.y - mean_y).abs() < 1e-2);
            prop_assert!((summary.centroid.z - mean_z).abs() < 1e-2);
        }
    }
}

// --- Exploration properties ---

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn achievements_unlock_at_most_once(
        seed in 0u64..16,
        picks in proptest::collection::vec(0..CORPUS_SIZE, 1..80),
    ) {
        let corpus = Corpus::with_seed(seed);
        let papers = corpus.iter().collect::<Vec<_>>();
        let connections = synthesize_connections(&papers, &mut StdRng::seed_from_u64(seed));

        let mut stats = ExplorationStats::default();
        let mut announced = Vec::new();
        for pick in picks {
            let paper = &corpus[pick];
            let touching = HighlightState::new(Some(&paper.id), &connections).touching_count();
            announced.extend(stats.record_selection(paper, touching).into_iter().map(|a| a.id));
        }

        let unique = announced.iter().collect::<HashSet<_>>();
        prop_assert_eq!(unique.len(), announced.len());
        prop_assert_eq!(announced.len(), stats.unlocked().len());
        for achievement in &ACHIEVEMENTS {
            prop_assert_eq!(
                stats.is_unlocked(achievement.id),
                stats.value(achievement.metric) >= achievement.threshold
            );
        }
    }
}
