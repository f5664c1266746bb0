use std::collections::HashMap;

use paper_universe::universe::{
    HighlightState, Paper, aggregate_clusters, filter_indices, synthesize_connections,
};
use tracing::{debug, info};

use super::super::{RecentUnlock, SceneCache, ViewModel, ViewScratch};

impl ViewModel {
    /// Re-runs filter, connection synthesis and clustering for the current
    /// filter values.
    pub(in crate::app) fn rebuild_scene(&mut self) {
        self.scene_revision = self.scene_revision.wrapping_add(1);

        let spec = self.filter_spec();
        let filtered = filter_indices(&self.corpus, &spec);
        let papers = filtered
            .iter()
            .map(|&index| &self.corpus[index])
            .collect::<Vec<&Paper>>();

        let connections = synthesize_connections(&papers, &mut self.rng);
        let clusters = aggregate_clusters(&papers);
        let index_by_id = papers
            .iter()
            .enumerate()
            .map(|(slot, paper)| (paper.id.clone(), slot))
            .collect::<HashMap<_, _>>();

        debug!(
            revision = self.scene_revision,
            papers = papers.len(),
            connections = connections.len(),
            clusters = clusters.len(),
            search = %spec.search,
            category = %spec.category,
            "rebuilt scene"
        );

        self.highlight = HighlightState::new(self.selected.as_deref(), &connections);
        self.scene = SceneCache {
            filtered,
            index_by_id,
            connections,
            clusters,
            scratch: ViewScratch::default(),
        };
        self.visible_star_count = self.scene.filtered.len();
        self.visible_connection_count = self.scene.connections.len();
        self.scene_dirty = false;
    }

    /// Every click on a paper counts as exploration, including a repeat
    /// click on the current selection.
    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>, now: f64) {
        if self.selected != selected {
            self.selected = selected;
            self.highlight =
                HighlightState::new(self.selected.as_deref(), &self.scene.connections);
        }

        let Some(paper) = self.selected.as_deref().and_then(|id| self.corpus.get(id)) else {
            return;
        };

        let touching = self.highlight.touching_count();
        debug!(paper = %paper.id, touching, "selected paper");
        let unlocked = self.exploration.record_selection(paper, touching);
        for achievement in &unlocked {
            info!(achievement = achievement.id, "achievement unlocked");
        }
        if let Some(achievement) = unlocked.last().copied() {
            self.recent_unlock = Some(RecentUnlock {
                achievement,
                shown_at: now,
            });
        }
    }

    pub(in crate::app) fn mark_filters_changed(&mut self) {
        self.scene_dirty = true;
    }

    /// Corpus paper behind a slot of the filtered scene.
    pub(in crate::app) fn scene_paper(&self, slot: usize) -> Option<&Paper> {
        self.scene
            .filtered
            .get(slot)
            .and_then(|&index| self.corpus.papers().get(index))
    }
}
