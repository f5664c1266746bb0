use eframe::egui::{self, RichText, Ui};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use paper_universe::universe::{
    CATEGORIES, CategoryFilter, MAX_YEAR, MIN_YEAR, Paper, YearRange, decade_starts, decade_window,
    milestones_in,
};
use paper_universe::util::truncate_chars;

use super::super::ViewModel;
use super::super::camera::Camera;
use super::super::render_utils::hex_color;

const FINDER_RESULTS: usize = 12;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher.fuzzy_match(text, query).or_else(|| {
        matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase())
    })
}

/// Corpus indices of the best title matches among `filtered`, highest score
/// first and generation order on ties.
fn finder_matches(papers: &[Paper], filtered: &[usize], query: &str) -> Vec<usize> {
    let matcher = SkimMatcherV2::default();
    let mut scored = filtered
        .iter()
        .filter_map(|&index| {
            let paper = papers.get(index)?;
            fuzzy_match_score(&matcher, &paper.title, query).map(|score| (score, index))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
    scored
        .into_iter()
        .take(FINDER_RESULTS)
        .map(|(_, index)| index)
        .collect()
}

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Explore");
        ui.separator();
        ui.add_space(4.0);

        let mut changed = false;

        ui.label("Search titles and abstracts")
            .on_hover_text("Case-insensitive substring match.");
        changed |= ui.text_edit_singleline(&mut self.search).changed();

        ui.add_space(4.0);
        let selected_text = match &self.category {
            CategoryFilter::All => "All categories".to_owned(),
            CategoryFilter::Only(category) => category.clone(),
        };
        egui::ComboBox::from_label("Category")
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                changed |= ui
                    .selectable_value(&mut self.category, CategoryFilter::All, "All categories")
                    .changed();
                for category in &CATEGORIES {
                    changed |= ui
                        .selectable_value(
                            &mut self.category,
                            CategoryFilter::Only(category.id.to_owned()),
                            RichText::new(category.name).color(hex_color(category.color)),
                        )
                        .on_hover_text(category.description)
                        .changed();
                }
            });

        ui.separator();
        ui.label(RichText::new("Timeline").strong());
        changed |= ui
            .add(egui::Slider::new(&mut self.year_start, MIN_YEAR..=MAX_YEAR).text("From"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.year_end, MIN_YEAR..=MAX_YEAR).text("To"))
            .changed();

        ui.horizontal_wrapped(|ui| {
            for start in decade_starts() {
                let window = decade_window(start);
                let active = YearRange::new(self.year_start, self.year_end) == window;
                if ui
                    .selectable_label(active, format!("{start}s"))
                    .on_hover_text(format!("{} to {}", window.start(), window.end()))
                    .clicked()
                {
                    self.year_start = window.start();
                    self.year_end = window.end();
                    changed = true;
                }
            }
            if ui.button("Full range").clicked() {
                self.year_start = MIN_YEAR;
                self.year_end = MAX_YEAR;
                changed = true;
            }
        });

        let years = YearRange::new(self.year_start, self.year_end);
        for milestone in milestones_in(years) {
            ui.label(
                RichText::new(format!("{}  {}", milestone.year, milestone.label))
                    .color(hex_color(milestone.color))
                    .small(),
            );
        }

        if changed {
            self.mark_filters_changed();
        }

        ui.separator();
        ui.checkbox(&mut self.show_connections, "Show connections");
        ui.checkbox(&mut self.show_clusters, "Show clusters");
        ui.checkbox(&mut self.camera.auto_rotate, "Auto-rotate");
        if ui.button("Reset view").clicked() {
            self.camera = Camera::default();
        }

        ui.separator();
        self.draw_finder(ui);
    }

    fn draw_finder(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Jump to paper").strong());
        ui.text_edit_singleline(&mut self.finder_query)
            .on_hover_text("Fuzzy match against the papers currently in view.");

        let query = self.finder_query.trim();
        if query.is_empty() {
            return;
        }

        let matches = finder_matches(&self.corpus, &self.scene.filtered, query);

        if matches.is_empty() {
            ui.weak("No matching papers in view.");
            return;
        }

        let mut clicked = None;
        for paper in matches.into_iter().map(|index| &self.corpus[index]) {
            let is_selected = self.selected.as_deref() == Some(paper.id.as_str());
            if ui
                .selectable_label(is_selected, truncate_chars(&paper.title, 44))
                .on_hover_text(format!("{} ({})", paper.title, paper.year))
                .clicked()
            {
                clicked = Some(paper.id.clone());
            }
        }

        if let Some(id) = clicked {
            let now = ui.input(|input| input.time);
            self.set_selected(Some(id), now);
        }
    }
}
