use eframe::egui::{self, RichText, Ui};
use paper_universe::universe::{ACHIEVEMENTS, CORPUS_SIZE};
use paper_universe::util::{format_authors, truncate_chars};

use super::super::ViewModel;
use super::super::render_utils::{SELECTED_COLOR, hex_color};

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Paper Details");
        ui.add_space(6.0);

        let mut next_selection = None;
        match self.selected.as_deref().and_then(|id| self.corpus.get(id)) {
            None => {
                ui.label("Click a star to inspect its paper.");
            }
            Some(paper) => {
                ui.label(RichText::new(&paper.title).strong());
                ui.label(
                    RichText::new(&paper.category)
                        .color(hex_color(&paper.color))
                        .small(),
                );
                ui.small(format!("{}  |  doi:{}", paper.id, paper.doi));
                ui.add_space(6.0);

                ui.label(format!("Authors: {}", format_authors(&paper.authors)));
                ui.label(format!("Year: {}", paper.year));
                ui.label(format!("Journal: {}", paper.journal));
                ui.label(format!("NASA center: {}", paper.nasa_center));
                ui.label(format!(
                    "Mission program: {} ({})",
                    paper.mission_program.name, paper.mission_program.acronym
                ));
                ui.label(format!("Citations: {}", paper.citations));
                ui.label(format!("Connections: {}", paper.connections));
                ui.add(
                    egui::ProgressBar::new(f32::from(paper.impact_score) / 10.0)
                        .text(format!("Impact {}/10", paper.impact_score)),
                );
                if !self.scene.index_by_id.contains_key(&paper.id) {
                    ui.weak("Hidden by the current filters.");
                }

                ui.separator();
                ui.label(RichText::new("Abstract").strong());
                ui.label(paper.abstract_text.as_str());

                ui.separator();
                ui.label(RichText::new("Connected papers").strong());
                let related = self.highlight.related_ids();
                if related.is_empty() {
                    ui.label("No connections in the current view.");
                }
                for id in related {
                    let Some(other) = self.corpus.get(id) else {
                        continue;
                    };
                    if ui
                        .link(truncate_chars(&other.title, 40))
                        .on_hover_text(format!("{} ({})", other.title, other.year))
                        .clicked()
                    {
                        next_selection = Some(Some(other.id.clone()));
                    }
                }

                ui.add_space(4.0);
                if ui.button("Clear selection").clicked() {
                    next_selection = Some(None);
                }
            }
        }

        if let Some(selected) = next_selection {
            let now = ui.input(|input| input.time);
            self.set_selected(selected, now);
        }

        ui.separator();
        self.draw_exploration(ui);
    }

    fn draw_exploration(&self, ui: &mut Ui) {
        ui.label(RichText::new("Exploration").strong());
        ui.add(egui::ProgressBar::new(self.exploration.progress()).text(format!(
            "{} / {} papers",
            self.exploration.papers_explored(),
            CORPUS_SIZE
        )));
        ui.label(format!(
            "Connections discovered: {}",
            self.exploration.connections_discovered()
        ));

        ui.add_space(4.0);
        for achievement in &ACHIEVEMENTS {
            let unlocked = self.exploration.is_unlocked(achievement.id);
            let title = if unlocked {
                RichText::new(achievement.title).color(SELECTED_COLOR).strong()
            } else {
                RichText::new(achievement.title).weak()
            };
            ui.horizontal(|ui| {
                ui.label(title);
                ui.small(format!(
                    "{}/{}",
                    self.exploration
                        .value(achievement.metric)
                        .min(achievement.threshold),
                    achievement.threshold
                ));
            })
            .response
            .on_hover_text(achievement.description);
        }
    }
}
