use eframe::egui::{self, Align, Context, Layout, RichText};

use super::super::ViewModel;
use super::super::render_utils::SELECTED_COLOR;

const UNLOCK_TOAST_SECS: f64 = 4.0;

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        if self.scene_dirty {
            self.rebuild_scene();
        }

        let now = ctx.input(|input| input.time);
        if self
            .recent_unlock
            .as_ref()
            .is_some_and(|unlock| now - unlock.shown_at > UNLOCK_TOAST_SECS)
        {
            self.recent_unlock = None;
        }

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Paper Universe");
                    ui.separator();
                    ui.label(format!("papers: {}", self.corpus.len()));
                    ui.label(format!("matching: {}", self.scene.filtered.len()));
                    ui.label(format!("connections: {}", self.scene.connections.len()));
                    ui.label(format!("clusters: {}", self.scene.clusters.len()));
                    if ui.button("Reshuffle connections").clicked() {
                        self.mark_filters_changed();
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!(
                            "{} stars / {} links in view",
                            self.visible_star_count, self.visible_connection_count
                        ));
                        if let Some(unlock) = &self.recent_unlock {
                            ui.label(
                                RichText::new(format!(
                                    "Achievement unlocked: {}",
                                    unlock.achievement.title
                                ))
                                .color(SELECTED_COLOR)
                                .strong(),
                            )
                            .on_hover_text(unlock.achievement.description);
                            ui.ctx().request_repaint();
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| self.draw_controls(ui));
            });

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("details_scroll")
                    .show(ui, |ui| self.draw_details(ui));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_scene(ui));
    }
}
