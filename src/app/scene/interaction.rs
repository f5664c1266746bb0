use eframe::egui::{self, Rect, Ui};

use super::super::{ProjectedStar, ViewModel};

const HOVER_SLACK: f32 = 3.0;

impl ViewModel {
    pub(in crate::app) fn handle_scene_zoom(&mut self, ui: &Ui, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        self.camera.zoom(scroll);
    }

    pub(in crate::app) fn handle_scene_orbit(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
        {
            self.camera.orbit(response.drag_delta());
        }
    }

    /// Closest star under the pointer, preferring stars nearer the camera
    /// when two overlap at the same distance.
    pub(in crate::app) fn hovered_slot(
        ui: &Ui,
        rect: Rect,
        projected: &[Option<ProjectedStar>],
    ) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        projected
            .iter()
            .enumerate()
            .filter_map(|(slot, star)| {
                let star = (*star)?;
                let distance = star.screen.distance(pointer);
                (distance <= star.radius + HOVER_SLACK).then_some((slot, distance, star.depth))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.2.total_cmp(&b.2)))
            .map(|(slot, _, _)| slot)
    }
}
