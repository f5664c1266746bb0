use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};
use paper_universe::universe::Position;
use paper_universe::util::{stable_phase, truncate_chars};

use super::super::camera::Camera;
use super::super::render_utils::{
    CLUSTER_COLOR, SELECTED_COLOR, blend_color, circle_visible, dim_color, draw_background,
    edge_visible, hex_color, star_radius, with_alpha,
};
use super::super::{ProjectedStar, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        if self.scene_dirty {
            self.rebuild_scene();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.camera.yaw);

        self.handle_scene_zoom(ui, &response);
        self.handle_scene_orbit(&response);

        let (time, frame_delta_seconds) = ui.input(|input| {
            (
                input.time,
                input.stable_dt.clamp(1.0 / 240.0, 1.0 / 20.0),
            )
        });
        let interaction_active = response.dragged();
        let rotating = self
            .camera
            .tick(frame_delta_seconds, self.selected.is_some() || interaction_active);
        if rotating || interaction_active {
            ui.ctx().request_repaint();
        }

        if self.scene.filtered.is_empty() {
            self.visible_star_count = 0;
            self.visible_connection_count = 0;
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No papers match the current filters.",
                FontId::proportional(16.0),
                Color32::from_gray(210),
            );
            return;
        }

        let camera = self.camera;
        let reference_scale = Camera {
            distance: Camera::REFERENCE_DISTANCE,
            ..camera
        }
        .project(rect, Position::ORIGIN)
        .map(|projection| projection.scale)
        .unwrap_or(1.0);

        let mut scratch = std::mem::take(&mut self.scene.scratch);
        scratch.projected.clear();
        let mut pulsing_in_view = false;
        for &index in &self.scene.filtered {
            let paper = &self.corpus[index];
            let projected = camera
                .project(rect, paper.position)
                .map(|projection| {
                    let mut radius = star_radius(paper.size, projection.scale, reference_scale);
                    if paper.pulsing {
                        let phase = stable_phase(&paper.id) * TAU;
                        radius *= 1.0 + 0.1 * (time as f32 * 2.0 + phase).sin();
                    }
                    ProjectedStar {
                        screen: projection.screen,
                        radius,
                        depth: projection.depth,
                    }
                })
                .filter(|star| circle_visible(rect, star.screen, star.radius));
            pulsing_in_view |= paper.pulsing && projected.is_some();
            scratch.projected.push(projected);
        }

        let hovered = Self::hovered_slot(ui, rect, &scratch.projected);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            Some(
                hovered
                    .and_then(|slot| self.scene_paper(slot))
                    .map(|paper| paper.id.clone()),
            )
        } else {
            None
        };

        if self.show_clusters {
            let spoke = Stroke::new(0.6, with_alpha(CLUSTER_COLOR, 0.14));
            for cluster in &self.scene.clusters {
                let Some(center) = camera.project(rect, cluster.centroid) else {
                    continue;
                };
                for member in &cluster.preview {
                    if let Some(end) = camera.project(rect, member.position) {
                        painter.line_segment([center.screen, end.screen], spoke);
                    }
                }
                painter.circle_filled(
                    center.screen,
                    (center.scale * 1.5).clamp(2.0, 6.0),
                    with_alpha(CLUSTER_COLOR, 0.4),
                );
            }
        }

        let selection_active = self.highlight.selected().is_some();
        let mut visible_connection_count = 0usize;
        if self.show_connections {
            for connection in &self.scene.connections {
                if !self.highlight.is_connection_visible(connection) {
                    continue;
                }

                let (Some(start), Some(end)) = (
                    camera.project(rect, connection.from),
                    camera.project(rect, connection.to),
                ) else {
                    continue;
                };
                if !edge_visible(rect, start.screen, end.screen, 2.0) {
                    continue;
                }

                let (line_width, line_color) = if selection_active {
                    (
                        1.6,
                        with_alpha(SELECTED_COLOR, 0.35 + connection.strength * 0.5),
                    )
                } else {
                    (
                        0.7,
                        Color32::from_rgba_unmultiplied(
                            120,
                            160,
                            255,
                            (18.0 + connection.strength * 50.0) as u8,
                        ),
                    )
                };
                painter.line_segment([start.screen, end.screen], Stroke::new(line_width, line_color));
                visible_connection_count += 1;
            }
        }
        self.visible_connection_count = visible_connection_count;

        scratch.draw_order.clear();
        scratch.draw_order.extend(
            scratch
                .projected
                .iter()
                .enumerate()
                .filter_map(|(slot, star)| star.map(|_| slot)),
        );
        let depth_of = |slot: usize| {
            scratch.projected[slot]
                .map(|star| star.depth)
                .unwrap_or_default()
        };
        let mut draw_order = std::mem::take(&mut scratch.draw_order);
        draw_order.sort_by(|a, b| depth_of(*b).total_cmp(&depth_of(*a)));

        let mut selection_animating = false;
        for &slot in &draw_order {
            let (Some(star), Some(paper)) = (scratch.projected[slot], self.scene_paper(slot)) else {
                continue;
            };

            let is_selected = self.highlight.is_selected(&paper.id);
            let is_highlighted = self.highlight.is_highlighted(&paper.id);
            let is_hovered = hovered == Some(slot);

            let base_color = with_alpha(hex_color(&paper.color), 0.35 + paper.brightness * 0.65);
            let unselected_color = if is_hovered {
                blend_color(base_color, Color32::WHITE, 0.45)
            } else if is_highlighted {
                blend_color(base_color, Color32::WHITE, 0.30)
            } else if selection_active {
                dim_color(base_color, 0.40)
            } else {
                base_color
            };

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("paper-selection", paper.id.as_str())),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }
            let color = blend_color(unselected_color, SELECTED_COLOR, selection_mix);

            painter.circle_filled(
                star.screen,
                star.radius * 2.2,
                with_alpha(color, 0.06 + paper.brightness * 0.08),
            );
            painter.circle_filled(star.screen, star.radius, color);

            if is_highlighted {
                painter.circle_stroke(
                    star.screen,
                    star.radius + 2.0,
                    Stroke::new(1.2, with_alpha(SELECTED_COLOR, 0.7)),
                );
            }
            if selection_mix > 0.0 {
                let halo_strength = (selection_mix * (1.0 - selection_mix) * 4.0).clamp(0.0, 1.0);
                let halo_alpha = (30.0 + (halo_strength * 145.0)) as u8;
                painter.circle_stroke(
                    star.screen,
                    star.radius + 4.0 + ((1.0 - selection_mix) * 6.0),
                    Stroke::new(
                        1.0 + (halo_strength * 1.6),
                        Color32::from_rgba_unmultiplied(245, 206, 93, halo_alpha),
                    ),
                );
            }

            let should_draw_label =
                is_selected || is_hovered || (is_highlighted && star.radius > 3.0);
            if should_draw_label {
                painter.text(
                    star.screen + vec2(star.radius + 5.0, 0.0),
                    Align2::LEFT_CENTER,
                    truncate_chars(&paper.title, 48),
                    FontId::proportional(12.0),
                    Color32::from_gray(238),
                );
            }
        }
        self.visible_star_count = draw_order.len();
        scratch.draw_order = draw_order;

        if let Some(paper) = hovered.and_then(|slot| self.scene_paper(slot)) {
            let panel_text = format!(
                "{}  |  {}  |  {}  |  {} citations  |  impact {}",
                paper.id, paper.year, paper.category, paper.citations, paper.impact_score
            );
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                panel_text,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        self.scene.scratch = scratch;

        if selection_animating || pulsing_in_view {
            ui.ctx().request_repaint();
        }

        if let Some(selected) = pending_selection {
            self.set_selected(selected, time);
        }
    }
}
