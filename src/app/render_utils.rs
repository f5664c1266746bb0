use eframe::egui::{Color32, Painter, Pos2, Rect};
use paper_universe::util::{parse_hex_rgb, stable_phase};

pub(super) const SELECTED_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
pub(super) const CLUSTER_COLOR: Color32 = Color32::from_rgb(156, 39, 176);

const BACKDROP_STARS: usize = 220;

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Category colour; unknown strings fall back to a neutral grey.
pub(super) fn hex_color(color: &str) -> Color32 {
    parse_hex_rgb(color)
        .map(|[r, g, b]| Color32::from_rgb(r, g, b))
        .unwrap_or(Color32::from_gray(180))
}

/// Night sky with a fixed sprinkle of faint background stars that drift
/// slowly with the camera yaw.
pub(super) fn draw_background(painter: &Painter, rect: Rect, yaw: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(6, 8, 18));

    for index in 0..BACKDROP_STARS {
        let seed = format!("backdrop-{index}");
        let u = stable_phase(&seed);
        let v = stable_phase(&format!("{seed}-v"));
        let twinkle = stable_phase(&format!("{seed}-t"));

        let x = (u + yaw * 0.02).rem_euclid(1.0);
        let position = Pos2::new(
            rect.left() + x * rect.width(),
            rect.top() + v * rect.height(),
        );
        let alpha = 40.0 + twinkle * 90.0;
        painter.circle_filled(
            position,
            0.6 + twinkle * 0.9,
            Color32::from_rgba_unmultiplied(200, 210, 255, alpha as u8),
        );
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let min_x = start.x.min(end.x) - padding;
    let max_x = start.x.max(end.x) + padding;
    let min_y = start.y.min(end.y) - padding;
    let max_y = start.y.max(end.y) + padding;

    !(max_x < rect.left() || min_x > rect.right() || max_y < rect.top() || min_y > rect.bottom())
}

/// On-screen star radius from the paper's size weight and its depth.
pub(super) fn star_radius(size: f32, scale: f32, reference_scale: f32) -> f32 {
    (size * 3.2 * (scale / reference_scale)).clamp(1.2, 24.0)
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn hex_colors_parse_or_fall_back() {
        assert_eq!(hex_color("#EF4444"), Color32::from_rgb(0xEF, 0x44, 0x44));
        assert_eq!(hex_color("red"), Color32::from_gray(180));
    }

    #[test]
    fn blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
    }

    #[test]
    fn visibility_checks() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        assert!(circle_visible(rect, pos2(-2.0, 50.0), 3.0));
        assert!(!circle_visible(rect, pos2(-10.0, 50.0), 3.0));
        assert!(edge_visible(rect, pos2(-50.0, 50.0), pos2(150.0, 50.0), 0.0));
        assert!(!edge_visible(rect, pos2(-50.0, -50.0), pos2(-10.0, -10.0), 1.0));
    }

    #[test]
    fn star_radius_is_clamped() {
        assert_eq!(star_radius(0.0, 1.0, 1.0), 1.2);
        assert_eq!(star_radius(100.0, 1.0, 1.0), 24.0);
    }
}
