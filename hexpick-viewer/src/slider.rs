//! Channel slider with a gradient track.

use egui::{Color32, Mesh, Pos2, Rect, Response, Sense, Shape, Stroke, Ui, Vec2};
use hexpick_core::ChannelTrack;

use crate::theme;

/// Draw one channel slider. Returns the new value if the user moved it.
pub fn channel_slider(
    ui: &mut Ui,
    track: &ChannelTrack,
    foreground: Color32,
    background: Color32,
) -> Option<u8> {
    let height = theme::THUMB_RADIUS * 2.0 + 4.0;
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), height),
        Sense::click_and_drag(),
    );

    let inset = theme::THUMB_RADIUS;
    let track_rect = Rect::from_center_size(
        rect.center(),
        Vec2::new(rect.width() - inset * 2.0, theme::TRACK_HEIGHT),
    );

    let new_value = pointer_value(&response, track_rect).filter(|&v| v != track.value);
    let shown = new_value.unwrap_or(track.value);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.add(gradient(
            track_rect,
            theme::color32(&track.start),
            theme::color32(&track.end),
        ));

        let t = f32::from(shown) / 255.0;
        let center = Pos2::new(track_rect.left() + t * track_rect.width(), rect.center().y);
        let radius = if response.hovered() || response.dragged() {
            theme::THUMB_RADIUS * 1.2
        } else {
            theme::THUMB_RADIUS
        };
        painter.circle(center, radius, foreground, Stroke::new(2.0, background));
    }

    new_value
}

/// Channel value under the pointer while clicking or dragging.
fn pointer_value(response: &Response, track: Rect) -> Option<u8> {
    if !(response.dragged() || response.clicked()) {
        return None;
    }
    let pos = response.interact_pointer_pos()?;
    let t = ((pos.x - track.left()) / track.width()).clamp(0.0, 1.0);
    Some((t * 255.0).round() as u8)
}

/// Horizontal two-stop gradient filling `rect`.
fn gradient(rect: Rect, left: Color32, right: Color32) -> Shape {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    Shape::mesh(mesh)
}
