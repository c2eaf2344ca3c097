//! Plain-text rendering for the command-line tool.

use hexpick_core::{generate_random_hex, ColorReport, HexColor};
use rand::Rng;

/// Aligned `key  value` lines describing one color.
pub fn render_text(report: &ColorReport) -> String {
    let rgb = report.rgb;
    let tone = if report.is_light { "light" } else { "dark" };
    [
        ("hex", report.hex.to_string()),
        ("rgb", format!("{}, {}, {}", rgb.r, rgb.g, rgb.b)),
        ("luminance", format!("{:.2}", report.luminance)),
        ("tone", tone.to_string()),
        ("contrast", report.contrast.to_string()),
    ]
    .iter()
    .map(|(key, value)| format!("{:<10} {}", key, value))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Draw `count` random colors.
pub fn random_colors<R: Rng>(rng: &mut R, count: usize) -> Vec<HexColor> {
    (0..count).map(|_| generate_random_hex(rng)).collect()
}
