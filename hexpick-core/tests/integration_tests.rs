//! Integration tests for the picker.
//!
//! These drive a [`ColorPicker`] through the public API the way a front end
//! does: intents in, read-only state out, with the clock passed explicitly.

use hexpick_core::{
    contrast_color, hex_to_rgb, is_valid_hex, normalize_hex, rgb_to_hex, Channel, Clipboard,
    ClipboardError, ColorPicker, HexColor, Intent, MemoryClipboard, PickerConfig, Rgb,
    HEX_FORMAT_MESSAGE,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};

const RESET: Duration = Duration::from_millis(2000);

fn picker_at(hex: &str) -> ColorPicker<StdRng> {
    let config = PickerConfig {
        initial_color: Some(HexColor::parse(hex).unwrap()),
        ..Default::default()
    };
    ColorPicker::with_rng(&config, StdRng::seed_from_u64(0xC0FFEE))
}

/// Clipboard that fails on demand.
struct FlakyClipboard {
    fail: bool,
    inner: MemoryClipboard,
}

impl Clipboard for FlakyClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("access denied".into()));
        }
        self.inner.write_text(text)
    }
}

// ==================== Codec properties ====================

#[test]
fn test_rgb_hex_round_trip_full_range() {
    for r in 0..=255u8 {
        for g in [0u8, 1, 127, 128, 254, 255] {
            for b in [0u8, 15, 16, 200, 255] {
                let hex = rgb_to_hex(r, g, b);
                assert_eq!(hex_to_rgb(&hex), Rgb::new(r, g, b));
            }
        }
    }
}

#[test]
fn test_normalize_properties() {
    for input in ["#ff00aa", "FF00AA", "#Ff00Aa", "0a1b2c", "#ABCDEF"] {
        assert!(is_valid_hex(input));
        let once = normalize_hex(input);
        assert_eq!(normalize_hex(&once), once);
        assert_eq!(once.len(), 7);
        assert!(once.starts_with('#'));
        assert_eq!(once, once.to_lowercase());
    }
}

#[test]
fn test_validation_table() {
    assert!(is_valid_hex("#ff00aa"));
    assert!(is_valid_hex("FF00AA"));
    assert!(!is_valid_hex("#ff00a"));
    assert!(!is_valid_hex("#ff00aag"));
    assert!(!is_valid_hex("zzzzzz"));
    assert!(!is_valid_hex(""));
}

#[test]
fn test_contrast_table() {
    let white = HexColor::parse("#ffffff").unwrap();
    let black = HexColor::parse("#000000").unwrap();
    assert_eq!(contrast_color(&white), black);
    assert_eq!(contrast_color(&black), white);
}

// ==================== Scenarios ====================

#[test]
fn test_scenario_a_valid_text_commits() {
    let mut p = picker_at("#123456");
    assert_eq!(p.state().input_value(), "#123456");

    p.dispatch(Intent::TextInput("#ABCDEF".into()));

    assert_eq!(p.state().color().as_str(), "#abcdef");
    assert_eq!(p.state().input_value(), "#abcdef");
    assert_eq!(p.state().error(), None);
    assert!(!p.state().copied());
}

#[test]
fn test_scenario_b_invalid_text_keeps_color() {
    let mut p = picker_at("#123456");

    p.dispatch(Intent::TextInput("red".into()));

    assert_eq!(p.state().color().as_str(), "#123456");
    assert_eq!(p.state().error(), Some(HEX_FORMAT_MESSAGE));
    assert_eq!(p.state().input_value(), "red");
    // Background keeps following the committed color.
    assert_eq!(p.appearance().background.as_str(), "#123456");
}

#[test]
fn test_scenario_c_slider_sets_red() {
    let mut p = picker_at("#000000");

    p.dispatch(Intent::SliderChange(Channel::Red, 255));

    assert_eq!(p.state().color().as_str(), "#ff0000");
    assert_eq!(p.state().input_value(), "#ff0000");
    let tracks = p.tracks();
    assert_eq!(tracks[0].value, 255);
    assert_eq!(tracks[0].start.as_str(), "#000000");
    assert_eq!(tracks[1].end.as_str(), "#ffff00");
}

#[test]
fn test_scenario_d_copy_then_reset() {
    let mut p = picker_at("#336699");
    let mut clipboard = MemoryClipboard::new();
    let t0 = Instant::now();

    p.copy(&mut clipboard, t0).unwrap();
    assert!(p.state().copied());
    assert_eq!(p.state().copy_label(), "Copied!");
    assert_eq!(clipboard.contents(), Some("#336699"));
    assert_eq!(p.reset_deadline(), Some(t0 + RESET));

    assert!(!p.tick(t0 + Duration::from_millis(1999)));
    assert!(p.state().copied());

    assert!(p.tick(t0 + RESET));
    assert!(!p.state().copied());
    assert_eq!(p.state().copy_label(), "Copy");
}

#[test]
fn test_scenario_e_toggle_twice() {
    let mut p = picker_at("#abcdef");
    p.dispatch(Intent::TextInput("#abc".into()));
    let before = p.state().clone();

    p.dispatch(Intent::ToggleSliders);
    assert!(p.state().show_sliders());
    assert_eq!(p.state().color(), before.color());
    assert_eq!(p.state().input_value(), before.input_value());
    assert_eq!(p.state().error(), before.error());
    assert_eq!(p.state().copied(), before.copied());

    p.dispatch(Intent::ToggleSliders);
    assert_eq!(p.state(), &before);
}

// ==================== Copy debounce and failure ====================

#[test]
fn test_second_copy_extends_indicator() {
    let mut p = picker_at("#336699");
    let mut clipboard = MemoryClipboard::new();
    let t0 = Instant::now();

    p.copy(&mut clipboard, t0).unwrap();
    p.copy(&mut clipboard, t0 + Duration::from_millis(1500)).unwrap();

    // The first arming would have fired here.
    assert!(!p.tick(t0 + Duration::from_millis(2500)));
    assert!(p.state().copied());

    assert!(p.tick(t0 + Duration::from_millis(3500)));
    assert!(!p.state().copied());
    assert_eq!(clipboard.writes().len(), 2);
}

#[test]
fn test_edit_after_copy_hides_indicator_early() {
    let mut p = picker_at("#336699");
    let t0 = Instant::now();
    p.copy(&mut MemoryClipboard::new(), t0).unwrap();

    p.dispatch(Intent::SliderChange(Channel::Blue, 0));
    assert!(!p.state().copied());

    // The pending reset still fires harmlessly.
    assert!(p.tick(t0 + RESET));
    assert!(!p.state().copied());
}

#[test]
fn test_clipboard_failure_then_recovery() {
    let mut p = picker_at("#336699");
    let t0 = Instant::now();
    let mut clipboard = FlakyClipboard {
        fail: true,
        inner: MemoryClipboard::new(),
    };

    assert!(p.copy(&mut clipboard, t0).is_err());
    assert!(!p.state().copied());
    assert_eq!(
        p.state().error(),
        Some("Could not copy #336699 to the clipboard: access denied")
    );
    assert_eq!(p.state().color().as_str(), "#336699");

    clipboard.fail = false;
    p.copy(&mut clipboard, t0).unwrap();
    assert!(p.state().copied());
    assert_eq!(p.state().error(), None);
    assert_eq!(clipboard.inner.contents(), Some("#336699"));
}

// ==================== Random and config ====================

#[test]
fn test_shuffle_sequence_is_seeded() {
    let mut a = picker_at("#000000");
    let mut b = picker_at("#000000");
    for _ in 0..10 {
        assert_eq!(a.shuffle().clone(), b.shuffle().clone());
        assert!(is_valid_hex(a.state().color().as_str()));
        assert_eq!(a.state().input_value(), a.state().color().as_str());
    }
}

#[test]
fn test_config_file_drives_picker() {
    let config = PickerConfig {
        initial_color: Some(HexColor::parse("#0F0F0F").unwrap()),
        show_sliders: true,
        copied_reset_ms: 500,
    };
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string_pretty(&config).unwrap().as_bytes())
        .unwrap();

    let loaded = PickerConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);

    let mut p = ColorPicker::with_rng(&loaded, StdRng::seed_from_u64(1));
    assert_eq!(p.state().color().as_str(), "#0f0f0f");
    assert!(p.state().show_sliders());

    let t0 = Instant::now();
    p.copy(&mut MemoryClipboard::new(), t0).unwrap();
    assert!(p.tick(t0 + Duration::from_millis(500)));
}
