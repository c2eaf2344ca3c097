//! The color picker component: one owned [`UiState`] plus the resources the
//! handlers need (randomness, the copy reset timer).

use std::time::{Duration, Instant};

use rand::rngs::ThreadRng;
use rand::Rng;

use super::timer::{ResetTimer, TimerToken};
use super::ui::UiState;
use crate::clipboard::Clipboard;
use crate::config::PickerConfig;
use crate::error::Result;
use crate::generator::generate_random_hex;
use crate::model::{Channel, HexColor};
use crate::transform::{channel_tracks, Appearance, ChannelTrack};

/// A user intent that needs no external capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    TextInput(String),
    SliderChange(Channel, u8),
    Shuffle,
    ToggleSliders,
}

/// Owns the single UI state record and applies user intents to it.
pub struct ColorPicker<R = ThreadRng> {
    state: UiState,
    rng: R,
    reset: ResetTimer,
    copied_reset: Duration,
}

impl ColorPicker<ThreadRng> {
    /// Create a picker backed by the thread-local RNG.
    pub fn new(config: &PickerConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> ColorPicker<R> {
    /// Create a picker with an explicit randomness source.
    pub fn with_rng(config: &PickerConfig, mut rng: R) -> Self {
        let color = config
            .initial_color
            .clone()
            .unwrap_or_else(|| generate_random_hex(&mut rng));
        let mut state = UiState::new(color);
        state.set_show_sliders(config.show_sliders);

        tracing::debug!("Picker starts at {}", state.color());

        Self {
            state,
            rng,
            reset: ResetTimer::new(),
            copied_reset: config.copied_reset(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Derived presentation of the current color.
    pub fn appearance(&self) -> Appearance {
        self.state.appearance()
    }

    /// Slider tracks for the current color.
    pub fn tracks(&self) -> [ChannelTrack; 3] {
        channel_tracks(self.state.color())
    }

    /// Apply a synchronous intent.
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::TextInput(raw) => self.state.text_input(&raw),
            Intent::SliderChange(channel, value) => self.state.slider_change(channel, value),
            Intent::Shuffle => {
                self.shuffle();
            }
            Intent::ToggleSliders => self.state.toggle_sliders(),
        }
    }

    /// Jump to a new random color.
    pub fn shuffle(&mut self) -> &HexColor {
        let color = generate_random_hex(&mut self.rng);
        tracing::debug!("Shuffled to {}", color);
        self.state.set_color(color);
        self.state.color()
    }

    /// Copy the committed color to `clipboard`.
    ///
    /// On success the copy indicator turns on and the reset timer is
    /// re-armed; the returned token identifies that arming. On failure the
    /// indicator turns off, the pending reset is dropped and the reason is
    /// shown as the state's error until the next edit.
    pub fn copy<C>(&mut self, clipboard: &mut C, now: Instant) -> Result<TimerToken>
    where
        C: Clipboard + ?Sized,
    {
        let text = self.state.color().as_str().to_string();
        match clipboard.write_text(&text) {
            Ok(()) => {
                self.state.mark_copied();
                let token = self.reset.arm(now, self.copied_reset);
                tracing::info!("Copied {}", text);
                Ok(token)
            }
            Err(e) => {
                tracing::warn!("Failed to copy {}: {}", text, e);
                self.reset.cancel();
                self.state.copy_failed(&e.to_string());
                Err(e.into())
            }
        }
    }

    /// Advance the clock. Clears the copy indicator once its deadline passes.
    /// Returns true if the state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.reset.poll(now) {
            self.state.clear_copied();
            true
        } else {
            false
        }
    }

    /// Fire a specific reset arming, for schedulers that sleep per token.
    /// Stale tokens leave the state alone.
    pub fn fire_reset(&mut self, token: TimerToken) -> bool {
        if self.reset.fire(token) {
            self.state.clear_copied();
            true
        } else {
            false
        }
    }

    /// When the copy indicator will turn off, if it is scheduled to.
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset.deadline()
    }

    /// Time until the copy indicator turns off, zero if overdue.
    pub fn reset_remaining(&self, now: Instant) -> Option<Duration> {
        self.reset.remaining(now)
    }
}
