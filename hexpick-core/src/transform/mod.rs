//! Values derived from the committed color: contrast and slider tracks.

mod contrast;
mod track;

pub use contrast::{contrast_color, is_light, luminance, Appearance, Glow};
pub use track::{channel_track, channel_tracks, ChannelTrack};
