//! Gradient tracks for the per-channel sliders.

use serde::Serialize;

use crate::model::{Channel, HexColor};

/// A slider track: the current color with one channel swept from 0 to 255.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelTrack {
    pub channel: Channel,
    /// Color at the left end (channel = 0).
    pub start: HexColor,
    /// Color at the right end (channel = 255).
    pub end: HexColor,
    /// Current channel value, the thumb position.
    pub value: u8,
}

/// Track for one channel of `color`.
pub fn channel_track(color: &HexColor, channel: Channel) -> ChannelTrack {
    let rgb = color.to_rgb();
    ChannelTrack {
        channel,
        start: rgb.with_channel(channel, 0).to_hex(),
        end: rgb.with_channel(channel, 255).to_hex(),
        value: rgb.channel(channel),
    }
}

/// Tracks for all three channels in slider order.
pub fn channel_tracks(color: &HexColor) -> [ChannelTrack; 3] {
    Channel::ALL.map(|channel| channel_track(color, channel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_green_track() {
        let color = HexColor::parse("#102030").unwrap();
        let track = channel_track(&color, Channel::Green);
        assert_eq!(
            track,
            ChannelTrack {
                channel: Channel::Green,
                start: HexColor::parse("#100030").unwrap(),
                end: HexColor::parse("#10ff30").unwrap(),
                value: 0x20,
            }
        );
    }

    #[test]
    fn test_tracks_cover_all_channels() {
        let color = HexColor::parse("#ff8000").unwrap();
        let values: Vec<u8> = channel_tracks(&color).iter().map(|t| t.value).collect();
        assert_eq!(values, vec![255, 128, 0]);
    }
}
