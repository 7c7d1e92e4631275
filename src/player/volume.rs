//! Volume helpers shared by the controller and the view.

pub const MAX_VOLUME: u8 = 100;
pub const DEFAULT_VOLUME: u8 = 100;

/// Clamp any requested value onto the 0-100 slider scale.
pub fn clamp_volume(value: i64) -> u8 {
    value.clamp(0, MAX_VOLUME as i64) as u8
}

/// Slider values arrive as text; anything unparsable is ignored.
pub fn parse_volume(raw: &str) -> Option<u8> {
    let value = raw.trim().parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(clamp_volume(value.round() as i64))
}

/// Gain applied to the audio element (0.0-1.0).
pub fn volume_to_gain(volume: u8) -> f64 {
    f64::from(volume.min(MAX_VOLUME)) / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeLevel {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeLevel {
    pub fn from_value(value: u8) -> Self {
        match value {
            0 => Self::Muted,
            1..=33 => Self::Low,
            34..=66 => Self::Medium,
            _ => Self::High,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Muted => "muted",
            Self::Low => "volume-low",
            Self::Medium => "volume-med",
            Self::High => "volume-high",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Muted => "./svg/mute.svg",
            _ => "./svg/volume.svg",
        }
    }
}

/// Background for the range input: accent up to the value, track after it.
pub fn slider_fill(value: u8) -> String {
    let v = value.min(MAX_VOLUME);
    format!("linear-gradient(90deg, var(--accent, #1DB954) {v}%, #444 {v}%)")
}
