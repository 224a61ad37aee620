use std::sync::RwLock;

use tracing::{info, warn};

use crate::modules::content::application::ports::outgoing::ThemeApplier;

/// Keeps the `--accent` CSS variable value (space-separated RGB channels)
/// that the public page reads from `GET /api/theme`.
#[derive(Debug, Default)]
pub struct AccentVariable {
    channels: RwLock<Option<String>>,
}

impl AccentVariable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.channels.read().ok().and_then(|c| c.clone())
    }
}

impl ThemeApplier for AccentVariable {
    fn apply_accent(&self, hex_color: &str) {
        let Some(channels) = hex_to_rgb_channels(hex_color) else {
            warn!(accent = hex_color, "Ignoring accent colour that is not a hex colour");
            return;
        };

        if let Ok(mut current) = self.channels.write() {
            if current.as_deref() != Some(channels.as_str()) {
                info!(accent = hex_color, %channels, "Accent colour applied");
                *current = Some(channels);
            }
        }
    }
}

/// `#14b8a6` → `"20 184 166"`; short form `#fff` is expanded first.
pub fn hex_to_rgb_channels(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    Some(format!("{r} {g} {b}"))
}
