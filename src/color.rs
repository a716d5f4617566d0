use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// RGBA color with 8-bit channels. `alpha == 255` is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    #[serde(default = "opaque_alpha")]
    pub alpha: u8,
}

fn opaque_alpha() -> u8 {
    u8::MAX
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(0x78, 0x7b, 0x86);
    pub const RED: Color = Color::rgb(0xf2, 0x36, 0x45);
    pub const GREEN: Color = Color::rgb(0x08, 0x99, 0x81);
    pub const BLUE: Color = Color::rgb(0x29, 0x62, 0xff);

    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Weighted brightness in `[0, 1]`. Alpha does not contribute.
    #[must_use]
    pub fn luminosity(self) -> f64 {
        (0.299 * f64::from(self.red) + 0.587 * f64::from(self.green) + 0.114 * f64::from(self.blue))
            / 255.0
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    pub fn parse_hex(input: &str) -> TableResult<Self> {
        let digits = input.trim().trim_start_matches('#');
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(TableError::InvalidData(format!(
                "hex color `{input}` contains non-hex characters"
            )));
        }
        let channel = |range: std::ops::Range<usize>| -> TableResult<u8> {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| TableError::InvalidData(format!("invalid hex color `{input}`")))
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(TableError::InvalidData(format!(
                "hex color `{input}` must have 6 or 8 digits"
            ))),
        }
    }
}

/// Na-aware color equality: two unset colors are equal, unset never equals set.
#[must_use]
pub fn colors_equal(a: Option<Color>, b: Option<Color>) -> bool {
    a == b
}

/// Foreground colors picked for readability against a background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastPalette {
    /// Used on backgrounds brighter than the threshold.
    #[serde(default = "default_dark")]
    pub dark: Color,
    /// Used on backgrounds at or below the threshold.
    #[serde(default = "default_light")]
    pub light: Color,
    /// Used when no background is known.
    #[serde(default = "default_neutral")]
    pub neutral: Color,
    #[serde(default = "default_luminosity_threshold")]
    pub luminosity_threshold: f64,
}

fn default_dark() -> Color {
    Color::BLACK
}

fn default_light() -> Color {
    Color::WHITE
}

fn default_neutral() -> Color {
    Color::GRAY
}

fn default_luminosity_threshold() -> f64 {
    0.5
}

impl Default for ContrastPalette {
    fn default() -> Self {
        Self {
            dark: default_dark(),
            light: default_light(),
            neutral: default_neutral(),
            luminosity_threshold: default_luminosity_threshold(),
        }
    }
}

impl ContrastPalette {
    #[must_use]
    pub fn with_dark(mut self, dark: Color) -> Self {
        self.dark = dark;
        self
    }

    #[must_use]
    pub fn with_light(mut self, light: Color) -> Self {
        self.light = light;
        self
    }

    #[must_use]
    pub fn with_neutral(mut self, neutral: Color) -> Self {
        self.neutral = neutral;
        self
    }

    #[must_use]
    pub fn with_luminosity_threshold(mut self, threshold: f64) -> Self {
        self.luminosity_threshold = threshold;
        self
    }

    pub fn validate(self) -> TableResult<Self> {
        let threshold = self.luminosity_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(TableError::InvalidConfig(format!(
                "luminosity threshold must be finite and in [0, 1], got {threshold}"
            )));
        }
        Ok(self)
    }

    /// Picks a readable foreground for `background`.
    #[must_use]
    pub fn contrast_for(self, background: Option<Color>) -> Color {
        match background {
            None => self.neutral,
            Some(color) if color.luminosity() > self.luminosity_threshold => self.dark,
            Some(_) => self.light,
        }
    }
}

/// [`ContrastPalette::contrast_for`] with the default palette.
#[must_use]
pub fn contrast_color(background: Option<Color>) -> Color {
    ContrastPalette::default().contrast_for(background)
}
