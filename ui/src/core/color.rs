//! RGB samples and the color metrics derived from them on the client.

use serde::{Deserialize, Serialize};

/// One sampled color. Serialized as a `[r, g, b]` array like the published data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    pub fn r(self) -> u8 {
        self.0
    }

    pub fn g(self) -> u8 {
        self.1
    }

    pub fn b(self) -> u8 {
        self.2
    }

    /// Lowercase, zero-padded hex digits without the leading `#`.
    pub fn hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// CSS color literal (`#rrggbb`).
    pub fn css(self) -> String {
        format!("#{}", self.hex())
    }

    /// Hasler–Süsstrunk style opponent-channel magnitude.
    pub fn colorfulness(self) -> f64 {
        let (r, g, b) = (self.0 as f64, self.1 as f64, self.2 as f64);
        let rg = (r - g).abs();
        let yb = (0.5 * (r + g) - b).abs();
        (rg * rg + yb * yb).sqrt()
    }

    pub fn chroma(self) -> f64 {
        let max = self.0.max(self.1).max(self.2);
        let min = self.0.min(self.1).min(self.2);
        (max - min) as f64
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Swatch color for a named color bucket of the distribution chart.
/// Unknown names are passed through so CSS can still try to resolve them.
pub fn named_swatch(name: &str) -> String {
    let known = match name {
        "pink" => "#FFC0CB",
        "black" => "#000000",
        "brown" => "#A52A2A",
        "gray" => "#808080",
        "blue" => "#0000FF",
        "white" => "#FFFFFF",
        "green" => "#008000",
        "yellow" => "#FFFF00",
        "orange" => "#FFA500",
        "red" => "#FF0000",
        "purple" => "#800080",
        other => return other.to_string(),
    };
    known.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Brightness,
    Saturation,
}

/// Verbal tier of a 0..100 metric; the UI maps each tier to a localized note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricNote {
    DarkAndMoody,
    DimLight,
    ModeratelyBright,
    VeryBright,
    AlmostGreyscale,
    MutedColors,
    Balanced,
    Vibrant,
    VerySaturated,
    Monochromatic,
    Subtle,
    HighlyColorful,
}

pub fn metric_description(value: f64, kind: MetricKind) -> MetricNote {
    match kind {
        MetricKind::Brightness => {
            if value < 30.0 {
                MetricNote::DarkAndMoody
            } else if value < 50.0 {
                MetricNote::DimLight
            } else if value < 70.0 {
                MetricNote::ModeratelyBright
            } else {
                MetricNote::VeryBright
            }
        }
        MetricKind::Saturation => {
            if value < 20.0 {
                MetricNote::AlmostGreyscale
            } else if value < 40.0 {
                MetricNote::MutedColors
            } else if value < 60.0 {
                MetricNote::Balanced
            } else if value < 80.0 {
                MetricNote::Vibrant
            } else {
                MetricNote::VerySaturated
            }
        }
    }
}

pub fn colorfulness_description(value: f64) -> MetricNote {
    if value < 20.0 {
        MetricNote::Monochromatic
    } else if value < 40.0 {
        MetricNote::Subtle
    } else if value < 60.0 {
        MetricNote::Balanced
    } else if value < 80.0 {
        MetricNote::Vibrant
    } else {
        MetricNote::HighlyColorful
    }
}
