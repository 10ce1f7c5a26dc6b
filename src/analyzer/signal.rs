//! Traffic-light state classification from a detector crop.
//!
//! A traffic light's lamps are vertically stacked red/yellow/green, so the
//! crop is split into three equal-height bands and each band is tested for a
//! dominant hue. This is a best-effort color heuristic feeding a human
//! reviewer, so every degenerate input degrades to [`SignalState::Unknown`]
//! rather than an error.

use ndarray::{ArrayView3, s};

/// Discrete traffic-light state.
///
/// `Unknown` doubles as the low-confidence outcome: too-small crops,
/// missing lights, and ambiguous colors all land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalState {
    /// Red lamp lit
    Red,
    /// Yellow lamp lit
    Yellow,
    /// Green lamp lit
    Green,
    /// No lamp confidently identified
    #[default]
    Unknown,
}

/// Configuration for the signal classifier.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Minimum crop height in pixels; smaller crops classify as `Unknown`.
    pub min_height: usize,
    /// Minimum crop width in pixels; smaller crops classify as `Unknown`.
    pub min_width: usize,
    /// Fraction of a band's pixels that must match its hue range for the
    /// band to count as lit.
    pub activation_ratio: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_height: 30,
            min_width: 10,
            activation_ratio: 0.1,
        }
    }
}

/// Classifies traffic-light crops into a [`SignalState`].
#[derive(Debug, Clone, Default)]
pub struct SignalClassifier {
    config: ClassifierConfig,
}

/// Hue bands on the OpenCV scale (H in [0, 180], S and V in [0, 255]).
#[derive(Debug, Clone, Copy)]
enum HueBand {
    Red,
    Yellow,
    Green,
}

impl HueBand {
    const MIN_SATURATION: f32 = 70.0;
    const MIN_VALUE: f32 = 50.0;

    fn matches(self, h: f32, s: f32, v: f32) -> bool {
        if s < Self::MIN_SATURATION || v < Self::MIN_VALUE {
            return false;
        }
        match self {
            // Red wraps around the hue circle.
            Self::Red => h <= 10.0 || h >= 170.0,
            Self::Yellow => (15.0..=35.0).contains(&h),
            Self::Green => (36.0..=85.0).contains(&h),
        }
    }
}

impl SignalClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify a traffic-light crop, HWC with RGB channel order.
    ///
    /// Bands are evaluated top to bottom with red > yellow > green
    /// precedence; a lit red lamp is the operative signal even if another
    /// band also passes the activation threshold.
    pub fn classify(&self, roi: ArrayView3<u8>) -> SignalState {
        let (h, w, c) = roi.dim();
        if h < self.config.min_height || w < self.config.min_width || c < 3 {
            return SignalState::Unknown;
        }

        let third = h / 3;
        let bands = [
            (0..third, HueBand::Red, SignalState::Red),
            (third..2 * third, HueBand::Yellow, SignalState::Yellow),
            // The green zone takes the remainder rows.
            (2 * third..h, HueBand::Green, SignalState::Green),
        ];

        for (rows, band, state) in bands {
            if self.band_active(roi.slice(s![rows, .., ..]), band) {
                return state;
            }
        }
        SignalState::Unknown
    }

    fn band_active(&self, zone: ArrayView3<u8>, band: HueBand) -> bool {
        let (zh, zw, _) = zone.dim();
        let area = zh * zw;
        if area == 0 {
            return false;
        }

        let mut matching = 0usize;
        for y in 0..zh {
            for x in 0..zw {
                let (h, s, v) = rgb_to_hsv(zone[[y, x, 0]], zone[[y, x, 1]], zone[[y, x, 2]]);
                if band.matches(h, s, v) {
                    matching += 1;
                }
            }
        }
        matching as f32 > area as f32 * self.config.activation_ratio
    }
}

/// RGB to HSV on the OpenCV 8-bit scale: H in [0, 180], S and V in [0, 255].
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max * 255.0;
    let s = if max > 0.0 { delta / max * 255.0 } else { 0.0 };

    if delta <= f32::EPSILON {
        return (0.0, s, v);
    }

    let mut deg = if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta) + 120.0
    } else {
        60.0 * ((r - g) / delta) + 240.0
    };
    if deg < 0.0 {
        deg += 360.0;
    }

    (deg / 2.0, s, v)
}
