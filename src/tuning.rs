//! Data-driven tuning
//!
//! Every magic number lives here with a default from `consts`. The page can
//! override any subset through a JSON blob in the `data-fx-tuning` attribute
//! on `<body>`; unknown or malformed input falls back to the defaults.

use serde::Deserialize;

use crate::consts;

/// Particle field tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldTuning {
    /// Viewport area per particle
    pub density_divisor: f32,
    /// Pointer repulsion radius
    pub repulse_radius: f32,
    /// Repulsion step per axis component
    pub repulse_step: f32,
    /// Particle radius range
    pub min_radius: f32,
    pub max_radius: f32,
    /// Velocity component magnitude bound
    pub max_speed: f32,
    /// Squared-distance scale for link opacity falloff
    pub link_falloff: f32,
    /// Link cutoff divisor: cutoff = (w/d)*(h/d)
    pub link_cell_divisor: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            density_divisor: consts::PARTICLE_DENSITY_DIVISOR,
            repulse_radius: consts::REPULSE_RADIUS,
            repulse_step: consts::REPULSE_STEP,
            min_radius: consts::PARTICLE_MIN_RADIUS,
            max_radius: consts::PARTICLE_MAX_RADIUS,
            max_speed: consts::PARTICLE_MAX_SPEED,
            link_falloff: consts::LINK_FALLOFF,
            link_cell_divisor: consts::LINK_CELL_DIVISOR,
        }
    }
}

/// Carousel tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CarouselTuning {
    /// Wheel coalescing window
    pub wheel_window_ms: f64,
    /// Horizontal displacement before a swipe navigates
    pub swipe_threshold: f32,
    /// Settle delay before new navigation is accepted
    pub settle_ms: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            wheel_window_ms: consts::WHEEL_WINDOW_MS,
            swipe_threshold: consts::SWIPE_THRESHOLD,
            settle_ms: consts::SETTLE_MS,
        }
    }
}

/// Ambient effect tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EffectsTuning {
    /// Typewriter cadence
    pub type_interval_ms: f64,
    /// Maximum card tilt, degrees
    pub tilt_max_deg: f32,
    /// Scale applied while tilted
    pub tilt_scale: f32,
    /// Cursor outline trailing time
    pub cursor_ease_ms: f32,
    /// Per-item reveal stagger
    pub reveal_stagger_ms: f64,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        Self {
            type_interval_ms: consts::TYPE_INTERVAL_MS,
            tilt_max_deg: consts::TILT_MAX_DEG,
            tilt_scale: consts::TILT_SCALE,
            cursor_ease_ms: consts::CURSOR_EASE_MS,
            reveal_stagger_ms: consts::REVEAL_STAGGER_MS,
        }
    }
}

/// Complete tuning set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub field: FieldTuning,
    pub carousel: CarouselTuning,
    pub effects: EffectsTuning,
}

impl Tuning {
    /// Parse overrides from the page. Malformed JSON keeps the defaults and
    /// logs once; these are decorations, not configuration worth failing on.
    pub fn from_attr(json: Option<&str>) -> Self {
        match json {
            None => Self::default(),
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|err| {
                log::warn!("ignoring malformed tuning attribute: {err}");
                Self::default()
            }),
        }
    }
}
