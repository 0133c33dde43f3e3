use crate::config::color::parse_palette;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{PixelgridError, PixelgridResult};
use crate::render::context::BlendMode;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declarative attribute set as found on the host element, raw and untrusted.
///
/// Field names mirror the host-side `data-*` attributes. Missing or invalid
/// values fall back to documented defaults and are clamped into valid ranges
/// rather than rejected; see [`SurfaceConfig::from_attrs`].
pub struct SurfaceAttrs {
    /// Comma-separated palette of hex colors.
    #[serde(default)]
    pub colors: Option<String>,
    /// Grid cell spacing in device-independent units.
    #[serde(default)]
    pub gap: Option<String>,
    /// Shimmer speed, 0-100.
    #[serde(default)]
    pub speed: Option<String>,
    /// Appearance variant (`default` or `icon`).
    #[serde(default)]
    pub variant: Option<String>,
    /// Global draw opacity, 0-1.
    #[serde(default)]
    pub opacity: Option<String>,
    /// Compositing mode (`normal` or `additive`).
    #[serde(default)]
    pub blend: Option<String>,
    /// Maximum particle extent before vignette scaling, 1-10.
    #[serde(default)]
    pub size: Option<String>,
}

impl SurfaceAttrs {
    /// Deserialize an attribute object from JSON (the page generator stamps
    /// surfaces into pages as JSON descriptions).
    pub fn from_json(json: &str) -> PixelgridResult<Self> {
        serde_json::from_str(json).map_err(|e| PixelgridError::serde(e.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Appearance variant of a surface.
pub enum Variant {
    /// Uniform fade-in across the grid.
    #[default]
    Default,
    /// Outward ripple: entry stagger proportional to distance from center.
    Icon,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Validated, clamped configuration, fixed for the lifetime of a surface.
pub struct SurfaceConfig {
    /// Palette particles pick their color from (uniform random choice).
    pub palette: Vec<Rgba8>,
    /// Cell spacing, clamped to `[4, 50]`.
    pub gap: f64,
    /// Shimmer speed, clamped to `[0, 100]`.
    pub speed: f64,
    /// Appearance variant.
    pub variant: Variant,
    /// Global draw opacity, clamped to `[0, 1]`.
    pub opacity: f64,
    /// Compositing mode for the draw pass.
    pub blend: BlendMode,
    /// Maximum particle extent before vignette scaling, clamped to `[1, 10]`.
    pub pixel_size: f64,
}

const DEFAULT_GAP: f64 = 5.0;
const DEFAULT_SPEED: f64 = 35.0;
const DEFAULT_OPACITY: f64 = 1.0;
const DEFAULT_PIXEL_SIZE: f64 = 3.0;

impl SurfaceConfig {
    /// Resolve raw attributes into a clamped configuration.
    ///
    /// Follows the host-attribute resolution rules exactly: `gap` and `speed`
    /// treat `0` and non-numbers as missing, `opacity` and `size` honor `0`
    /// and only fall back on non-numbers, and an unparseable palette falls
    /// back to the default three-color set.
    pub fn from_attrs(attrs: &SurfaceAttrs) -> Self {
        let palette = attrs
            .colors
            .as_deref()
            .and_then(parse_palette)
            .unwrap_or_else(default_palette);

        let gap = match parse_number(attrs.gap.as_deref()) {
            Some(v) if v != 0.0 => v,
            _ => DEFAULT_GAP,
        }
        .clamp(4.0, 50.0);

        let speed = match parse_number(attrs.speed.as_deref()) {
            Some(v) if v != 0.0 => v,
            _ => DEFAULT_SPEED,
        }
        .clamp(0.0, 100.0);

        let variant = match attrs.variant.as_deref().map(str::trim) {
            Some("icon") => Variant::Icon,
            _ => Variant::Default,
        };

        let opacity = parse_number(attrs.opacity.as_deref())
            .unwrap_or(DEFAULT_OPACITY)
            .clamp(0.0, 1.0);

        let blend = match attrs.blend.as_deref().map(str::trim) {
            Some("additive") => BlendMode::Additive,
            _ => BlendMode::Normal,
        };

        let pixel_size = parse_number(attrs.size.as_deref())
            .unwrap_or(DEFAULT_PIXEL_SIZE)
            .clamp(1.0, 10.0);

        Self {
            palette,
            gap,
            speed,
            variant,
            opacity,
            blend,
            pixel_size,
        }
    }

    /// Per-tick size increment base derived from `speed`, zeroed when the
    /// reduced-motion preference is set.
    pub fn speed_step(&self, reduced_motion: bool) -> f64 {
        if reduced_motion {
            0.0
        } else {
            self.speed * 0.001
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::from_attrs(&SurfaceAttrs::default())
    }
}

fn default_palette() -> Vec<Rgba8> {
    vec![
        Rgba8::rgb(0x32, 0xfe, 0xff),
        Rgba8::rgb(0xff, 0xff, 0xff),
        Rgba8::rgb(0x7d, 0xd3, 0xfc),
    ]
}

/// Host-attribute number coercion: empty strings coerce to `0`, anything
/// non-numeric is treated as missing.
fn parse_number(raw: Option<&str>) -> Option<f64> {
    let s = raw?.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/config/attrs.rs"]
mod tests;
