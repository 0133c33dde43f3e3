pub use kurbo::{Point, Rect, Vec2};

/// Target interval between accepted update ticks, in milliseconds (~60/s).
pub const TICK_INTERVAL_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Content-box size of the host container, in device-independent units.
pub struct HostSize {
    /// Host width.
    pub width: f64,
    /// Host height.
    pub height: f64,
}

impl HostSize {
    /// Build a host size; negative dimensions are treated as zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// True when either dimension is zero (host not laid out yet).
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Geometric center of the host box.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center to the farthest corner.
    pub fn max_center_distance(self) -> f64 {
        Vec2::new(self.width / 2.0, self.height / 2.0).hypot()
    }
}

/// Straight-alpha RGBA8 color as stored in the configured palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight, not premultiplied).
    pub a: u8,
}

impl Rgba8 {
    /// Build an opaque color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to premultiplied RGBA8, folding in an extra alpha factor
    /// (the context's effective global alpha, clamped to `[0, 1]`).
    pub fn to_premul(self, extra_alpha: f64) -> [u8; 4] {
        let extra = extra_alpha.clamp(0.0, 1.0);
        let a = ((f64::from(self.a) * extra).round() as i32).clamp(0, 255) as u8;

        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [premul(self.r, a), premul(self.g, a), premul(self.b, a), a]
    }
}
