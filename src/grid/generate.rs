use rand::Rng;

use crate::config::attrs::{SurfaceConfig, Variant};
use crate::foundation::core::{HostSize, Point, Vec2};
use crate::grid::particle::Particle;

/// Entry-delay span, in counter units, for the icon variant's outward ripple.
const ICON_DELAY_SPAN: f64 = 200.0;

/// Tile the host box with particles at the configured gap.
///
/// Cells are placed at `0, gap, 2*gap, ...` while strictly less than each
/// dimension (partial cells at the right/bottom edge are omitted), so the
/// grid always exactly tiles the host's current bounding box. An empty host
/// (or an empty palette, which [`SurfaceConfig::from_attrs`] never produces)
/// yields an empty grid.
pub fn generate_grid(
    config: &SurfaceConfig,
    size: HostSize,
    reduced_motion: bool,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    if size.is_empty() || config.palette.is_empty() {
        return Vec::new();
    }

    let center = size.center();
    let max_distance = size.max_center_distance();
    let speed_step = config.speed_step(reduced_motion);

    let mut particles = Vec::new();
    let mut x = 0.0;
    while x < size.width {
        let mut y = 0.0;
        while y < size.height {
            let color = config.palette[rng.random_range(0..config.palette.len())];
            let distance_ratio = distance_to(center, x, y) / max_distance;

            let entry_delay = if !reduced_motion && config.variant == Variant::Icon {
                distance_ratio * ICON_DELAY_SPAN
            } else {
                0.0
            };

            particles.push(Particle::new(
                x,
                y,
                color,
                speed_step,
                entry_delay,
                distance_ratio,
                config.pixel_size,
                rng,
            ));
            y += config.gap;
        }
        x += config.gap;
    }
    particles
}

fn distance_to(center: Point, x: f64, y: f64) -> f64 {
    Vec2::new(x - center.x, y - center.y).hypot()
}

#[cfg(test)]
#[path = "../../tests/unit/grid/generate.rs"]
mod tests;
