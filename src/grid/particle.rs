use rand::Rng;

use crate::foundation::core::{Rect, Rgba8};
use crate::render::context::RenderContext;

/// Smallest visible extent; shimmer oscillates between this and the target.
pub(crate) const MIN_SIZE: f64 = 0.5;
/// Fixed per-tick size decrement while shrinking (not the randomized rate).
pub(crate) const SHRINK_STEP: f64 = 0.1;
/// Randomized growth-rate range, scaled by the surface speed step.
pub(crate) const GROWTH_RATE_RANGE: std::ops::Range<f64> = 0.1..0.9;
/// Randomized per-tick advance of the entry-delay counter.
pub(crate) const DELAY_COUNTER_STEP_RANGE: std::ops::Range<f64> = 3.0..5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Animation phase of a single grid cell.
pub enum Phase {
    /// Resting state: size is zero and nothing is drawn. Initial and terminal.
    Idle,
    /// Fading in: waiting out the entry delay, then growing toward the target.
    Growing,
    /// Steady-state oscillation between the minimum and target size.
    Shimmering,
    /// Fading out toward zero.
    Shrinking,
}

#[derive(Clone, Debug)]
/// One animated square cell. Owns its size/position/phase state and its draw
/// call; created when the grid is (re)built and discarded wholesale on the
/// next rebuild.
pub struct Particle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) color: Rgba8,
    pub(crate) size: f64,
    /// Randomized steady-state target, in `[MIN_SIZE, max_footprint]`.
    pub(crate) target_max: f64,
    /// Vignette-scaled maximum extent; the cell's draw footprint.
    pub(crate) max_footprint: f64,
    pub(crate) growth_rate: f64,
    pub(crate) entry_delay: f64,
    pub(crate) delay_counter: f64,
    pub(crate) counter_step: f64,
    pub(crate) reverse: bool,
    pub(crate) phase: Phase,
    pub(crate) distance_ratio: f64,
}

impl Particle {
    /// Build one cell at grid position `(x, y)`.
    ///
    /// `speed_step` is the surface-wide per-tick increment base (zero under
    /// reduced motion); `distance_ratio` is the normalized distance from the
    /// surface center in `[0, 1]` and drives both the size-cap vignette
    /// (`1 - ratio^2 * 0.6`) and the draw-time opacity falloff.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f64,
        y: f64,
        color: Rgba8,
        speed_step: f64,
        entry_delay: f64,
        distance_ratio: f64,
        pixel_size: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let growth_rate = rng.random_range(GROWTH_RATE_RANGE) * speed_step;

        let vignette = 1.0 - distance_ratio.powi(2) * 0.6;
        let max_footprint = pixel_size * vignette;
        let target_max = random_in(rng, MIN_SIZE, max_footprint.max(MIN_SIZE));

        Self {
            x,
            y,
            color,
            size: 0.0,
            target_max,
            max_footprint,
            growth_rate,
            entry_delay,
            delay_counter: 0.0,
            counter_step: rng.random_range(DELAY_COUNTER_STEP_RANGE),
            reverse: false,
            phase: Phase::Idle,
            distance_ratio,
        }
    }

    /// Current animation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True when the cell has fully faded out (or never appeared).
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Current square side length.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Steady-state target size.
    pub fn target_max_size(&self) -> f64 {
        self.target_max
    }

    /// Per-tick growth increment.
    pub fn growth_rate(&self) -> f64 {
        self.growth_rate
    }

    /// Normalized distance from the surface center, in `[0, 1]`.
    pub fn distance_ratio(&self) -> f64 {
        self.distance_ratio
    }

    /// Selected palette color.
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Advance one appear-loop tick: wait out the entry delay, grow toward
    /// the target, then shimmer; draws unless still delayed.
    pub fn appear(&mut self, ctx: &mut dyn RenderContext) {
        if self.phase != Phase::Shimmering {
            self.phase = Phase::Growing;
        }

        if self.delay_counter <= self.entry_delay {
            self.delay_counter += self.counter_step;
            return;
        }

        if self.size >= self.target_max {
            self.phase = Phase::Shimmering;
        }

        if self.phase == Phase::Shimmering {
            self.shimmer();
        } else if self.growth_rate > 0.0 {
            self.size += self.growth_rate;
        } else {
            // Zero rate (reduced motion): appear without animation.
            self.size = self.target_max;
        }

        self.draw(ctx);
    }

    /// Advance one disappear-loop tick: shrink by the fixed step and report
    /// idle once the size reaches zero. The shimmer state and delay counter
    /// are reset so the next appear starts from a clean slate.
    pub fn disappear(&mut self, ctx: &mut dyn RenderContext) {
        self.delay_counter = 0.0;

        if self.size <= 0.0 {
            self.size = 0.0;
            self.phase = Phase::Idle;
            return;
        }

        self.phase = Phase::Shrinking;
        self.size -= SHRINK_STEP;
        self.draw(ctx);
    }

    fn shimmer(&mut self) {
        if self.size >= self.target_max {
            self.reverse = true;
        } else if self.size <= MIN_SIZE {
            self.reverse = false;
        }

        if self.reverse {
            self.size -= self.growth_rate;
        } else {
            self.size += self.growth_rate;
        }
    }

    /// Paint a filled square of the current size, centered within the cell's
    /// maximum footprint, with a vignette opacity falloff of
    /// `1 - ratio^1.5 * 0.7` folded into the context's global alpha.
    fn draw(&self, ctx: &mut dyn RenderContext) {
        if self.size <= 0.0 {
            return;
        }

        let offset = self.max_footprint * 0.5 - self.size * 0.5;
        let falloff = 1.0 - self.distance_ratio.powf(1.5) * 0.7;

        ctx.save();
        ctx.set_global_alpha(ctx.global_alpha() * falloff);
        ctx.set_fill(self.color);
        ctx.fill_rect(Rect::new(
            self.x + offset,
            self.y + offset,
            self.x + offset + self.size,
            self.y + offset + self.size,
        ));
        ctx.restore();
    }
}

fn random_in(rng: &mut impl Rng, low: f64, high: f64) -> f64 {
    if high > low { rng.random_range(low..high) } else { low }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/particle.rs"]
mod tests;
