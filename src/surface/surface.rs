use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::attrs::SurfaceConfig;
use crate::foundation::core::{HostSize, TICK_INTERVAL_MS};
use crate::grid::generate::generate_grid;
use crate::grid::particle::Particle;
use crate::render::context::RenderContext;
use crate::surface::scheduler::{TickId, TickScheduler};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which phase loop a pointer trigger started.
pub enum Trigger {
    /// Pointer entered the host: fade the grid in (runs until cancelled).
    Appear,
    /// Pointer left the host: fade the grid out (self-terminates on idle).
    Disappear,
}

#[derive(Clone, Copy, Debug)]
/// Construction-time environment for a surface, read once.
pub struct SurfaceOptions {
    /// Process-wide accessibility preference; zeroes the speed step and
    /// disables entry staggering. Not re-read after construction.
    pub reduced_motion: bool,
    /// Device pixel ratio used to scale the backing buffer. Non-positive
    /// values are coerced to 1.0.
    pub pixel_density: f64,
    /// Seed for the particle RNG; `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            pixel_density: 1.0,
            seed: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveLoop {
    trigger: Trigger,
    tick: TickId,
}

/// A pixel-grid animation surface bound to one host container.
///
/// The embedder owns the host element and forwards its notifications:
/// size changes via [`handle_resize`](PixelSurface::handle_resize), hover via
/// [`pointer_enter`](PixelSurface::pointer_enter) /
/// [`pointer_leave`](PixelSurface::pointer_leave), and granted frame ticks
/// via [`tick`](PixelSurface::tick). At most one phase loop is active at any
/// time; starting a new one cancels the loop already running.
pub struct PixelSurface<C: RenderContext, S: TickScheduler> {
    config: SurfaceConfig,
    reduced_motion: bool,
    pixel_density: f64,
    ctx: C,
    scheduler: S,
    rng: StdRng,
    particles: Vec<Particle>,
    host_size: HostSize,
    attached: bool,
    active: Option<ActiveLoop>,
    time_prev_ms: f64,
}

impl<C: RenderContext, S: TickScheduler> PixelSurface<C, S> {
    /// Build a surface from a resolved configuration and construction-time
    /// options. The surface does nothing until [`attach`](Self::attach).
    pub fn new(config: SurfaceConfig, opts: SurfaceOptions, ctx: C, scheduler: S) -> Self {
        let rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            reduced_motion: opts.reduced_motion,
            pixel_density: if opts.pixel_density > 0.0 {
                opts.pixel_density
            } else {
                1.0
            },
            ctx,
            scheduler,
            rng,
            particles: Vec::new(),
            host_size: HostSize::new(0.0, 0.0),
            attached: false,
            active: None,
            time_prev_ms: 0.0,
        }
    }

    /// First sizing and grid generation. The embedder registers resize and
    /// hover listeners on the host and forwards them; calling `attach` twice
    /// is a no-op.
    #[tracing::instrument(skip(self))]
    pub fn attach(&mut self, host: HostSize) {
        if self.attached {
            return;
        }
        self.attached = true;
        self.handle_resize(host);
    }

    /// Cancel any running loop and release the grid. Idempotent, and safe to
    /// call even if `attach` never ran (attach may be scheduled asynchronously
    /// relative to detach).
    #[tracing::instrument(skip(self))]
    pub fn detach(&mut self) {
        self.attached = false;
        self.cancel_active();
        self.particles.clear();
    }

    /// React to a host size change: rescale the backing buffer to
    /// `dimension x pixel_density` and regenerate the grid from scratch.
    ///
    /// A zero-area host is a transient state, not an error: all sizing work
    /// is skipped until the next notification. A running loop is not
    /// cancelled; its next tick simply operates on the new grid.
    #[tracing::instrument(skip(self))]
    pub fn handle_resize(&mut self, host: HostSize) {
        if !self.attached || host.is_empty() {
            return;
        }

        self.host_size = host;

        let width = host.width.floor();
        let height = host.height.floor();
        self.ctx.resize(
            (width * self.pixel_density).round() as u32,
            (height * self.pixel_density).round() as u32,
            self.pixel_density,
        );

        self.particles = generate_grid(&self.config, host, self.reduced_motion, &mut self.rng);
    }

    /// Pointer entered the host: start the appear loop.
    pub fn pointer_enter(&mut self) {
        self.start(Trigger::Appear);
    }

    /// Pointer left the host: start the disappear loop.
    pub fn pointer_leave(&mut self) {
        self.start(Trigger::Disappear);
    }

    #[tracing::instrument(skip(self))]
    fn start(&mut self, trigger: Trigger) {
        if !self.attached {
            return;
        }
        self.cancel_active();
        let tick = self.scheduler.request();
        self.active = Some(ActiveLoop { trigger, tick });
    }

    /// Deliver one granted tick.
    ///
    /// `id` must be the grant obtained from this surface's scheduler; a stale
    /// or cancelled id is ignored. The loop chains by requesting the next
    /// tick before doing any work. A tick arriving sooner than the ~60/s
    /// interval is a no-op (but stays scheduled); an accepted tick clears the
    /// buffer and steps + redraws every particle in grid order, then cancels
    /// the loop once all particles report idle.
    pub fn tick(&mut self, id: TickId, now_ms: f64) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.tick != id {
            return;
        }
        let trigger = active.trigger;
        active.tick = self.scheduler.request();

        let elapsed = now_ms - self.time_prev_ms;
        if elapsed < TICK_INTERVAL_MS {
            return;
        }
        self.time_prev_ms = now_ms - (elapsed % TICK_INTERVAL_MS);

        self.ctx.clear();
        self.ctx.save();
        self.ctx.set_global_alpha(self.config.opacity);
        self.ctx.set_blend_mode(self.config.blend);

        let mut all_idle = true;
        for particle in &mut self.particles {
            match trigger {
                Trigger::Appear => particle.appear(&mut self.ctx),
                Trigger::Disappear => particle.disappear(&mut self.ctx),
            }
            if !particle.is_idle() {
                all_idle = false;
            }
        }
        self.ctx.restore();

        // Only the disappear loop reaches this in practice: shimmering
        // particles never report idle, so appear runs until explicitly
        // cancelled by a disappear trigger or detach.
        if all_idle {
            self.cancel_active();
        }
    }

    fn cancel_active(&mut self) {
        if let Some(active) = self.active.take() {
            self.scheduler.cancel(active.tick);
        }
    }

    /// True while a phase loop is active.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The trigger of the active loop, if one is running.
    pub fn active_trigger(&self) -> Option<Trigger> {
        self.active.map(|a| a.trigger)
    }

    /// The current particle grid, in creation order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Last accepted host size.
    pub fn host_size(&self) -> HostSize {
        self.host_size
    }

    /// Resolved configuration this surface was built with.
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// The drawing context, for readback.
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// The tick scheduler, for embedders that poll pending grants.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable scheduler access (test drivers fire grants through this).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/surface.rs"]
mod tests;
