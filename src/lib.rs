//! Pixelgrid is a hover-driven pixel-grid animation engine.
//!
//! A [`PixelSurface`] tiles a host container with independently animated
//! square cells ([`Particle`]), fades them in on pointer entry and out on
//! pointer exit, and drives the whole field from a frame-paced update loop
//! gated to ~60 ticks per second.
//!
//! # Pipeline overview
//!
//! 1. **Attach**: [`PixelSurface::attach`] performs initial sizing and grid generation
//! 2. **Resize**: [`PixelSurface::handle_resize`] rescales the backing buffer and
//!    regenerates the particle grid from scratch
//! 3. **Trigger**: [`PixelSurface::pointer_enter`] / [`PixelSurface::pointer_leave`]
//!    start the appear or disappear loop (at most one loop per surface; the last
//!    trigger wins)
//! 4. **Tick**: each accepted tick clears the buffer and steps + redraws every
//!    particle in grid order through a [`RenderContext`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: grid generation is pure for a given seed;
//!   ticks are driven explicitly through a [`TickScheduler`], never by an
//!   ambient clock.
//! - **No IO in the engine**: the embedder owns the host element, the resize
//!   and hover notifications, and the display refresh signal.
//! - **Premultiplied RGBA8** in the CPU backend: [`CpuContext`] composites
//!   premultiplied pixels end-to-end.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod grid;
mod render;
mod surface;

pub use config::attrs::{SurfaceAttrs, SurfaceConfig, Variant};
pub use config::color::parse_hex;
pub use foundation::core::{HostSize, Point, Rect, Rgba8, TICK_INTERVAL_MS, Vec2};
pub use foundation::error::{PixelgridError, PixelgridResult};
pub use grid::generate::generate_grid;
pub use grid::particle::{Particle, Phase};
pub use render::context::{BlendMode, RenderContext};
pub use render::cpu::CpuContext;
pub use surface::scheduler::{ManualScheduler, TickId, TickScheduler};
pub use surface::surface::{PixelSurface, SurfaceOptions, Trigger};
