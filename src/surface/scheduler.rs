/// Handle for one outstanding tick request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickId(
    /// Monotonically increasing grant counter.
    pub u64,
);

/// Frame-pacing source the surface chains its update loop on.
///
/// This mirrors requestAnimationFrame-style APIs: each
/// [`request`](TickScheduler::request) asks for one upcoming tick tied to the
/// host's display refresh signal, and [`cancel`](TickScheduler::cancel)
/// withdraws a request that has not fired yet. The embedder delivers granted
/// ticks by calling [`crate::PixelSurface::tick`] with the granted id; the
/// surface ignores ids it no longer holds, so a cancelled grant can never
/// step state.
pub trait TickScheduler {
    /// Request one upcoming tick.
    fn request(&mut self) -> TickId;

    /// Withdraw a request that has not fired yet. Unknown ids are ignored.
    fn cancel(&mut self, id: TickId);
}

/// Deterministic scheduler for tests and headless drivers.
///
/// Requests queue up and are handed out in order by
/// [`fire`](ManualScheduler::fire); nothing happens until the driver fires
/// and forwards the grant to the surface.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    pending: Vec<TickId>,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests that have not fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take the oldest pending request, if any, marking it as fired.
    pub fn fire(&mut self) -> Option<TickId> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl TickScheduler for ManualScheduler {
    fn request(&mut self) -> TickId {
        let id = TickId(self.next);
        self.next += 1;
        self.pending.push(id);
        id
    }

    fn cancel(&mut self, id: TickId) {
        self.pending.retain(|p| *p != id);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/scheduler.rs"]
mod tests;
