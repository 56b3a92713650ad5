//! Frame scheduling: stop handles, per-field animations and frame pacing.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::entity::Entity;
use crate::field::Field;
use crate::surface::Surface;

/// Shared on/off switch for an [`Animation`].
///
/// Clones share state, so a handle can be given to whoever owns the view
/// and flipped from anywhere. The loop observes it at the next frame
/// boundary.
#[derive(Debug, Clone)]
pub struct StopHandle {
    running: Arc<AtomicBool>,
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl StopHandle {
    /// A handle in the running state.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    pub fn start(&self) {
        self.running.store(true, Ordering::Release);
    }

    /// Flip between running and stopped. Returns the new state.
    pub fn toggle(&self) -> bool {
        !self.running.fetch_xor(true, Ordering::AcqRel)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// A field together with the switch that schedules it.
#[derive(Debug)]
pub struct Animation<E: Entity> {
    field: Field<E>,
    handle: StopHandle,
    frames: u64,
}

impl<E: Entity> Animation<E> {
    pub fn new(field: Field<E>) -> Self {
        Self {
            field,
            handle: StopHandle::new(),
            frames: 0,
        }
    }

    /// A handle controlling this animation.
    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// Run one frame if the animation is running. Returns whether it ran.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.handle.is_running() {
            return false;
        }
        self.field.frame(surface);
        self.frames += 1;
        true
    }

    /// Repaint the current state without advancing it, e.g. after the
    /// surface was reallocated while stopped.
    pub fn redraw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        self.field.render(surface);
    }

    /// Frames run since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &Field<E> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut Field<E> {
        &mut self.field
    }
}

/// Tells the event loop when the next frame is due.
///
/// A late frame does not cause a burst of catch-up frames; the schedule
/// restarts from the moment the late frame ran.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_due: Instant,
}

impl FramePacer {
    /// Pace at `fps` frames per second, first frame due at `now`.
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs(1) / fps.max(1),
            next_due: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Time left until the next frame, zero if it is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Record that a frame ran at `now` and schedule the next one.
    pub fn advance(&mut self, now: Instant) {
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
    }

    /// Make a frame due immediately.
    pub fn reset(&mut self, now: Instant) {
        self.next_due = now;
    }
}
