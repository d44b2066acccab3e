use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Produces ticks at the configured interval and renders whenever state may
/// have changed (after a tick or a terminal event). Without a tick interval
/// the loop just blocks on terminal events, so idle screens cost nothing.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop` with ticks disabled.
    pub(super) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true, // Initial render is required on startup
        }
    }

    /// Sets the tick interval.
    ///
    /// Pass `None` to disable tick events. Changing the interval restarts
    /// the current tick phase; re-setting the same interval keeps it, so
    /// callers may re-apply their interval every update.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if self.tick_interval != interval {
            self.tick_interval = interval;
            self.last_tick = Instant::now();
        }
    }

    /// Returns the next event.
    ///
    /// Blocks until the tick time is reached, a render is due, or a
    /// crossterm event occurs.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.compute_timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    fn compute_timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval)?;
        Some(next_tick_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_reapplying_the_same_interval_keeps_the_tick_phase() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::from_millis(100)));
        let phase = events.last_tick;

        // Let the clock advance so a restarted phase would be observable.
        thread::sleep(Duration::from_millis(2));
        events.set_tick_interval(Some(Duration::from_millis(100)));

        assert_eq!(events.last_tick, phase);
    }

    #[test]
    fn test_changing_the_interval_restarts_the_tick_phase() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::from_millis(100)));
        let phase = events.last_tick;

        thread::sleep(Duration::from_millis(2));
        events.set_tick_interval(Some(Duration::from_millis(40)));

        assert_eq!(events.tick_interval, Some(Duration::from_millis(40)));
        assert!(events.last_tick > phase);
    }

    #[test]
    fn test_next_yields_a_tick_once_the_interval_elapses() {
        let mut events = EventLoop::new();
        events.set_tick_interval(Some(Duration::from_millis(50)));

        thread::sleep(Duration::from_millis(55));

        // A due tick takes priority over the pending startup render.
        assert!(matches!(events.next().unwrap(), TuiEvent::Tick));
        assert!(matches!(events.next().unwrap(), TuiEvent::Render));
    }
}
