//! Tick-driven timer service.
//!
//! Timers are counted in whole ticks so that a schedule replays identically.
//! A fired timer hands back its action; the engine dispatches it. Nothing
//! here holds callbacks, so cancelling is just removing the entry.

use starfall_core::types::secs_to_ticks;

/// Identifies a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// The delay before the first wave has elapsed.
    WaveLeadIn,
    /// The running wave should spawn again.
    WaveRepeat,
    /// The pause after a wave has elapsed.
    WaveWaitElapsed,
    /// An enemy may fire again.
    FireCooldown(hecs::Entity),
    /// Reset the match after the player's death.
    RestartAfterDeath,
    /// Move on after the boss fell.
    AdvanceAfterBoss,
}

/// A timer that fired this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub action: TimerAction,
}

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    remaining_ticks: u64,
    interval_ticks: u64,
    fires_left: u32,
    action: TimerAction,
}

/// Single-shot and repeating timers against the simulation tick.
#[derive(Debug, Default)]
pub struct TimerService {
    timers: Vec<Timer>,
    next_id: u64,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `action` once after `secs` seconds.
    pub fn wait(&mut self, secs: f64, action: TimerAction) -> TimerHandle {
        self.schedule(secs, action, 1)
    }

    /// Fire `action` every `interval_secs` seconds, at most `max_repeats` times.
    /// The first fire happens one interval from now.
    pub fn repeat(&mut self, interval_secs: f64, action: TimerAction, max_repeats: u32) -> TimerHandle {
        self.schedule(interval_secs, action, max_repeats)
    }

    /// Stop a timer. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.handle != handle);
        self.timers.len() != before
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|t| t.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advance one tick and return the timers that fired, oldest first.
    /// Timers scheduled while handling the result start counting next tick.
    pub fn advance(&mut self) -> Vec<Fired> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            timer.remaining_ticks = timer.remaining_ticks.saturating_sub(1);
            if timer.remaining_ticks == 0 {
                fired.push(Fired {
                    handle: timer.handle,
                    action: timer.action,
                });
                timer.fires_left = timer.fires_left.saturating_sub(1);
                timer.remaining_ticks = timer.interval_ticks;
            }
        }
        self.timers.retain(|t| t.fires_left > 0);
        fired
    }

    fn schedule(&mut self, secs: f64, action: TimerAction, fires: u32) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        if fires == 0 {
            return handle;
        }
        let ticks = secs_to_ticks(secs).max(1);
        self.timers.push(Timer {
            handle,
            remaining_ticks: ticks,
            interval_ticks: ticks,
            fires_left: fires,
            action,
        });
        handle
    }
}
