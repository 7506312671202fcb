//! Wave scheduler: sequences the spawn groups of a level.
//!
//! The scheduler never touches the world. Timer fires are routed to
//! [`WaveScheduler::on_timer`], which answers with the specs to spawn this
//! tick. Only the timer the scheduler is currently waiting on is honoured;
//! anything else is a leftover from before a reset and is ignored.

use starfall_core::constants::WAVE_LEAD_IN_SECS;
use starfall_core::roster::EnemySpec;
use starfall_core::state::{SchedulerState, WaveView};

use crate::timers::{Fired, TimerAction, TimerHandle, TimerService};

/// One timed spawn group.
#[derive(Debug, Clone)]
pub struct WaveDefinition {
    /// Seconds between repeats.
    pub interval_secs: f64,
    /// Total number of spawn rounds, the first one included.
    pub repeat_count: u32,
    /// Pause after the last round before the next wave.
    pub wait_after_secs: Option<f64>,
    /// Enemies spawned together each round.
    pub spawns: Vec<EnemySpec>,
}

impl WaveDefinition {
    /// A single-shot wave, used for bosses.
    pub fn single(spawns: Vec<EnemySpec>) -> Self {
        Self {
            interval_secs: 0.0,
            repeat_count: 1,
            wait_after_secs: None,
            spawns,
        }
    }

    /// Enemies this wave spawns in total.
    pub fn total_spawns(&self) -> u32 {
        self.repeat_count * self.spawns.len() as u32
    }
}

/// Ordered waves of one level.
#[derive(Debug, Clone, Default)]
pub struct LevelSchedule {
    pub waves: Vec<WaveDefinition>,
}

impl LevelSchedule {
    pub fn total_spawns(&self) -> u32 {
        self.waves.iter().map(WaveDefinition::total_spawns).sum()
    }

    /// Whether the final wave puts a boss on the field.
    pub fn ends_with_boss(&self) -> bool {
        self.waves
            .last()
            .is_some_and(|w| w.spawns.iter().any(|s| s.is_boss))
    }
}

/// What a timer fire produced.
#[derive(Debug, Default)]
pub struct WaveOutcome {
    /// Specs to hand to the entity factory, one entity each.
    pub spawns: Vec<EnemySpec>,
    /// Index of a wave that began with this fire.
    pub started: Option<usize>,
    /// The schedule ran out with this fire.
    pub completed: bool,
}

/// Explicit state machine over a [`LevelSchedule`].
#[derive(Debug, Default)]
pub struct WaveScheduler {
    schedule: LevelSchedule,
    state: SchedulerState,
    cursor: usize,
    spawned: u32,
    pending: Option<TimerHandle>,
}

impl WaveScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset, load `schedule` and start the lead-in delay.
    pub fn start(&mut self, schedule: LevelSchedule, timers: &mut TimerService) {
        self.reset(timers);
        if !schedule.ends_with_boss() {
            log::warn!(
                "level schedule with {} waves has no closing boss wave",
                schedule.waves.len()
            );
        }
        self.schedule = schedule;
        self.state = SchedulerState::LeadIn;
        self.pending = Some(timers.wait(WAVE_LEAD_IN_SECS, TimerAction::WaveLeadIn));
        log::debug!(
            "wave schedule started: {} waves, {} spawns",
            self.schedule.waves.len(),
            self.schedule.total_spawns()
        );
    }

    /// Cancel the pending repeat or wait and return to `Idle`.
    pub fn reset(&mut self, timers: &mut TimerService) {
        if let Some(handle) = self.pending.take() {
            timers.cancel(handle);
        }
        self.schedule = LevelSchedule::default();
        self.state = SchedulerState::Idle;
        self.cursor = 0;
        self.spawned = 0;
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Index of the current wave.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            state: self.state,
            cursor: self.cursor,
            total: self.schedule.waves.len(),
        }
    }

    /// Handle a fired timer. Stale fires produce an empty outcome.
    pub fn on_timer(&mut self, fired: &Fired, timers: &mut TimerService) -> WaveOutcome {
        let mut outcome = WaveOutcome::default();
        if self.pending != Some(fired.handle) {
            return outcome;
        }

        match (self.state, fired.action) {
            (SchedulerState::LeadIn, TimerAction::WaveLeadIn) => {
                self.pending = None;
                self.enter_wave(0, timers, &mut outcome);
            }
            (SchedulerState::RunningWave { index, .. }, TimerAction::WaveRepeat) => {
                self.spawn_round(index, &mut outcome);
                if self.spawned >= self.schedule.waves[index].repeat_count {
                    // The repeating timer expires with this fire.
                    self.pending = None;
                    self.finish_wave(index, timers, &mut outcome);
                }
            }
            (SchedulerState::WaitingBetweenWaves { next }, TimerAction::WaveWaitElapsed) => {
                self.pending = None;
                self.enter_wave(next, timers, &mut outcome);
            }
            (state, action) => {
                log::warn!("wave scheduler in {state:?} ignored {action:?}");
            }
        }
        outcome
    }

    fn enter_wave(&mut self, index: usize, timers: &mut TimerService, outcome: &mut WaveOutcome) {
        self.cursor = index;
        self.spawned = 0;
        let Some(wave) = self.schedule.waves.get(index) else {
            self.state = SchedulerState::LevelComplete;
            outcome.completed = true;
            log::info!("wave schedule exhausted after {index} waves");
            return;
        };
        let (repeat_count, interval) = (wave.repeat_count, wave.interval_secs);

        self.state = SchedulerState::RunningWave { index, spawned: 0 };
        outcome.started = Some(index);
        log::info!("wave {index} started ({repeat_count} rounds)");

        if repeat_count == 0 {
            self.finish_wave(index, timers, outcome);
            return;
        }
        self.spawn_round(index, outcome);
        if repeat_count > 1 {
            self.pending = Some(timers.repeat(interval, TimerAction::WaveRepeat, repeat_count - 1));
        } else {
            self.finish_wave(index, timers, outcome);
        }
    }

    fn spawn_round(&mut self, index: usize, outcome: &mut WaveOutcome) {
        outcome
            .spawns
            .extend(self.schedule.waves[index].spawns.iter().cloned());
        self.spawned += 1;
        self.state = SchedulerState::RunningWave {
            index,
            spawned: self.spawned,
        };
    }

    fn finish_wave(&mut self, index: usize, timers: &mut TimerService, outcome: &mut WaveOutcome) {
        let next = index + 1;
        match self.schedule.waves[index].wait_after_secs {
            Some(wait) => {
                self.state = SchedulerState::WaitingBetweenWaves { next };
                self.pending = Some(timers.wait(wait, TimerAction::WaveWaitElapsed));
                log::debug!("wave {index} done, waiting {wait}s");
            }
            None => self.enter_wave(next, timers, outcome),
        }
    }
}
