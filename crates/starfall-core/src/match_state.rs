//! Shared match counters (life and score).
//!
//! A single container owned by the simulation and passed to every consumer.
//! All mutation happens on the tick thread; readers on other threads get
//! copies through `subscribe`.

use std::sync::mpsc;

use serde::{Deserialize, Serialize};

use crate::constants::{INITIAL_LIFE, INITIAL_SCORE};

/// Copy of the counters at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounters {
    pub life: u32,
    pub score: u32,
}

impl Default for MatchCounters {
    fn default() -> Self {
        Self {
            life: INITIAL_LIFE,
            score: INITIAL_SCORE,
        }
    }
}

/// Life/score container with change notification.
#[derive(Debug, Default)]
pub struct SharedMatchState {
    counters: MatchCounters,
    subscribers: Vec<mpsc::Sender<MatchCounters>>,
}

impl SharedMatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> MatchCounters {
        self.counters
    }

    pub fn life(&self) -> u32 {
        self.counters.life
    }

    pub fn score(&self) -> u32 {
        self.counters.score
    }

    pub fn set_life(&mut self, life: u32) {
        self.counters.life = life;
        self.notify();
    }

    pub fn set_score(&mut self, score: u32) {
        self.counters.score = score;
        self.notify();
    }

    /// Add to the score and return the new total.
    pub fn add_score(&mut self, points: u32) -> u32 {
        self.counters.score = self.counters.score.saturating_add(points);
        self.notify();
        self.counters.score
    }

    /// Remove one life and return the post-decrement value. Never goes below 0.
    pub fn lose_life(&mut self) -> u32 {
        self.counters.life = self.counters.life.saturating_sub(1);
        self.notify();
        self.counters.life
    }

    /// Back to the initial counters.
    pub fn reset(&mut self) {
        self.counters = MatchCounters::default();
        self.notify();
    }

    /// Receive every future change. The current value is sent immediately.
    pub fn subscribe(&mut self) -> mpsc::Receiver<MatchCounters> {
        let (tx, rx) = mpsc::channel();
        self.attach(tx);
        rx
    }

    /// Register an existing sender as a subscriber.
    pub fn attach(&mut self, tx: mpsc::Sender<MatchCounters>) {
        if tx.send(self.counters).is_ok() {
            self.subscribers.push(tx);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        let counters = self.counters;
        self.subscribers.retain(|tx| tx.send(counters).is_ok());
    }
}
