use serde::{Deserialize, Serialize};

/// Elapsed-time and score bookkeeping for the timed puzzle variant.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreClock {
    elapsed_secs: u32,
    paused: bool,
    complete: bool,
    base: u32,
    score: u32,
    target: u32,
}

impl ScoreClock {
    pub const COMPLETION_BONUS: u32 = 500;
    pub const SCORE_STEP: u32 = 10;

    pub const fn new(base: u32) -> Self {
        Self {
            elapsed_secs: 0,
            paused: false,
            complete: false,
            base,
            score: base,
            target: base,
        }
    }

    pub const fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn target(&self) -> u32 {
        self.target
    }

    pub const fn is_animating(&self) -> bool {
        self.score < self.target
    }

    /// One-second heartbeat, returns whether time moved.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.complete {
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        true
    }

    /// Flips the pause state, no effect once complete.
    pub fn toggle_pause(&mut self) -> bool {
        if !self.complete {
            self.paused = !self.paused;
            log::debug!("puzzle paused: {}", self.paused);
        }
        self.paused
    }

    pub fn mark_complete(&mut self) {
        if self.complete {
            return;
        }
        self.complete = true;
        self.paused = false;
        self.target = self.base.saturating_add(Self::COMPLETION_BONUS);
    }

    /// Moves the displayed score one increment toward the target.
    pub fn step_score(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        self.score = self
            .score
            .saturating_add(Self::SCORE_STEP)
            .min(self.target);
        true
    }
}

impl Default for ScoreClock {
    fn default() -> Self {
        Self::new(0)
    }
}
