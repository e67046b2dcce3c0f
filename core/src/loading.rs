use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadingAction {
    Tick,
    Complete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadingStage {
    SuitingUp,
    Speeding,
    Flying,
}

impl LoadingStage {
    pub const fn caption(self) -> &'static str {
        match self {
            Self::SuitingUp => "Suiting up...",
            Self::Speeding => "Speeding to you...",
            Self::Flying => "Love is in the air!",
        }
    }

    pub const fn image(self) -> &'static str {
        match self {
            Self::SuitingUp => snoopy::WALKING,
            Self::Speeding => snoopy::BIKING,
            Self::Flying => snoopy::FLYING,
        }
    }
}

/// Progress of the fixed-length loading animation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingProgress {
    ticks: u32,
}

impl LoadingProgress {
    pub const DURATION_MS: u32 = 6000;
    pub const TICK_MS: u32 = 50;
    pub const TOTAL_TICKS: u32 = Self::DURATION_MS / Self::TICK_MS;
    /// Pause on the full bar before handing over.
    pub const LINGER_MS: u32 = 800;
    pub const PAW_PRINTS: usize = 10;

    pub fn timeline() -> Timeline<LoadingAction> {
        let ticks = (0..Self::TOTAL_TICKS).map(|_| Step {
            delay: core::time::Duration::from_millis(Self::TICK_MS.into()),
            action: LoadingAction::Tick,
        });
        ticks
            .collect::<Timeline<_>>()
            .then(Self::LINGER_MS, LoadingAction::Complete)
    }

    pub fn tick(&mut self) {
        self.ticks = (self.ticks + 1).min(Self::TOTAL_TICKS);
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn is_full(&self) -> bool {
        self.ticks >= Self::TOTAL_TICKS
    }

    /// Completed share in `0.0..=100.0`.
    pub fn percent(&self) -> f32 {
        (self.ticks as f32 / Self::TOTAL_TICKS as f32 * 100.0).min(100.0)
    }

    pub fn stage(&self) -> LoadingStage {
        if !self.reached(30) {
            LoadingStage::SuitingUp
        } else if !self.reached(70) {
            LoadingStage::Speeding
        } else {
            LoadingStage::Flying
        }
    }

    /// Paw print `index` lights up once progress reaches its tenth.
    pub fn is_paw_filled(&self, index: usize) -> bool {
        u32::try_from((index + 1) * 10).is_ok_and(|percent| self.reached(percent))
    }

    fn reached(&self, percent: u32) -> bool {
        self.ticks * 100 >= percent * Self::TOTAL_TICKS
    }

    pub fn paws_filled(&self) -> usize {
        (0..Self::PAW_PRINTS)
            .filter(|&index| self.is_paw_filled(index))
            .count()
    }
}
