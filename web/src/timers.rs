use core::time::Duration;
use gloo::timers::callback::Timeout;
use valentine_core::{Clock, Timeline, TimelineRunner};
use web_time::Instant;
use yew::Callback;

/// Monotonic browser time since the clock was created.
#[derive(Debug)]
pub(crate) struct BrowserClock {
    origin: Instant,
}

impl BrowserClock {
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for BrowserClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

pub(crate) fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// A running timeline bound to one pending browser timeout.
///
/// The owner gets `wake` when the next step is due and then collects the actions with [`ScheduledTimeline::due`].
/// Dropping this (for instance with the page that owns it) clears the timeout, so nothing fires into a dead view.
pub(crate) struct ScheduledTimeline<A> {
    runner: TimelineRunner<A>,
    clock: BrowserClock,
    wake: Callback<()>,
    timeout: Option<Timeout>,
}

impl<A> ScheduledTimeline<A> {
    pub(crate) fn start(timeline: Timeline<A>, wake: Callback<()>) -> Self {
        let clock = BrowserClock::new();
        let runner = TimelineRunner::started(timeline, clock.now());
        let mut scheduled = Self {
            runner,
            clock,
            wake,
            timeout: None,
        };
        scheduled.arm();
        scheduled
    }

    pub(crate) fn is_running(&self) -> bool {
        self.runner.is_running()
    }

    /// Actions whose delay has elapsed, re-arming for whatever comes next.
    pub(crate) fn due(&mut self) -> Vec<A> {
        let actions = self.runner.poll_clock(&self.clock);
        self.arm();
        actions
    }

    pub(crate) fn cancel(&mut self) {
        self.runner.cancel();
        self.timeout.take();
    }

    fn arm(&mut self) {
        self.timeout = self
            .runner
            .time_until_next(self.clock.now())
            .map(|wait| {
                let wake = self.wake.clone();
                Timeout::new(millis(wait), move || wake.emit(()))
            });
    }
}

impl<A> Drop for ScheduledTimeline<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
