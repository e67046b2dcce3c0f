use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::cell::Cell;
use core::iter;
use core::time::Duration;

/// Source of monotonic time, measured from any fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Step<A> {
    /// Wait measured from the moment the previous step fired.
    pub delay: Duration,
    pub action: A,
}

/// Ordered script of delayed actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline<A> {
    steps: Vec<Step<A>>,
}

impl<A> Timeline<A> {
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn then(mut self, delay_ms: u32, action: A) -> Self {
        self.steps.push(Step {
            delay: Duration::from_millis(delay_ms.into()),
            action,
        });
        self
    }

    pub fn immediately(self, action: A) -> Self {
        self.then(0, action)
    }

    pub fn steps(&self) -> &[Step<A>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time from start until the last step fires, assuming prompt polling.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|step| step.delay).sum()
    }
}

impl<A> Default for Timeline<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> FromIterator<Step<A>> for Timeline<A> {
    fn from_iter<I: IntoIterator<Item = Step<A>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<A> IntoIterator for Timeline<A> {
    type Item = Step<A>;
    type IntoIter = alloc::vec::IntoIter<Step<A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Running,
    Finished,
    Cancelled,
}

impl RunnerState {
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

/// Single driver loop over a [`Timeline`].
///
/// The runner never looks at a clock itself: the host polls it with the current time and arms one timer for
/// [`TimelineRunner::time_until_next`]. Once cancelled it never yields again.
#[derive(Clone, Debug)]
pub struct TimelineRunner<A> {
    pending: VecDeque<Step<A>>,
    anchor: Duration,
    state: RunnerState,
}

impl<A> TimelineRunner<A> {
    pub fn new(timeline: Timeline<A>) -> Self {
        Self {
            pending: timeline.into_iter().collect(),
            anchor: Duration::ZERO,
            state: RunnerState::Idle,
        }
    }

    pub fn started(timeline: Timeline<A>, now: Duration) -> Self {
        let mut runner = Self::new(timeline);
        runner.start(now);
        runner
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunnerState::Running)
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn start(&mut self, now: Duration) {
        if !matches!(self.state, RunnerState::Idle) {
            log::trace!("timeline already started ({:?})", self.state);
            return;
        }

        self.anchor = now;
        self.state = if self.pending.is_empty() {
            RunnerState::Finished
        } else {
            RunnerState::Running
        };
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        self.pending.front().map(|step| self.anchor + step.delay)
    }

    pub fn time_until_next(&self, now: Duration) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_sub(now))
    }

    /// Hands out the next action if its delay has fully elapsed at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<A> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }

        let step = self.pending.pop_front()?;
        self.anchor = now;
        if self.pending.is_empty() {
            self.state = RunnerState::Finished;
        }
        Some(step.action)
    }

    /// Every action due at `now`, in order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<A> {
        iter::from_fn(|| self.poll(now)).collect()
    }

    pub fn poll_clock(&mut self, clock: &impl Clock) -> Vec<A> {
        self.drain_due(clock.now())
    }

    /// Drops every pending step, returning how many never fired.
    pub fn cancel(&mut self) -> usize {
        if self.state.is_done() {
            return 0;
        }

        let dropped = self.pending.len();
        self.pending.clear();
        self.state = RunnerState::Cancelled;
        log::debug!("timeline cancelled, {} step(s) dropped", dropped);
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn actions_fire_in_order_after_relative_delays() {
        let timeline = Timeline::new().then(100, 'a').then(0, 'b').then(250, 'c');
        let clock = ManualClock::new();
        let mut runner = TimelineRunner::started(timeline, clock.now());

        clock.advance_ms(99);
        assert!(runner.poll_clock(&clock).is_empty());

        clock.advance_ms(1);
        assert_eq!(runner.poll_clock(&clock), ['a', 'b']);

        clock.advance_ms(249);
        assert!(runner.poll_clock(&clock).is_empty());
        assert_eq!(runner.time_until_next(clock.now()), Some(ms(1)));

        clock.advance_ms(1);
        assert_eq!(runner.poll_clock(&clock), ['c']);
        assert_eq!(runner.state(), RunnerState::Finished);
        assert_eq!(runner.next_deadline(), None);
    }

    #[test]
    fn late_poll_measures_next_delay_from_actual_fire_time() {
        let timeline = Timeline::new().then(100, 1).then(100, 2);
        let mut runner = TimelineRunner::started(timeline, ms(0));

        assert_eq!(runner.drain_due(ms(500)), [1]);
        assert_eq!(runner.next_deadline(), Some(ms(600)));
        assert_eq!(runner.poll(ms(599)), None);
        assert_eq!(runner.poll(ms(600)), Some(2));
    }

    #[test]
    fn nothing_fires_before_start() {
        let mut runner = TimelineRunner::new(Timeline::new().immediately(()));

        assert_eq!(runner.state(), RunnerState::Idle);
        assert_eq!(runner.poll(ms(10_000)), None);

        runner.start(ms(10_000));
        assert_eq!(runner.poll(ms(10_000)), Some(()));
    }

    #[test]
    fn cancelled_runner_never_fires_again() {
        let timeline = Timeline::new().then(10, 'a').then(10, 'b').then(10, 'c');
        let mut runner = TimelineRunner::started(timeline, ms(0));

        assert_eq!(runner.poll(ms(10)), Some('a'));
        assert_eq!(runner.cancel(), 2);
        assert_eq!(runner.state(), RunnerState::Cancelled);
        assert!(runner.drain_due(ms(1_000_000)).is_empty());
        assert_eq!(runner.time_until_next(ms(20)), None);
        assert_eq!(runner.cancel(), 0);

        runner.start(ms(0));
        assert_eq!(runner.state(), RunnerState::Cancelled);
    }

    #[test]
    fn empty_timeline_finishes_on_start() {
        let runner = TimelineRunner::<()>::started(Timeline::new(), ms(5));
        assert_eq!(runner.state(), RunnerState::Finished);
    }

    #[test]
    fn total_duration_sums_relative_delays() {
        let timeline = Timeline::new().then(1500, ()).then(1500, ()).immediately(());
        assert_eq!(timeline.total_duration(), ms(3000));
        assert_eq!(timeline.len(), 3);
    }
}
