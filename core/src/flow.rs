use serde::{Deserialize, Serialize};

/// Named step in the overall scripted journey.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageState {
    Landing,
    Sudoku,
    Loading,
    Chat,
    NextChapter,
}

impl Default for PageState {
    fn default() -> Self {
        Self::Landing
    }
}

/// Which route the flow takes once the puzzle is solved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowVariant {
    /// Flower cover, loading screen and chat.
    Full,
    /// Straight to the closing page.
    Simplified,
}

impl Default for FlowVariant {
    fn default() -> Self {
        Self::Full
    }
}

/// Completion signals raised by the active page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowEvent {
    Started,
    PuzzleContinued,
    TransitionFinished,
    LoadingFinished,
    ChatFinished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlowOutcome {
    Ignored,
    OverlayRaised,
    Moved { from: PageState, to: PageState },
}

impl FlowOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFlow {
    state: PageState,
    variant: FlowVariant,
    overlay: bool,
}

impl PageFlow {
    pub fn new(variant: FlowVariant) -> Self {
        Self {
            state: PageState::Landing,
            variant,
            overlay: false,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn variant(&self) -> FlowVariant {
        self.variant
    }

    /// Whether the flower transition is covering the current page.
    pub fn overlay_raised(&self) -> bool {
        self.overlay
    }

    /// Unchecked set-state, returning the state that was active before.
    pub fn advance(&mut self, to: PageState) -> PageState {
        let from = core::mem::replace(&mut self.state, to);
        self.overlay = false;
        log::debug!("page: {:?} -> {:?} (forced)", from, to);
        from
    }

    pub fn handle(&mut self, event: FlowEvent) -> FlowOutcome {
        use FlowEvent::*;
        use PageState::*;

        let next = match (self.state, event, self.variant) {
            (Landing, Started, _) => Sudoku,
            (Sudoku, PuzzleContinued, FlowVariant::Simplified) => NextChapter,
            (Sudoku, PuzzleContinued, FlowVariant::Full) if !self.overlay => {
                log::debug!("page: raising transition overlay");
                self.overlay = true;
                return FlowOutcome::OverlayRaised;
            }
            (Sudoku, TransitionFinished, _) if self.overlay => Loading,
            (Loading, LoadingFinished, _) => Chat,
            (Chat, ChatFinished, _) => NextChapter,
            (state, event, _) => {
                log::trace!("page: ignoring {:?} while on {:?}", event, state);
                return FlowOutcome::Ignored;
            }
        };

        let from = self.advance(next);
        FlowOutcome::Moved { from, to: next }
    }
}

impl Default for PageFlow {
    fn default() -> Self {
        Self::new(FlowVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_flow_walks_every_page_in_order() {
        let mut flow = PageFlow::new(FlowVariant::Full);
        assert_eq!(flow.state(), PageState::Landing);

        assert_eq!(
            flow.handle(FlowEvent::Started),
            FlowOutcome::Moved {
                from: PageState::Landing,
                to: PageState::Sudoku
            }
        );
        assert_eq!(
            flow.handle(FlowEvent::PuzzleContinued),
            FlowOutcome::OverlayRaised
        );
        assert_eq!(flow.state(), PageState::Sudoku);
        assert!(flow.overlay_raised());

        flow.handle(FlowEvent::TransitionFinished);
        assert_eq!(flow.state(), PageState::Loading);
        assert!(!flow.overlay_raised());

        flow.handle(FlowEvent::LoadingFinished);
        assert_eq!(flow.state(), PageState::Chat);

        flow.handle(FlowEvent::ChatFinished);
        assert_eq!(flow.state(), PageState::NextChapter);
    }

    #[test]
    fn simplified_flow_skips_straight_to_next_chapter() {
        let mut flow = PageFlow::new(FlowVariant::Simplified);
        flow.handle(FlowEvent::Started);

        assert_eq!(
            flow.handle(FlowEvent::PuzzleContinued),
            FlowOutcome::Moved {
                from: PageState::Sudoku,
                to: PageState::NextChapter
            }
        );
        assert!(!flow.overlay_raised());
    }

    #[test]
    fn events_from_other_pages_are_ignored() {
        let mut flow = PageFlow::default();

        for event in [
            FlowEvent::PuzzleContinued,
            FlowEvent::TransitionFinished,
            FlowEvent::LoadingFinished,
            FlowEvent::ChatFinished,
        ] {
            assert_eq!(flow.handle(event), FlowOutcome::Ignored);
            assert_eq!(flow.state(), PageState::Landing);
        }

        flow.handle(FlowEvent::Started);
        assert_eq!(
            flow.handle(FlowEvent::TransitionFinished),
            FlowOutcome::Ignored
        );
        assert_eq!(flow.handle(FlowEvent::Started), FlowOutcome::Ignored);
        assert_eq!(flow.state(), PageState::Sudoku);
    }

    #[test]
    fn repeated_continue_does_not_raise_overlay_twice() {
        let mut flow = PageFlow::default();
        flow.handle(FlowEvent::Started);

        assert!(flow.handle(FlowEvent::PuzzleContinued).has_update());
        assert!(!flow.handle(FlowEvent::PuzzleContinued).has_update());
    }

    #[test]
    fn advance_sets_any_state_unchecked() {
        let mut flow = PageFlow::default();

        assert_eq!(flow.advance(PageState::Chat), PageState::Landing);
        assert_eq!(flow.state(), PageState::Chat);
        assert_eq!(flow.advance(PageState::Landing), PageState::Chat);
    }
}
