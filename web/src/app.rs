use valentine_core::{FlowConfig, FlowEvent, FlowOutcome, PageFlow, PageState};
use yew::html::Scope;
use yew::prelude::*;

use crate::pages::*;

/// Context handed to every page for raising completion events.
#[derive(Clone, PartialEq)]
pub(crate) struct FlowHandle {
    dispatch: Callback<FlowEvent>,
}

impl FlowHandle {
    pub(crate) fn send(&self, event: FlowEvent) {
        log::debug!("flow event: {:?}", event);
        self.dispatch.emit(event);
    }

    /// Handle from the surrounding [`App`], or one that drops every event.
    pub(crate) fn from_scope<C: BaseComponent>(link: &Scope<C>) -> Self {
        link.context::<Self>(Callback::noop())
            .map(|(handle, _)| handle)
            .unwrap_or_else(|| {
                log::warn!("page mounted outside of the app, flow events are dropped");
                Self {
                    dispatch: Callback::noop(),
                }
            })
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct AppProps {
    pub config: FlowConfig,
    pub seed: u64,
}

pub(crate) enum Msg {
    Flow(FlowEvent),
}

pub(crate) struct App {
    flow: PageFlow,
    handle: FlowHandle,
}

impl App {
    fn page_view(&self, config: &FlowConfig) -> Html {
        let recipient = AttrValue::from(config.recipient.clone());

        match self.flow.state() {
            PageState::Landing => html! { <LandingPage key="landing" {recipient}/> },
            PageState::Sudoku => html! {
                <SudokuPage
                    key="sudoku"
                    {recipient}
                    policy={config.policy}
                    check_debounce_ms={config.check_debounce_ms}
                    score_base={config.score_base}
                />
            },
            PageState::Loading => html! { <LoadingPage key="loading"/> },
            PageState::Chat => html! { <ChatPage key="chat"/> },
            PageState::NextChapter => html! { <NextChapter key="next_chapter" {recipient}/> },
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: PageFlow::new(ctx.props().config.variant),
            handle: FlowHandle {
                dispatch: ctx.link().callback(Msg::Flow),
            },
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Flow(event) => {
                let outcome = self.flow.handle(event);
                if let FlowOutcome::Moved { from, to } = outcome {
                    log::info!("page {:?} -> {:?}", from, to);
                }
                outcome.has_update()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let AppProps { config, seed } = ctx.props();

        html! {
            <ContextProvider<FlowHandle> context={self.handle.clone()}>
                <main class="valentine">
                    if self.flow.overlay_raised() {
                        <FlowerCover seed={*seed}/>
                    }
                    { self.page_view(config) }
                </main>
            </ContextProvider<FlowHandle>>
        }
    }
}
