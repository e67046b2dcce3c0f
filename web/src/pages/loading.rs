use valentine_core::{FlowEvent, LoadingAction, LoadingProgress};
use yew::prelude::*;

use crate::app::FlowHandle;
use crate::timers::ScheduledTimeline;

pub(crate) enum Msg {
    Wake,
}

pub(crate) struct LoadingPage {
    progress: LoadingProgress,
    script: ScheduledTimeline<LoadingAction>,
    flow: FlowHandle,
}

impl Component for LoadingPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let wake = ctx.link().callback(|()| Msg::Wake);
        Self {
            progress: LoadingProgress::default(),
            script: ScheduledTimeline::start(LoadingProgress::timeline(), wake),
            flow: FlowHandle::from_scope(ctx.link()),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Wake => {
                let mut updated = false;
                for action in self.script.due() {
                    match action {
                        LoadingAction::Tick => {
                            self.progress.tick();
                            updated = true;
                        }
                        LoadingAction::Complete => self.flow.send(FlowEvent::LoadingFinished),
                    }
                }
                updated
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let stage = self.progress.stage();
        let percent = self.progress.percent().round() as u32;

        html! {
            <div class="page loading">
                <img key={stage.image()} src={stage.image()} alt="Snoopy Animation"/>
                <h2 key={stage.caption()}>{ stage.caption() }</h2>
                <div class="paws">
                    {
                        for (0..LoadingProgress::PAW_PRINTS).map(|index| {
                            let filled = self.progress.is_paw_filled(index);
                            html! { <span class={classes!("paw", filled.then_some("filled"))}>{"🐾"}</span> }
                        })
                    }
                </div>
                <div class="percent">{ format!("{}%", percent) }</div>
            </div>
        }
    }
}
