use valentine_core::{
    ChatAction, ChatMessage, ChatSession, ChatSignal, Choice, FlowEvent, MessageKind, Sender,
};
use yew::prelude::*;

use crate::app::FlowHandle;
use crate::timers::ScheduledTimeline;

const BOT_NAME: &str = "FredBot";

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Wake,
    Choose(Choice),
}

fn message_view(message: &ChatMessage) -> Html {
    let (side, author) = match message.sender {
        Sender::Bot => ("bot", BOT_NAME),
        Sender::User => ("user", "You"),
    };
    let body = match message.kind {
        MessageKind::Text => html! { <div class={classes!("bubble", side)}>{ message.content.clone() }</div> },
        MessageKind::Sticker => html! {
            <div class={classes!("sticker", side)}>
                <img src={message.content.clone()} alt="sticker"/>
            </div>
        },
    };

    html! {
        <div key={message.id} class={classes!("message", side)}>
            { body }
            <small>{ author }</small>
        </div>
    }
}

pub(crate) struct ChatPage {
    session: ChatSession,
    script: ScheduledTimeline<ChatAction>,
    flow: FlowHandle,
    scroll: NodeRef,
}

impl ChatPage {
    fn wake(ctx: &Context<Self>) -> Callback<()> {
        ctx.link().callback(|()| Msg::Wake)
    }

    fn options_view(&self, ctx: &Context<Self>) -> Html {
        let Some(stage) = self.session.offered() else {
            return html! { <div class="options idle"/> };
        };

        html! {
            <div class="options">
                {
                    for [Choice::Yes, Choice::No].into_iter().map(|choice| {
                        let onclick = ctx.link().callback(move |_| Msg::Choose(choice));
                        let class = match choice {
                            Choice::Yes => "yes",
                            Choice::No => "no",
                        };
                        html! { <button {class} {onclick}>{ stage.label(choice) }</button> }
                    })
                }
            </div>
        }
    }
}

impl Component for ChatPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: ChatSession::new(),
            script: ScheduledTimeline::start(valentine_core::ChatScript::intro(), Self::wake(ctx)),
            flow: FlowHandle::from_scope(ctx.link()),
            scroll: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Wake => {
                let actions = self.script.due();
                let updated = !actions.is_empty();
                for action in actions {
                    if self.session.apply(action) == ChatSignal::Finished {
                        self.flow.send(FlowEvent::ChatFinished);
                    }
                }
                updated
            }
            Msg::Choose(choice) => match self.session.choose(choice) {
                Ok(reply) => {
                    if self.script.is_running() {
                        log::warn!("choice made while the script was still running");
                    }
                    self.script = ScheduledTimeline::start(reply, Self::wake(ctx));
                    true
                }
                Err(err) => {
                    log::debug!("choice ignored: {}", err);
                    false
                }
            },
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(element) = self.scroll.cast::<web_sys::Element>() {
            element.set_scroll_top(element.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page chat">
                <header>
                    <h3>{ BOT_NAME }</h3>
                    <span class="status">{"Online"}</span>
                </header>
                <div class="messages" ref={self.scroll.clone()}>
                    { for self.session.messages().iter().map(message_view) }
                    if self.session.is_typing() {
                        <div class="typing"><span/><span/><span/></div>
                    }
                </div>
                { self.options_view(ctx) }
            </div>
        }
    }
}
