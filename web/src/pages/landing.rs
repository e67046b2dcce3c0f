use gloo::events::EventListener;
use valentine_core::FlowEvent;
use yew::prelude::*;

use crate::app::FlowHandle;

const MOBILE_MAX_WIDTH: f64 = 768.;

fn is_narrow_window() -> bool {
    gloo::utils::window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .is_some_and(|width| width < MOBILE_MAX_WIDTH)
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct LandingProps {
    pub recipient: AttrValue,
}

#[function_component]
pub(crate) fn LandingPage(props: &LandingProps) -> Html {
    let flow = use_context::<FlowHandle>();
    let narrow = use_state(is_narrow_window);

    {
        let narrow = narrow.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_| {
                narrow.set(is_narrow_window())
            });
            move || drop(listener)
        });
    }

    let onclick = Callback::from(move |_: MouseEvent| match &flow {
        Some(flow) => flow.send(FlowEvent::Started),
        None => log::warn!("landing page has no flow to start"),
    });

    html! {
        <div class="page landing">
            if *narrow {
                <div class="mobile-warning">{"For the best experience, please switch to desktop!"}</div>
            }
            <h1>{ format!("Hi, {}!", props.recipient) }</h1>
            <p>
                {"I've made something special for you this Valentine's Day."}<br/>
                {"Are you ready to begin?"}
            </p>
            <button {onclick}>{"Let's Go"}</button>
        </div>
    }
}
