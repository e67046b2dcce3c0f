use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct NextChapterProps {
    pub recipient: AttrValue,
}

#[function_component]
pub(crate) fn NextChapter(props: &NextChapterProps) -> Html {
    html! {
        <div class="page next-chapter">
            <h1>{"To Be Continued..."}</h1>
            <p>{ format!("Happy Valentine's Day, {}!", props.recipient) }</p>
        </div>
    }
}
