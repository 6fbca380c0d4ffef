use web_sys::MouseEvent;
use yew::prelude::*;

use crate::motion::accordion::AccordionState;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let state = use_state(AccordionState::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(state.toggled());
        })
    };

    html! {
        <div class={classes!("faq-item", state.is_open.then_some("open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={state.is_open.to_string()}
            >
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{"+"}</span>
            </button>
            // Kept in the markup while closed; the cap hides it.
            <div class="faq-answer" style={state.panel_style()}>
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}
