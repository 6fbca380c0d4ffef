use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::components::host::{prefers_reduced_motion, AnimationLoop};
use crate::components::reveal::use_reveal;
use crate::config;
use crate::motion::counter::{counter_text, CounterState, CounterStep};
use crate::motion::reveal::RevealOptions;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or(AttrValue::Static("+"))]
    pub suffix: AttrValue,
}

#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let shown = use_state_eq(|| 0u32);
    let on_reveal = {
        let target = props.target;
        Callback::from(move |_| log::debug!("counter for {} revealed", target))
    };
    let reveal = use_reveal(
        RevealOptions::with_threshold(config::COUNTER_THRESHOLD),
        Some(on_reveal),
    );

    {
        let shown = shown.clone();
        // Captured once per reveal; later prop changes don't touch a running loop.
        let target = props.target;
        use_effect_with_deps(
            move |revealed: &bool| {
                let mut frames = None;
                if *revealed {
                    let counter = Rc::new(RefCell::new(CounterState::new(target)));
                    if prefers_reduced_motion() {
                        shown.set(counter.borrow_mut().finish());
                    } else {
                        let setter = shown.setter();
                        let loop_counter = counter.clone();
                        match AnimationLoop::start(move |timestamp| {
                            let step = loop_counter.borrow_mut().step(timestamp);
                            setter.set(step.value());
                            matches!(step, CounterStep::Running(_))
                        }) {
                            Ok(running) => frames = Some(running),
                            Err(err) => {
                                log::warn!("{}; showing final count", err);
                                shown.set(counter.borrow_mut().finish());
                            }
                        }
                    }
                }
                move || drop(frames)
            },
            reveal.visible(),
        );
    }

    html! {
        <span ref={reveal.node.clone()} class="counter">
            { counter_text(&props.prefix, *shown, &props.suffix) }
        </span>
    }
}
