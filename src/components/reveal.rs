use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::host::prefers_reduced_motion;
use crate::error::HostError;
use crate::motion::reveal::{IntersectionSample, RevealOptions, RevealState};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches one element until it reveals, then unobserves it. Dropping the
/// guard disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealObserver {
    pub fn observe(
        element: &Element,
        options: &RevealOptions,
        on_reveal: Callback<()>,
    ) -> Result<Self, HostError> {
        let threshold = options.threshold;
        let state = Rc::new(Cell::new(RevealState::new()));

        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                let mut current = state.get();
                let fired = current.observe(sample, threshold);
                state.set(current);
                if fired {
                    observer.unobserve(&entry.target());
                    on_reveal.emit(());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| HostError::unsupported("IntersectionObserver", err))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[derive(Clone, PartialEq)]
pub struct RevealHandle {
    pub node: NodeRef,
    pub state: RevealState,
}

impl RevealHandle {
    pub fn visible(&self) -> bool {
        self.state.visible
    }
}

fn bind(
    node: &NodeRef,
    options: &RevealOptions,
    state: UseStateSetter<RevealState>,
    on_reveal: Option<Callback<()>>,
) -> Option<RevealObserver> {
    // Not mounted yet: nothing to watch.
    let element = node.cast::<Element>()?;

    let reveal = Callback::from(move |_| {
        state.set(RevealState::revealed());
        if let Some(cb) = &on_reveal {
            cb.emit(());
        }
    });

    if prefers_reduced_motion() {
        reveal.emit(());
        return None;
    }

    match RevealObserver::observe(&element, options, reveal.clone()) {
        Ok(observer) => Some(observer),
        Err(err) => {
            log::warn!("{}; showing content without animation", err);
            reveal.emit(());
            None
        }
    }
}

/// Binds the returned `node` to an element; `state.visible` turns true the
/// first time the element crosses `options.threshold` and stays true.
#[hook]
pub fn use_reveal(options: RevealOptions, on_reveal: Option<Callback<()>>) -> RevealHandle {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::new);

    {
        let node = node.clone();
        let already_visible = state.visible;
        let setter = state.setter();
        use_effect_with_deps(
            move |options: &RevealOptions| {
                let observer = if already_visible {
                    None
                } else {
                    bind(&node, options, setter, on_reveal)
                };
                move || drop(observer)
            },
            options,
        );
    }

    RevealHandle {
        node,
        state: *state,
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub on_reveal: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let handle = use_reveal(RevealOptions::default(), props.on_reveal.clone());

    html! {
        <div
            ref={handle.node.clone()}
            class={handle.state.class()}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
