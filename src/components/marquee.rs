use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::components::host::{prefers_reduced_motion, AnimationLoop, WindowListener};
use crate::config;
use crate::content::Testimonial;
use crate::motion::marquee::{looped, Direction, MarqueeState};

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub items: Rc<Vec<Testimonial>>,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(config::MARQUEE_SPEED_PX_PER_SEC)]
    pub speed: f64,
    #[prop_or(config::MARQUEE_COPIES)]
    pub copies: usize,
}

type SharedState = Rc<RefCell<MarqueeState>>;

fn measure(track: &Element, state: &SharedState, copies: usize) {
    let width = f64::from(track.scroll_width()) / copies as f64;
    state.borrow_mut().set_loop_width(width);
}

/// Asks for more copies when one copy plus the offset can't cover the
/// visible strip.
fn fit(
    container: &Element,
    state: &SharedState,
    minimum: usize,
    rendered: usize,
    copies: &UseStateSetter<usize>,
) {
    let visible = f64::from(container.client_width());
    let required = state.borrow().required_copies(visible, minimum);
    if required != rendered {
        log::debug!("marquee needs {} copies for {}px, had {}", required, visible, rendered);
        copies.set(required);
    }
}

fn paint(track: &Element, state: &MarqueeState) {
    let _ = track.set_attribute("style", &state.transform_style());
}

fn start_frames(track: Element, state: SharedState) -> Option<AnimationLoop> {
    let started = AnimationLoop::start(move |timestamp| {
        let moved = state.borrow_mut().tick(timestamp);
        if moved {
            paint(&track, &state.borrow());
        }
        true
    });
    match started {
        Ok(frames) => Some(frames),
        Err(err) => {
            log::warn!("{}; marquee stays static", err);
            None
        }
    }
}

struct Layout {
    container: Element,
    track: Element,
    minimum: usize,
    rendered: usize,
    copies: UseStateSetter<usize>,
}

impl Layout {
    fn refresh(&self, state: &SharedState) {
        measure(&self.track, state, self.rendered);
        paint(&self.track, &state.borrow());
        fit(&self.container, state, self.minimum, self.rendered, &self.copies);
    }
}

fn watch_resize(layout: Rc<Layout>, state: SharedState) -> Option<WindowListener> {
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let listener = WindowListener::new("resize", move || {
        let layout = layout.clone();
        let state = state.clone();
        let timeout = Timeout::new(config::MARQUEE_RESIZE_DEBOUNCE_MS, move || {
            layout.refresh(&state);
        });
        // Replacing the previous timeout cancels it.
        *pending.borrow_mut() = Some(timeout);
    });
    match listener {
        Ok(listener) => Some(listener),
        Err(err) => {
            log::warn!("{}; marquee won't re-measure on resize", err);
            None
        }
    }
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let container = use_node_ref();
    let track = use_node_ref();
    let minimum = props.copies.max(2);
    let copies = use_state_eq(|| minimum);
    let state: SharedState = {
        let (count, direction, speed) = (props.items.len(), props.direction, props.speed);
        use_mut_ref(move || MarqueeState::new(count, direction, speed))
    };

    {
        let container = container.clone();
        let track = track.clone();
        let state = state.clone();
        let setter = copies.setter();
        use_effect_with_deps(
            move |&(count, direction, speed, minimum, rendered): &(
                usize,
                Direction,
                f64,
                usize,
                usize,
            )| {
                // A new copy count keeps the current offset; a new track starts over.
                if !state.borrow().configured_for(count, direction, speed) {
                    *state.borrow_mut() = MarqueeState::new(count, direction, speed);
                }
                let mut frames = None;
                let mut resize = None;

                if count > 0 {
                    if let (Some(container), Some(track)) =
                        (container.cast::<Element>(), track.cast::<Element>())
                    {
                        let layout = Rc::new(Layout {
                            container,
                            track,
                            minimum,
                            rendered,
                            copies: setter,
                        });
                        layout.refresh(&state);
                        if !prefers_reduced_motion() {
                            frames = start_frames(layout.track.clone(), state.clone());
                        }
                        resize = watch_resize(layout, state);
                    }
                }

                move || {
                    drop(frames);
                    drop(resize);
                }
            },
            (props.items.len(), props.direction, props.speed, minimum, *copies),
        );
    }

    let on_pointer_down = {
        let state = state.clone();
        let track = track.clone();
        Callback::from(move |e: PointerEvent| {
            // Only the primary pointer's main button drags.
            if !e.is_primary() || e.button() != 0 {
                return;
            }
            let grabbed = state
                .borrow_mut()
                .pointer_down(e.pointer_id(), f64::from(e.client_x()), e.time_stamp());
            if grabbed {
                if let Some(el) = track.cast::<Element>() {
                    let _ = el.set_pointer_capture(e.pointer_id());
                }
            }
        })
    };

    let on_pointer_move = {
        let state = state.clone();
        let track = track.clone();
        Callback::from(move |e: PointerEvent| {
            let moved = state
                .borrow_mut()
                .pointer_move(e.pointer_id(), f64::from(e.client_x()), e.time_stamp());
            if moved.is_some() {
                e.prevent_default();
                if let Some(el) = track.cast::<Element>() {
                    paint(&el, &state.borrow());
                }
            }
        })
    };

    let on_pointer_up = {
        let state = state.clone();
        let track = track.clone();
        Callback::from(move |e: PointerEvent| {
            let released = state.borrow_mut().pointer_up(e.pointer_id(), e.time_stamp());
            if released {
                if let Some(el) = track.cast::<Element>() {
                    let _ = el.release_pointer_capture(e.pointer_id());
                }
            }
        })
    };

    let cards = looped(&props.items, *copies);

    html! {
        <div ref={container} class="marquee">
            <div
                ref={track}
                class="marquee-track"
                onpointerdown={on_pointer_down}
                onpointermove={on_pointer_move}
                onpointerup={on_pointer_up.clone()}
                onpointercancel={on_pointer_up.clone()}
                onpointerleave={on_pointer_up}
            >
                { for cards.iter().enumerate().map(|(i, t)| html! {
                    <TestimonialCard key={i} testimonial={t.clone()} />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="t-card">
            <div class="t-tag">{&t.tag}</div>
            <p class="t-quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
            <div class="t-author">
                <div class="t-initials">{&t.initials}</div>
                <div>
                    <div class="t-name">{&t.name}</div>
                    <div class="t-company">{&t.company}</div>
                </div>
            </div>
        </div>
    }
}
