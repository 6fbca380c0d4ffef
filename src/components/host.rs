//! RAII guards around browser registrations. Each guard owns its JS closure
//! and releases the registration when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::HostError;

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// `requestAnimationFrame` loop. The frame callback returns `false` to stop
/// scheduling; dropping the loop cancels the pending frame.
pub struct AnimationLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, HostError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame = {
            let window = window.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::wrap(Box::new(move |timestamp: f64| {
                pending.set(None);
                if !on_frame(timestamp) {
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => log::warn!(
                            "{}",
                            HostError::unsupported("requestAnimationFrame", err)
                        ),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .map_err(|err| HostError::unsupported("requestAnimationFrame", err))?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(frame);

        Ok(Self {
            window,
            pending,
            callback,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure -> Rc -> closure cycle.
        self.callback.borrow_mut().take();
    }
}

/// A window event listener removed on drop, like the scroll listeners the
/// nav installs in its effect.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, handler: F) -> Result<Self, HostError>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| HostError::unsupported("addEventListener", err))?;
        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
