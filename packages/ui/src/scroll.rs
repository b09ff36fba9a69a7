//! Scroll event plumbing.
//!
//! A [`ScrollSource`] hands out a [`ScrollSubscription`] per registered
//! handler; dropping the subscription deregisters the handler. [`attach`]
//! connects a source to a [`ScrollTracker`] so every scroll event recomputes
//! the tracker state against a [`Viewport`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::tracker::{ScrollState, ScrollTracker, Viewport};

pub type ScrollHandler = Rc<dyn Fn()>;

pub trait ScrollSource {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription;
}

/// Keeps a scroll handler registered until dropped.
#[must_use = "the handler is deregistered as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release, for sources that could not
    /// register a handler.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// In-memory scroll source. Events are delivered only when [`ScrollBus::emit`]
/// is called, so on targets without a browser window it never fires.
#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Rc<RefCell<BusInner>>,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(u64, ScrollHandler)>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one scroll event to every registered handler.
    pub fn emit(&self) {
        // Snapshot so handlers may subscribe or unsubscribe while running.
        let handlers: Vec<ScrollHandler> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| h.clone())
            .collect();
        for handler in handlers {
            handler();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl ScrollSource for ScrollBus {
    fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.handlers.push((id, handler));
            id
        };
        let inner = Rc::downgrade(&self.inner);
        ScrollSubscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().handlers.retain(|(h, _)| *h != id);
            }
        })
    }
}

/// Registers a handler on `source` that feeds `viewport` into `tracker` on
/// every scroll event and calls `on_change` when the state changes.
pub fn attach<S, V, F>(
    source: &S,
    viewport: V,
    tracker: Rc<RefCell<ScrollTracker>>,
    on_change: F,
) -> ScrollSubscription
where
    S: ScrollSource + ?Sized,
    V: Viewport + 'static,
    F: Fn(ScrollState) + 'static,
{
    source.subscribe(Rc::new(move || {
        let changed = tracker.borrow_mut().update(&viewport);
        if let Some(state) = changed {
            on_change(state);
        }
    }))
}

#[cfg(target_arch = "wasm32")]
pub use browser::{WindowScroll, WindowViewport};

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{closure::Closure, JsCast};

    use super::{ScrollHandler, ScrollSource, ScrollSubscription};
    use crate::{Section, Viewport};

    /// `scroll` events on the browser window.
    pub struct WindowScroll;

    impl ScrollSource for WindowScroll {
        fn subscribe(&self, handler: ScrollHandler) -> ScrollSubscription {
            let Some(window) = web_sys::window() else {
                return ScrollSubscription::noop();
            };
            let callback = Closure::<dyn Fn()>::new(move || handler());
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(?err, "scroll listener registration failed");
                return ScrollSubscription::noop();
            }
            tracing::info!("scroll listener registered");

            ScrollSubscription::new(move || {
                match window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    Ok(()) => tracing::info!("scroll listener removed"),
                    Err(err) => tracing::warn!(?err, "scroll listener removal failed"),
                }
            })
        }
    }

    /// Live geometry of the browser window and the section elements.
    pub struct WindowViewport;

    impl Viewport for WindowViewport {
        fn scroll_offset(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0)
        }

        fn height(&self) -> f64 {
            web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0)
        }

        fn section_top(&self, section: Section) -> Option<f64> {
            let element = web_sys::window()?
                .document()?
                .get_element_by_id(section.id())?;
            Some(element.get_bounding_client_rect().top())
        }
    }
}
