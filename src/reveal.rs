use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use serde::Serialize;
use thiserror::Error;

use crate::schedule::CancelHandle;

#[derive(Error, Debug)]
pub enum RevealError {
    #[error("Couldn't encode scroll reveal options")]
    Encode(#[from] serde_json::Error),
}

/// Options handed to the scroll-animation library's `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevealOptions {
    pub once: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

impl RevealOptions {
    pub const HOME: Self = Self {
        once: true,
        offset: Some(10),
    };
    pub const ABOUT: Self = Self {
        once: false,
        offset: None,
    };

    pub fn to_json(&self) -> Result<String, RevealError> {
        Ok(serde_json::to_string(self)?)
    }
}

pub trait ScrollAnimator {
    fn init(&self, options: &RevealOptions);
}

pub trait Viewport {
    /// Calls `listener` on every resize until the handle is cancelled or dropped.
    fn on_resize(&self, listener: Box<dyn Fn()>) -> CancelHandle;
}

/// Scroll reveal configured for one mounted view. Dropping it removes the resize listener.
#[derive(Debug)]
pub struct ScrollReveal {
    options: RevealOptions,
    resize: Option<CancelHandle>,
}

impl ScrollReveal {
    pub fn mount(animator: &dyn ScrollAnimator, options: RevealOptions) -> Self {
        log::debug!("initializing scroll reveal with {options:?}");
        animator.init(&options);
        Self {
            options,
            resize: None,
        }
    }

    /// Like [`ScrollReveal::mount`], then re-initializes once per viewport resize.
    pub fn mount_responsive(
        animator: Rc<dyn ScrollAnimator>,
        options: RevealOptions,
        viewport: &dyn Viewport,
    ) -> Self {
        let mut reveal = Self::mount(animator.as_ref(), options);
        reveal.resize = Some(viewport.on_resize(Box::new(move || animator.init(&options))));
        reveal
    }

    pub fn options(&self) -> RevealOptions {
        self.options
    }

    pub fn is_responsive(&self) -> bool {
        self.resize.is_some()
    }

    pub fn unmount(self) {
        drop(self);
    }
}

type Listener = Rc<dyn Fn()>;

/// In-memory viewport whose resize events are fired by calling [`VirtualViewport::resize`].
#[derive(Clone, Default)]
pub struct VirtualViewport {
    listeners: Rc<RefCell<Vec<(u64, Listener)>>>,
    next_id: Rc<Cell<u64>>,
}

impl VirtualViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resize(&self) {
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Viewport for VirtualViewport {
    fn on_resize(&self, listener: Box<dyn Fn()>) -> CancelHandle {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));
        let listeners = Rc::downgrade(&self.listeners);
        CancelHandle::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(inline_js = "
export function aos_init(options) {
    if (!window.AOS) {
        return false;
    }
    window.AOS.init(JSON.parse(options));
    return true;
}")]
extern "C" {
    fn aos_init(options: &str) -> bool;
}

/// The AOS (animate on scroll) library loaded on the page as `window.AOS`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Aos;

#[cfg(feature = "hydrate")]
impl ScrollAnimator for Aos {
    fn init(&self, options: &RevealOptions) {
        let options = match options.to_json() {
            Ok(options) => options,
            Err(err) => {
                log::error!("{err}");
                return;
            }
        };
        if !aos_init(&options) {
            log::warn!("AOS is not loaded, skipping scroll reveal init");
        }
    }
}

/// The browser window as a resize event source.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewport;

#[cfg(feature = "hydrate")]
impl Viewport for BrowserViewport {
    fn on_resize(&self, listener: Box<dyn Fn()>) -> CancelHandle {
        use leptos_use::{use_event_listener, use_window};

        let stop = use_event_listener(use_window(), leptos::ev::resize, move |_| listener());
        CancelHandle::new(move || stop())
    }
}
