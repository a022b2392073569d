//! Tracked timers.
//!
//! Every delayed action runs through [`Timeout`], which owns both the
//! browser timer id and the closure. Dropping or cancelling a `Timeout`
//! clears the timer, so replaced interactions cannot leave stale
//! callbacks firing into a region that has since changed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom::{self, MountError};

/// A cancellable `setTimeout`.
pub struct Timeout {
    id: Cell<Option<i32>>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Run `action` once after `ms` milliseconds, unless cancelled or
    /// dropped first.
    pub fn schedule<F>(ms: u32, action: F) -> Result<Self, MountError>
    where
        F: FnOnce() + 'static,
    {
        let mut action = Some(action);
        let callback = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(f) = action.take() {
                f();
            }
        }));
        let id = dom::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms as i32,
            )
            .map_err(dom::js)?;
        Ok(Self {
            id: Cell::new(Some(id)),
            _callback: callback,
        })
    }

    /// Clear the pending timer. No-op once fired or already cancelled.
    pub fn cancel(&self) {
        if let (Some(id), Ok(window)) = (self.id.take(), dom::window()) {
            window.clear_timeout_with_handle(id);
        }
    }

    /// Let the timer run to completion with no owner. The closure is
    /// leaked; use only for fire-once page-startup work.
    pub fn forget(self) {
        self.id.take();
        std::mem::forget(self);
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Shared slot for an in-flight timer. Scheduling into the slot cancels
/// whatever was pending there.
#[derive(Clone, Default)]
pub struct TimerSlot {
    inner: Rc<RefCell<Option<Timeout>>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending timer (cancelling it) with a fresh one.
    pub fn replace<F>(&self, ms: u32, action: F) -> Result<(), MountError>
    where
        F: FnOnce() + 'static,
    {
        let timeout = Timeout::schedule(ms, action)?;
        // Dropping the previous Timeout cancels it.
        *self.inner.borrow_mut() = Some(timeout);
        Ok(())
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}

/// Resolve after `ms` milliseconds on the host's timer queue.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = dom::window().ok().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// Rate-limit `action` so it runs once the calls stop for `ms`.
pub fn debounce<F>(ms: u32, action: F) -> impl Fn()
where
    F: Fn() + 'static,
{
    let slot = TimerSlot::new();
    let action = Rc::new(action);
    move || {
        let action = Rc::clone(&action);
        if let Err(e) = slot.replace(ms, move || action()) {
            web_sys::console::warn_1(&format!("folio: debounce timer failed: {e}").into());
        }
    }
}

/// Rate-limit `action` to at most one run per `ms` window. The first
/// call in a window runs immediately; the rest are dropped.
pub fn throttle<F>(ms: u32, action: F) -> impl Fn()
where
    F: Fn() + 'static,
{
    let gate_open = Rc::new(Cell::new(true));
    let reset = TimerSlot::new();
    move || {
        if !gate_open.get() {
            return;
        }
        action();
        gate_open.set(false);
        let gate = Rc::clone(&gate_open);
        if let Err(e) = reset.replace(ms, move || gate.set(true)) {
            // Timer failed: reopen immediately rather than latching shut.
            gate_open.set(true);
            web_sys::console::warn_1(&format!("folio: throttle timer failed: {e}").into());
        }
    }
}
