//! Browser frame scheduling via `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::scheduler::FrameScheduler;

/// Slot holding the frame callback. Filled after the scheduler is built,
/// since the callback itself needs to reach the scheduler's owner.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Schedules frames with `window.requestAnimationFrame`
pub struct AnimationFrameScheduler {
    callback: FrameCallback,
    request_id: Option<i32>,
}

impl AnimationFrameScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self {
            callback,
            request_id: None,
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule_next_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, cannot schedule frame");
            return;
        };
        let callback = self.callback.borrow();
        let Some(closure) = callback.as_ref() else {
            log::error!("Frame callback not installed");
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_scheduled_frame(&mut self) {
        if let (Some(id), Some(window)) = (self.request_id.take(), web_sys::window()) {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
