//! `setTimeout`-backed timer.

use std::time::Duration;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::timer::Timer;

pub struct WindowTimer {
    window: Window,
}

impl WindowTimer {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Timer for WindowTimer {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || callback());
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);

        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            warn!(error = ?err, "could not schedule callback");
        }
    }
}
