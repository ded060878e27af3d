// Countdown built on window.setInterval, evaluated against wall-clock time so a
// throttled background tab still finishes on schedule.
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::Callback;

use crate::error::BrowserError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownEvent {
    Tick { remaining_ms: u32 },
    /// Less than one interval left: no tick, the next poll finishes.
    Pending,
    Finished,
}

/// Remaining time relative to a fixed deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountdownClock {
    stop_at_ms: f64,
    interval_ms: u32,
}

impl CountdownClock {
    pub fn new(started_at_ms: f64, duration_ms: u32, interval_ms: u32) -> Self {
        Self {
            stop_at_ms: started_at_ms + duration_ms as f64,
            interval_ms,
        }
    }

    pub fn poll(&self, now_ms: f64) -> CountdownEvent {
        let left = self.stop_at_ms - now_ms;
        if left <= 0.0 {
            return CountdownEvent::Finished;
        }
        let remaining_ms = left.ceil().min(u32::MAX as f64) as u32;
        if remaining_ms < self.interval_ms {
            CountdownEvent::Pending
        } else {
            CountdownEvent::Tick { remaining_ms }
        }
    }
}

/// A countdown that has not been started yet.
pub struct Countdown {
    duration_ms: u32,
    interval_ms: u32,
    on_tick: Callback<u32>,
    on_finish: Callback<()>,
}

impl Countdown {
    pub fn new(
        duration_ms: u32,
        interval_ms: u32,
        on_tick: Callback<u32>,
        on_finish: Callback<()>,
    ) -> Self {
        Self {
            duration_ms,
            interval_ms,
            on_tick,
            on_finish,
        }
    }

    /// Fires the first evaluation immediately, then every `interval_ms`.
    pub fn start(self) -> Result<CountdownHandle, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let clock = CountdownClock::new(js_sys::Date::now(), self.duration_ms, self.interval_ms);
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let done = Rc::new(Cell::new(false));

        let evaluate: Rc<dyn Fn()> = {
            let window = window.clone();
            let interval_id = interval_id.clone();
            let done = done.clone();
            let on_tick = self.on_tick.clone();
            let on_finish = self.on_finish.clone();
            Rc::new(move || {
                if done.get() {
                    return;
                }
                match clock.poll(js_sys::Date::now()) {
                    CountdownEvent::Tick { remaining_ms } => on_tick.emit(remaining_ms),
                    CountdownEvent::Pending => {}
                    CountdownEvent::Finished => {
                        done.set(true);
                        if let Some(id) = interval_id.take() {
                            window.clear_interval_with_handle(id);
                        }
                        on_finish.emit(());
                    }
                }
            })
        };

        let tick = {
            let evaluate = evaluate.clone();
            Closure::wrap(Box::new(move || evaluate()) as Box<dyn FnMut()>)
        };
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            self.interval_ms.min(i32::MAX as u32) as i32,
        )?;
        interval_id.set(Some(id));
        log::debug!("Countdown started: {} ms", self.duration_ms);

        let handle = CountdownHandle {
            window,
            interval_id,
            done,
            _tick: tick,
        };
        evaluate();
        Ok(handle)
    }
}

/// Live countdown. Dropping it cancels the countdown.
pub struct CountdownHandle {
    window: web_sys::Window,
    interval_id: Rc<Cell<Option<i32>>>,
    done: Rc<Cell<bool>>,
    _tick: Closure<dyn FnMut()>,
}

impl CountdownHandle {
    pub fn cancel(&mut self) {
        self.done.set(true);
        if let Some(id) = self.interval_id.take() {
            self.window.clear_interval_with_handle(id);
            log::debug!("Countdown cancelled");
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
