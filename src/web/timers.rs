use std::{cell::{Cell, RefCell}, collections::HashMap, rc::Rc, time::Duration};
use js_sys::wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Window;

use crate::utils::{error::AppError, scheduler::{RepeatingTask, Scheduler, Task, TimerHandle}};

enum Armed {
  Timeout(i32),
  Interval(i32, Closure<dyn FnMut()>),
  Frame(i32),
}

type ArmedTimers = Rc<RefCell<HashMap<TimerHandle, Armed>>>;

fn timer_err(e: impl std::fmt::Debug) -> AppError {
  AppError::TimerError(format!("{:?}", e))
}

fn millis(d: Duration) -> i32 {
  i32::try_from(d.as_millis()).unwrap_or(i32::MAX)
}

/// `setTimeout`, `setInterval` and `requestAnimationFrame` on the window.
pub struct BrowserScheduler {
  window: Window,
  next_id: Cell<u64>,
  armed: ArmedTimers,
}

impl BrowserScheduler {
  pub fn new(window: Window) -> Self {
    BrowserScheduler { window, next_id: Cell::new(0), armed: Rc::new(RefCell::new(HashMap::new())) }
  }

  fn next_handle(&self) -> TimerHandle {
    let id = self.next_id.get() + 1;
    self.next_id.set(id);
    TimerHandle(id)
  }

  // one-shot callback that forgets its own bookkeeping before running
  fn once(&self, handle: TimerHandle, task: Task) -> js_sys::wasm_bindgen::JsValue {
    let armed = Rc::clone(&self.armed);
    Closure::once_into_js(move || {
      armed.borrow_mut().remove(&handle);
      task();
    })
  }
}

impl Scheduler for BrowserScheduler {
  fn after(&self, delay: Duration, task: Task) -> Result<TimerHandle, AppError> {
    let handle = self.next_handle();
    let callback = self.once(handle, task);
    let id = self.window
      .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis(delay))
      .map_err(timer_err)?;
    self.armed.borrow_mut().insert(handle, Armed::Timeout(id));
    Ok(handle)
  }

  fn every(&self, period: Duration, mut task: RepeatingTask) -> Result<TimerHandle, AppError> {
    let handle = self.next_handle();
    let callback = Closure::<dyn FnMut()>::new(move || task());
    let id = self.window
      .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), millis(period))
      .map_err(timer_err)?;
    self.armed.borrow_mut().insert(handle, Armed::Interval(id, callback));
    Ok(handle)
  }

  fn next_frame(&self, task: Task) -> Result<TimerHandle, AppError> {
    let handle = self.next_handle();
    let callback = self.once(handle, task);
    let id = self.window.request_animation_frame(callback.unchecked_ref()).map_err(timer_err)?;
    self.armed.borrow_mut().insert(handle, Armed::Frame(id));
    Ok(handle)
  }

  fn cancel(&self, handle: TimerHandle) {
    let removed = self.armed.borrow_mut().remove(&handle);
    match removed {
      Some(Armed::Timeout(id)) => self.window.clear_timeout_with_handle(id),
      Some(Armed::Interval(id, _callback)) => self.window.clear_interval_with_handle(id),
      Some(Armed::Frame(id)) => {
        let _ = self.window.cancel_animation_frame(id);
      },
      None => {}
    }
  }
}
