use std::cell::RefCell;
use dioxus::logger::tracing::{error, warn};
use js_sys::{wasm_bindgen::{closure::Closure, JsCast, JsValue}, Array, Function, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use super::dom::WebSurface;
use crate::{
  controller::{animation::{ROOT_MARGIN, THRESHOLD}, PageController},
  utils::{error::AppError, ports::{IconRenderer, Notifier, ViewportWatcher}},
};

pub struct AlertNotifier {
  window: Window,
}

impl AlertNotifier {
  pub fn new(window: Window) -> Self {
    AlertNotifier { window }
  }
}

impl Notifier for AlertNotifier {
  fn notify(&self, message: &str) {
    if let Err(e) = self.window.alert_with_message(message) {
      error!("alert failed: {:?}", e);
    }
  }
}

/// Calls `lucide.createIcons()` when the CDN script has loaded.
pub struct LucideIcons {
  window: Window,
}

impl LucideIcons {
  pub fn new(window: Window) -> Self {
    LucideIcons { window }
  }
}

impl IconRenderer for LucideIcons {
  fn refresh(&self) {
    let Ok(lucide) = Reflect::get(&self.window, &JsValue::from_str("lucide")) else { return };
    if lucide.is_undefined() || lucide.is_null() {
      return;
    }
    let Ok(create) = Reflect::get(&lucide, &JsValue::from_str("createIcons")) else { return };
    if let Some(create) = create.dyn_ref::<Function>() {
      if let Err(e) = create.call0(&lucide) {
        warn!("lucide.createIcons failed: {:?}", e);
      }
    }
  }
}

/// `IntersectionObserver` wrapper; inert until armed with the controller.
#[derive(Default)]
pub struct WebWatcher {
  observer: RefCell<Option<IntersectionObserver>>,
}

impl WebWatcher {
  pub fn arm(&self, controller: PageController<WebSurface>) -> Result<(), AppError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _observer: IntersectionObserver| {
      for entry in entries.iter() {
        let entry = entry.unchecked_into::<IntersectionObserverEntry>();
        if entry.is_intersecting() {
          controller.on_visible(&entry.target());
        }
      }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
      .map_err(|e| AppError::ObserverError(format!("{:?}", e)))?;
    // lives as long as the page
    callback.forget();
    *self.observer.borrow_mut() = Some(observer);
    Ok(())
  }
}

impl ViewportWatcher<Element> for WebWatcher {
  fn observe(&self, node: &Element) {
    if let Some(observer) = self.observer.borrow().as_ref() {
      observer.observe(node);
    }
  }

  fn unobserve(&self, node: &Element) {
    if let Some(observer) = self.observer.borrow().as_ref() {
      observer.unobserve(node);
    }
  }
}
