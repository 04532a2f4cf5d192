//! Browser bindings for the page controller.

pub mod dom;
pub mod events;
pub mod ports;
pub mod timers;

use std::rc::Rc;
use dioxus::logger::tracing::info;

use crate::{
  controller::{market::SeededDrift, Context, PageController},
  utils::{config::SiteConfig, error::AppError},
};
use dom::WebSurface;
use ports::{AlertNotifier, LucideIcons, WebWatcher};
use timers::BrowserScheduler;

/// Builds the controller against the mounted document, attaches every
/// listener and runs the startup sequence.
pub fn boot() -> Result<(), AppError> {
  let config = SiteConfig::embedded()?;
  let surface = Rc::new(WebSurface::new()?);
  let window = surface.window().clone();
  let watcher = Rc::new(WebWatcher::default());

  let ctx = Context {
    surface,
    scheduler: Rc::new(BrowserScheduler::new(window.clone())),
    notifier: Rc::new(AlertNotifier::new(window.clone())),
    icons: Rc::new(LucideIcons::new(window)),
    watcher: watcher.clone(),
    drift: Rc::new(SeededDrift::new(js_sys::Date::now() as u64)),
    config: Rc::new(config),
  };
  let controller = PageController::new(ctx);

  watcher.arm(controller.clone())?;
  events::bind(&controller)?;
  controller.start();
  info!("page controller started");
  Ok(())
}
