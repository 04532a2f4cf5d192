use js_sys::wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Event, EventTarget};

use super::dom::WebSurface;
use crate::{
  controller::{forms::{CONTACT_FORM_CLASS, NEWSLETTER_FORM_CLASS}, navigation::{CTA_CLASS, MENU_TOGGLE_CLASS}, PageController},
  utils::{error::AppError, surface::Surface},
};

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), AppError> {
  let callback = Closure::<dyn FnMut(Event)>::new(handler);
  target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
    .map_err(|e| AppError::ListenerError(format!("{}: {:?}", kind, e)))?;
  // listeners are never removed
  callback.forget();
  Ok(())
}

const ICON_SCRIPT: &str = "script[src*='lucide']";

pub fn bind(controller: &PageController<WebSurface>) -> Result<(), AppError> {
  let surface = &*controller.ctx.surface;
  let window = surface.window();

  let c = controller.clone();
  listen(window, "hashchange", move |_evt| c.on_hash_change())?;

  let c = controller.clone();
  listen(window, "scroll", move |_evt| c.on_scroll())?;

  let c = controller.clone();
  listen(window, "load", move |_evt| c.on_page_load())?;

  // the icon script is injected at mount and may land after window load
  if let Ok(Some(script)) = surface.document().query_selector(ICON_SCRIPT) {
    let c = controller.clone();
    listen(&script, "load", move |_evt| c.on_page_load())?;
  }

  for link in surface.fragment_links() {
    let c = controller.clone();
    let target = link.clone();
    listen(&link, "click", move |evt| {
      if c.on_link_click(&target) {
        evt.prevent_default();
      }
    })?;
  }

  if let Some(cta) = surface.first_by_class(CTA_CLASS) {
    let c = controller.clone();
    listen(&cta, "click", move |_evt| c.on_cta_click())?;
  }

  if let Some(toggle) = surface.first_by_class(MENU_TOGGLE_CLASS) {
    let c = controller.clone();
    listen(&toggle, "click", move |_evt| c.on_menu_toggle())?;
  }

  if let Some(form) = surface.first_by_class(CONTACT_FORM_CLASS) {
    let c = controller.clone();
    let target = form.clone();
    listen(&form, "submit", move |evt| {
      evt.prevent_default();
      c.on_contact_submit(&target);
    })?;
  }

  if let Some(form) = surface.first_by_class(NEWSLETTER_FORM_CLASS) {
    let c = controller.clone();
    let target = form.clone();
    listen(&form, "submit", move |evt| {
      evt.prevent_default();
      c.on_newsletter_submit(&target);
    })?;
  }

  Ok(())
}
