use std::{cell::Cell, rc::Rc};
use dioxus::logger::tracing::{error, warn};

use super::Context;
use crate::utils::surface::Surface;

pub const CARD_CLASSES: [&str; 3] = ["article-card", "stock-card", "about-section"];
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
const ANIMATED: &str = "animated";
const HEADER_CLASS: &str = "header";

/// Registers every card in the template with the viewport watcher.
pub fn observe_cards<S: Surface>(ctx: &Context<S>) -> usize {
  let mut watched = 0;
  for class in CARD_CLASSES {
    for card in ctx.surface.by_class(class) {
      ctx.watcher.observe(&card);
      watched += 1;
    }
  }
  watched
}

/// Plays the entrance animation once and stops watching the element.
pub fn reveal<S: Surface>(ctx: &Context<S>, node: &S::Node) {
  ctx.watcher.unobserve(node);
  if ctx.surface.has_class(node, ANIMATED) {
    return;
  }
  if let Err(e) = ctx.surface.set_style(node, "animation-play-state", "running") {
    warn!("could not start card animation: {}", e);
  }
  ctx.surface.add_class(node, ANIMATED);
}

/// Header shading on scroll, at most one pending update per frame.
#[derive(Debug, Default)]
pub struct ScrollEffects {
  ticking: Cell<bool>,
}

impl ScrollEffects {
  pub fn is_ticking(&self) -> bool {
    self.ticking.get()
  }

  pub fn on_scroll<S: Surface + 'static>(self: &Rc<Self>, ctx: &Context<S>) {
    if self.ticking.replace(true) {
      return;
    }
    let effects = Rc::clone(self);
    let frame_ctx = ctx.clone();
    if let Err(e) = ctx.scheduler.next_frame(Box::new(move || effects.update_header(&frame_ctx))) {
      error!("failed to request animation frame: {}", e);
      self.update_header(ctx);
    }
  }

  pub fn update_header<S: Surface>(&self, ctx: &Context<S>) {
    let shades = &ctx.config.header;
    if let Some(header) = ctx.surface.first_by_class(HEADER_CLASS) {
      let shade = if ctx.surface.scroll_y() > shades.threshold_px { &shades.solid } else { &shades.translucent };
      if let Err(e) = ctx.surface.set_style(&header, "background", shade) {
        warn!("could not shade header: {}", e);
      }
    }
    self.ticking.set(false);
  }
}
