use dioxus::logger::tracing::{error, info};

use super::Context;
use crate::utils::surface::Surface;

pub const CTA_CLASS: &str = "cta-button";
pub const CTA_TARGET: &str = "#articles";
pub const MENU_TOGGLE_CLASS: &str = "mobile-toggle";
const NAV_CLASS: &str = "nav";
const MENU_OPEN: &str = "mobile-active";

/// Rewrites the address fragment to the link's target instead of letting
/// the browser navigate. The router picks the change up from `hashchange`.
pub fn follow_link<S: Surface>(ctx: &Context<S>, link: &S::Node) -> bool {
  match ctx.surface.attr(link, "href") {
    Some(href) if href.starts_with('#') => {
      go_to(ctx, &href);
      true
    },
    _ => false,
  }
}

pub fn go_to<S: Surface>(ctx: &Context<S>, fragment: &str) {
  info!("navigating to {}", fragment);
  if let Err(e) = ctx.surface.set_hash(fragment) {
    error!("failed to set location hash: {}", e);
  }
}

pub fn toggle_mobile_menu<S: Surface>(ctx: &Context<S>) {
  if let Some(nav) = ctx.surface.first_by_class(NAV_CLASS) {
    ctx.surface.toggle_class(&nav, MENU_OPEN);
  }
}
