use dioxus::logger::tracing::info;

use super::{article, Context};
use crate::utils::surface::Surface;

const PAGE_CLASS: &str = "page";
const NAV_LINK_CLASS: &str = "nav-link";
const ACTIVE: &str = "active";
pub const ARTICLE_PAGE: &str = "article";

#[derive(Debug, Clone, PartialEq)]
pub struct PageRoute {
  pub page_key: String,
  pub sub_id: Option<String>,
}

impl PageRoute {
  /// `#<page>` or `#<page>/<id>`; an empty fragment means `default_page`.
  pub fn from_fragment(fragment: &str, default_page: &str) -> Self {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    let raw = if raw.is_empty() { default_page } else { raw };
    match raw.split_once('/') {
      Some((page_key, sub_id)) => PageRoute {
        page_key: page_key.to_string(),
        sub_id: (!sub_id.is_empty()).then(|| sub_id.to_string()),
      },
      None => PageRoute { page_key: raw.to_string(), sub_id: None },
    }
  }
}

pub fn handle_route_change<S: Surface>(ctx: &Context<S>) {
  let surface = &*ctx.surface;
  let route = PageRoute::from_fragment(&surface.hash(), &ctx.config.default_page);
  info!("route change: {:?}", route);

  for section in surface.by_class(PAGE_CLASS) {
    surface.remove_class(&section, ACTIVE);
  }
  let links = surface.by_class(NAV_LINK_CLASS);
  for link in &links {
    surface.remove_class(link, ACTIVE);
  }

  if let Some(section) = surface.by_id(&route.page_key) {
    surface.add_class(&section, ACTIVE);
    let target = format!("#{}", route.page_key);
    if let Some(link) = links.iter().find(|l| surface.attr(l, "href").as_deref() == Some(target.as_str())) {
      surface.add_class(link, ACTIVE);
    }
  }

  if route.page_key == ARTICLE_PAGE {
    if let Some(id) = &route.sub_id {
      article::load_article(ctx, id);
    }
  }

  surface.set_title(ctx.config.title_for(&route.page_key));
  surface.scroll_to_top();
}
