use dioxus::logger::tracing::{info, warn};

use super::Context;
use crate::utils::surface::Surface;

const TITLE_CLASS: &str = "article-title-full";

/// Writes the stored title for `id` into the article header. Returns
/// whether anything was written.
pub fn load_article<S: Surface>(ctx: &Context<S>, id: &str) -> bool {
  let Some(article) = ctx.config.article(id) else {
    warn!("no article with id {}", id);
    return false;
  };
  let Some(heading) = ctx.surface.first_by_class(TITLE_CLASS) else {
    return false;
  };
  info!("loading article {} by {}", id, article.author);
  ctx.surface.set_text(&heading, &article.title);
  true
}
