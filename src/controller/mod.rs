//! The page controller: routing, navigation, animations, the market panel
//! and the two forms, all driven against the rendered template.

pub mod animation;
pub mod article;
pub mod forms;
pub mod market;
pub mod navigation;
pub mod router;

use std::rc::Rc;
use dioxus::logger::tracing::{error, info};

use crate::utils::{
  config::SiteConfig,
  ports::{IconRenderer, Notifier, PriceDrift, ViewportWatcher},
  scheduler::Scheduler,
  surface::Surface,
};
use animation::ScrollEffects;
use market::MarketPanel;

/// Everything the page concerns share. Built once at startup.
pub struct Context<S: Surface> {
  pub surface: Rc<S>,
  pub scheduler: Rc<dyn Scheduler>,
  pub notifier: Rc<dyn Notifier>,
  pub icons: Rc<dyn IconRenderer>,
  pub watcher: Rc<dyn ViewportWatcher<S::Node>>,
  pub drift: Rc<dyn PriceDrift>,
  pub config: Rc<SiteConfig>,
}

impl<S: Surface> Clone for Context<S> {
  fn clone(&self) -> Self {
    Context {
      surface: Rc::clone(&self.surface),
      scheduler: Rc::clone(&self.scheduler),
      notifier: Rc::clone(&self.notifier),
      icons: Rc::clone(&self.icons),
      watcher: Rc::clone(&self.watcher),
      drift: Rc::clone(&self.drift),
      config: Rc::clone(&self.config),
    }
  }
}

pub struct PageController<S: Surface> {
  pub ctx: Context<S>,
  pub scroll: Rc<ScrollEffects>,
  pub market: Rc<MarketPanel>,
}

impl<S: Surface> Clone for PageController<S> {
  fn clone(&self) -> Self {
    PageController { ctx: self.ctx.clone(), scroll: Rc::clone(&self.scroll), market: Rc::clone(&self.market) }
  }
}

impl<S: Surface + 'static> PageController<S> {
  pub fn new(ctx: Context<S>) -> Self {
    let market = Rc::new(MarketPanel::new(ctx.config.quotes.clone()));
    PageController { ctx, scroll: Rc::new(ScrollEffects::default()), market }
  }

  /// Startup sequence, run once the template is mounted. Event listeners
  /// are attached by the caller.
  pub fn start(&self) {
    router::handle_route_change(&self.ctx);
    let watched = animation::observe_cards(&self.ctx);
    info!("watching {} cards for entrance animations", watched);
    self.market.load(&self.ctx);

    self.ctx.icons.refresh();
    let icons = Rc::clone(&self.ctx.icons);
    if let Err(e) = self.ctx.scheduler.after(self.ctx.config.timings.icon_refresh(), Box::new(move || icons.refresh())) {
      error!("failed to schedule icon refresh: {}", e);
    }
  }

  /// Late icon pass for when the icon script finishes after startup.
  pub fn on_page_load(&self) {
    self.ctx.icons.refresh();
  }

  pub fn on_hash_change(&self) {
    router::handle_route_change(&self.ctx);
  }

  /// Returns whether the click was taken over and default navigation
  /// must be suppressed.
  pub fn on_link_click(&self, link: &S::Node) -> bool {
    navigation::follow_link(&self.ctx, link)
  }

  pub fn on_cta_click(&self) {
    navigation::go_to(&self.ctx, navigation::CTA_TARGET);
  }

  pub fn on_menu_toggle(&self) {
    navigation::toggle_mobile_menu(&self.ctx);
  }

  pub fn on_scroll(&self) {
    self.scroll.on_scroll(&self.ctx);
  }

  pub fn on_visible(&self, node: &S::Node) {
    animation::reveal(&self.ctx, node);
  }

  pub fn on_contact_submit(&self, form: &S::Node) {
    forms::submit_contact(&self.ctx, form);
  }

  pub fn on_newsletter_submit(&self, form: &S::Node) {
    forms::submit_newsletter(&self.ctx, form);
  }
}
