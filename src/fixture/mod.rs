//! Test doubles for every port plus the site markup as an in-memory page.

pub mod clock;
pub mod ports;

use std::rc::Rc;

use crate::{
  controller::{Context, PageController},
  utils::{config::SiteConfig, surface::Markup},
};
use clock::VirtualClock;
use dom::{FixtureDom, NodeId};
use ports::{CountingIcons, RecordingNotifier, RecordingWatcher, ScriptedDrift};

pub struct Rig {
  pub dom: Rc<FixtureDom>,
  pub clock: Rc<VirtualClock>,
  pub notifier: Rc<RecordingNotifier>,
  pub icons: Rc<CountingIcons>,
  pub watcher: Rc<RecordingWatcher<NodeId>>,
  pub drift: Rc<ScriptedDrift>,
  pub ctx: Context<FixtureDom>,
}

impl Rig {
  /// The full site template.
  pub fn new() -> Self {
    let dom = FixtureDom::new();
    site_markup(&dom);
    Self::with_dom(dom)
  }

  pub fn with_dom(dom: FixtureDom) -> Self {
    let dom = Rc::new(dom);
    let clock = Rc::new(VirtualClock::new());
    let notifier = Rc::new(RecordingNotifier::default());
    let icons = Rc::new(CountingIcons::default());
    let watcher = Rc::new(RecordingWatcher::new());
    let drift = Rc::new(ScriptedDrift::default());
    let config = SiteConfig::embedded().expect("embedded site config parses");
    let ctx = Context {
      surface: dom.clone(),
      scheduler: clock.clone(),
      notifier: notifier.clone(),
      icons: icons.clone(),
      watcher: watcher.clone(),
      drift: drift.clone(),
      config: Rc::new(config),
    };
    Rig { dom, clock, notifier, icons, watcher, drift, ctx }
  }

  pub fn controller(&self) -> PageController<FixtureDom> {
    PageController::new(self.ctx.clone())
  }

  pub fn node(&self, id: &str) -> NodeId {
    use crate::utils::surface::Surface;
    self.dom.by_id(id).unwrap_or_else(|| panic!("fixture has no #{id}"))
  }
}

fn nav_link(page: &str, label: &str) -> Markup {
  Markup::new("a").class("nav-link").attr("href", &format!("#{page}")).text(label)
}

fn page(id: &str) -> Markup {
  Markup::new("section").class("page").attr("id", id)
}

fn article_card(id: &str) -> Markup {
  Markup::new("div").class("article-card")
    .child(Markup::new("a").class("article-link").attr("href", &format!("#article/{id}")).text("Read more"))
}

pub fn site_markup(dom: &FixtureDom) {
  let root = dom.root();
  dom.build(root, Markup::new("header").class("header")
    .child(Markup::new("nav").class("nav")
      .child(nav_link("home", "Home"))
      .child(nav_link("articles", "Articles"))
      .child(nav_link("about", "About"))
      .child(nav_link("contact", "Contact")))
    .child(Markup::new("button").class("mobile-toggle")));

  dom.build(root, page("home")
    .child(Markup::new("button").class("cta-button").text("Explore Articles"))
    .child(Markup::new("div").class("stocks-grid").attr("id", "stocksGrid").text("Loading market data..."))
    .child(article_card("1")));
  dom.build(root, page("articles").child(article_card("1")).child(article_card("2")));
  dom.build(root, page("about")
    .child(Markup::new("div").class("about-section").attr("id", "mission"))
    .child(Markup::new("div").class("about-section")));
  dom.build(root, page("contact")
    .child(Markup::new("form").class("contact-form").attr("id", "contact-form")
      .child(Markup::new("input").attr("name", "name").attr("type", "text").attr("id", "contact-name"))
      .child(Markup::new("input").attr("name", "email").attr("type", "email").attr("id", "contact-email"))
      .child(Markup::new("textarea").attr("name", "message").attr("id", "contact-message"))
      .child(Markup::new("button").class("submit-button").attr("type", "submit").attr("id", "contact-submit").text("Send Message"))));
  dom.build(root, page("privacy"));
  dom.build(root, page("terms"));
  dom.build(root, page("article")
    .child(Markup::new("h1").class("article-title-full").attr("id", "article-title").text("Loading...")));

  dom.build(root, Markup::new("footer").class("footer")
    .child(Markup::new("a").attr("href", "#privacy").text("Privacy"))
    .child(Markup::new("a").attr("href", "#terms").text("Terms"))
    .child(Markup::new("form").class("newsletter-form").attr("id", "newsletter-form")
      .child(Markup::new("input").attr("type", "email").attr("name", "email").attr("id", "newsletter-email"))
      .child(Markup::new("button").attr("type", "submit").attr("id", "newsletter-submit").text("Subscribe"))));
}
