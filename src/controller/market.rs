//! Mock market ticker: staggered row insertion and periodic price drift.

use std::{cell::{Cell, RefCell}, rc::Rc};
use dioxus::logger::tracing::{error, info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::Context;
use crate::utils::{error::AppError, ports::PriceDrift, scheduler::TimerHandle, surface::{Markup, Surface}};

pub const GRID_ID: &str = "stocksGrid";
pub const ROW_CLASS: &str = "stock-card";
const MIN_PRICE: Decimal = dec!(0.01);
const ENTRANCE: &str = "slideInUp 0.3s ease";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
  pub symbol: String,
  pub name: String,
  pub price: Decimal,
  pub change: String,
  pub change_percent: String,
  pub is_positive: bool,
}

fn round2(value: Decimal) -> Decimal {
  value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn signed(value: Decimal, positive: bool) -> String {
  format!("{}{:.2}", if positive { "+" } else { "-" }, value.abs())
}

impl Quote {
  /// Moves the price by `perturbation`, floored at one cent, and recomputes
  /// the change figures against the previous price.
  pub fn drift(&mut self, perturbation: f64) {
    let step = Decimal::from_f64(perturbation).unwrap_or_default();
    let previous = self.price;
    let next = round2((previous + step).max(MIN_PRICE));
    let delta = next - previous;
    let percent = if previous.is_zero() { Decimal::ZERO } else { round2(delta / previous * dec!(100)) };

    self.price = next;
    self.is_positive = delta >= Decimal::ZERO;
    self.change = signed(delta, self.is_positive);
    self.change_percent = format!("{}%", signed(percent, self.is_positive));
  }

  pub fn price_label(&self) -> String {
    format!("${:.2}", self.price)
  }

  pub fn change_label(&self) -> String {
    format!("{} ({})", self.change, self.change_percent)
  }

  pub fn trend_class(&self) -> &'static str {
    if self.is_positive { "positive" } else { "negative" }
  }

  pub fn trend_icon(&self) -> &'static str {
    if self.is_positive { "trending-up" } else { "trending-down" }
  }

  fn change_children(&self) -> [Markup; 2] {
    [
      Markup::new("i").attr("data-lucide", self.trend_icon()),
      Markup::new("span").text(self.change_label()),
    ]
  }

  pub fn card(&self) -> Markup {
    let [icon, label] = self.change_children();
    Markup::new("div").class(ROW_CLASS)
      .child(Markup::new("div").class("stock-header")
        .child(Markup::new("div")
          .child(Markup::new("div").class("stock-symbol").text(&self.symbol))
          .child(Markup::new("div").class("stock-name").text(&self.name)))
        .child(Markup::new("div").class("stock-price").text(self.price_label())))
      .child(Markup::new("div").class(&format!("stock-change {}", self.trend_class()))
        .child(icon)
        .child(label))
  }
}

/// Uniform drift in `[-1.0, 1.0)` from a small seeded generator.
pub struct SeededDrift {
  rng: RefCell<SmallRng>,
}

impl SeededDrift {
  pub fn new(seed: u64) -> Self {
    SeededDrift { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
  }
}

impl PriceDrift for SeededDrift {
  fn sample(&self) -> f64 {
    self.rng.borrow_mut().random_range(-1.0..1.0)
  }
}

pub struct MarketPanel {
  quotes: RefCell<Vec<Quote>>,
  failed: Cell<bool>,
  ticker: Cell<Option<TimerHandle>>,
}

impl MarketPanel {
  pub fn new(seed: Vec<Quote>) -> Self {
    MarketPanel { quotes: RefCell::new(seed), failed: Cell::new(false), ticker: Cell::new(None) }
  }

  pub fn quotes(&self) -> Vec<Quote> {
    self.quotes.borrow().clone()
  }

  /// Handle of the repeating price update, kept for a future teardown hook.
  pub fn ticker(&self) -> Option<TimerHandle> {
    self.ticker.get()
  }

  pub fn load<S: Surface + 'static>(self: &Rc<Self>, ctx: &Context<S>) {
    let Some(grid) = ctx.surface.by_id(GRID_ID) else {
      warn!("no #{} container, market panel disabled", GRID_ID);
      return;
    };
    match self.schedule(ctx, &grid) {
      Ok(rows) => info!("market panel scheduled {} rows", rows),
      Err(e) => {
        error!("market panel failed to load: {}", e);
        self.show_unavailable(ctx, &grid);
      }
    }
  }

  fn schedule<S: Surface + 'static>(self: &Rc<Self>, ctx: &Context<S>, grid: &S::Node) -> Result<usize, AppError> {
    ctx.surface.clear(grid)?;
    self.failed.set(false);

    let rows = self.quotes.borrow().len();
    for index in 0..rows {
      let panel = Rc::clone(self);
      let row_ctx = ctx.clone();
      let row_grid = grid.clone();
      ctx.scheduler.after(ctx.config.timings.row_delay(index), Box::new(move || panel.insert_row(&row_ctx, &row_grid, index)))?;
    }

    let panel = Rc::clone(self);
    let tick_ctx = ctx.clone();
    let handle = ctx.scheduler.every(ctx.config.timings.price_interval(), Box::new(move || panel.update_prices(&tick_ctx)))?;
    self.ticker.set(Some(handle));
    Ok(rows)
  }

  fn insert_row<S: Surface>(&self, ctx: &Context<S>, grid: &S::Node, index: usize) {
    if self.failed.get() {
      return;
    }
    let Some(card) = self.quotes.borrow().get(index).map(Quote::card) else { return };
    match ctx.surface.append(grid, &card) {
      Ok(row) => {
        ctx.watcher.observe(&row);
        ctx.icons.refresh();
      },
      Err(e) => {
        error!("failed to render ticker row {}: {}", index, e);
        self.show_unavailable(ctx, grid);
      }
    }
  }

  fn show_unavailable<S: Surface>(&self, ctx: &Context<S>, grid: &S::Node) {
    self.failed.set(true);
    let notice = Markup::new("div").class("error").text(&ctx.config.notices.market_unavailable);
    if let Err(e) = ctx.surface.clear(grid).and_then(|_| ctx.surface.append(grid, &notice)) {
      error!("failed to show market error notice: {}", e);
    }
  }

  /// Drifts every quote and repaints its row. Rows are matched by position.
  pub fn update_prices<S: Surface>(&self, ctx: &Context<S>) {
    let surface = &*ctx.surface;
    let rows = match (self.failed.get(), surface.by_id(GRID_ID)) {
      (false, Some(grid)) => surface.by_class_in(&grid, ROW_CLASS),
      _ => vec![],
    };

    let mut quotes = self.quotes.borrow_mut();
    for (index, quote) in quotes.iter_mut().enumerate() {
      quote.drift(ctx.drift.sample());
      match rows.get(index) {
        Some(row) => {
          if let Err(e) = repaint(surface, row, quote) {
            warn!("ticker row {} ({}) not repainted: {}", index, quote.symbol, e);
          }
        },
        None if !self.failed.get() => warn!("ticker row {} ({}) missing, skipped", index, quote.symbol),
        None => {}
      }
    }
    info!("updated {} quotes", quotes.len());
    drop(quotes);
    ctx.icons.refresh();
  }
}

fn repaint<S: Surface>(surface: &S, row: &S::Node, quote: &Quote) -> Result<(), AppError> {
  if let Some(price) = surface.first_in(row, "stock-price") {
    surface.set_text(&price, &quote.price_label());
  }
  if let Some(change) = surface.first_in(row, "stock-change") {
    surface.set_class_name(&change, &format!("stock-change {}", quote.trend_class()));
    // the icon library swaps <i> placeholders for svg, so rebuild both children
    surface.clear(&change)?;
    for child in quote.change_children() {
      surface.append(&change, &child)?;
    }
  }
  surface.set_style(row, "animation", "none")?;
  surface.reflow(row);
  surface.set_style(row, "animation", ENTRANCE)
}
