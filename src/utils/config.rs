use std::{collections::HashMap, time::Duration};
use serde::Deserialize;

use crate::controller::market::Quote;
use super::error::AppError;

static SITE_JSON: &str = include_str!("../../assets/site.json");

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Article {
  pub title: String,
  pub category: String,
  pub date: String,
  pub author: String,
  pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Notices {
  pub contact_sent: String,
  pub contact_pending: String,
  pub newsletter_sent: String,
  pub newsletter_pending: String,
  pub market_unavailable: String,
}

/// Delays used by the page controller, all in milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Timings {
  pub row_stagger_ms: u64,
  pub price_interval_ms: u64,
  pub contact_delay_ms: u64,
  pub newsletter_delay_ms: u64,
  pub icon_refresh_ms: u64,
}

impl Default for Timings {
  fn default() -> Self {
    Timings {
      row_stagger_ms: 100,
      price_interval_ms: 30_000,
      contact_delay_ms: 2_000,
      newsletter_delay_ms: 1_500,
      icon_refresh_ms: 100,
    }
  }
}

impl Timings {
  pub fn row_delay(&self, index: usize) -> Duration {
    Duration::from_millis(self.row_stagger_ms * index as u64)
  }

  pub fn price_interval(&self) -> Duration {
    Duration::from_millis(self.price_interval_ms)
  }

  pub fn contact_delay(&self) -> Duration {
    Duration::from_millis(self.contact_delay_ms)
  }

  pub fn newsletter_delay(&self) -> Duration {
    Duration::from_millis(self.newsletter_delay_ms)
  }

  pub fn icon_refresh(&self) -> Duration {
    Duration::from_millis(self.icon_refresh_ms)
  }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderShades {
  pub threshold_px: f64,
  pub solid: String,
  pub translucent: String,
}

impl Default for HeaderShades {
  fn default() -> Self {
    HeaderShades {
      threshold_px: 100.0,
      solid: "rgba(10, 10, 10, 0.98)".to_string(),
      translucent: "rgba(10, 10, 10, 0.95)".to_string(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
  pub default_page: String,
  pub titles: HashMap<String, String>,
  pub articles: HashMap<String, Article>,
  pub quotes: Vec<Quote>,
  pub notices: Notices,
  #[serde(default)]
  pub timings: Timings,
  #[serde(default)]
  pub header: HeaderShades,
}

impl SiteConfig {
  /// Site content compiled into the binary from `assets/site.json`.
  pub fn embedded() -> Result<Self, AppError> {
    Self::from_json(SITE_JSON)
  }

  pub fn from_json(raw: &str) -> Result<Self, AppError> {
    serde_json::from_str::<SiteConfig>(raw).map_err(|e| AppError::ConfigError(e.to_string()))
  }

  // unknown keys share the home title
  pub fn title_for(&self, page_key: &str) -> &str {
    self.titles.get(page_key)
      .or_else(|| self.titles.get(&self.default_page))
      .map(String::as_str)
      .unwrap_or_default()
  }

  pub fn article(&self, id: &str) -> Option<&Article> {
    self.articles.get(id)
  }
}
