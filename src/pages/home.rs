use dioxus::prelude::*;
use crate::components::cards::ArticleCard;

#[component]
pub fn Home() -> Element {
  rsx! {
    section {
      id: "home",
      class: "page",
      div {
        class: "hero",
        h1 { "Markets, decoded." },
        p { "Professional analysis of equities, rates and macro policy, with a live view of the names that move the tape." },
        button {
          class: "cta-button",
          r#type: "button",
          "Explore Articles"
        }
      },
      div {
        class: "market-overview",
        h2 { "Market Overview" },
        div {
          id: "stocksGrid",
          class: "stocks-grid",
        }
      },
      div {
        class: "featured",
        h2 { "Featured Analysis" },
        div {
          class: "article-grid",
          ArticleCard {
            id: "1",
            category: "Market Analysis",
            title: "Federal Reserve Policy Changes: Comprehensive Market Impact Analysis",
            excerpt: "How the latest shift in rate guidance reprices duration, financials and growth equities.",
            date: "March 15, 2025"
          }
        }
      }
    }
  }
}
