use dioxus::prelude::*;
use crate::components::cards::ArticleCard;

#[component]
pub fn Articles() -> Element {
  rsx! {
    section {
      id: "articles",
      class: "page",
      h1 { "Financial Articles & Analysis" },
      div {
        class: "article-grid",
        ArticleCard {
          id: "1",
          category: "Market Analysis",
          title: "Federal Reserve Policy Changes: Comprehensive Market Impact Analysis",
          excerpt: "How the latest shift in rate guidance reprices duration, financials and growth equities.",
          date: "March 15, 2025"
        }
        ArticleCard {
          id: "2",
          category: "Technology",
          title: "Semiconductor Supply Chains After the AI Build-Out",
          excerpt: "Capacity, pricing power and where the next bottleneck is likely to form.",
          date: "March 12, 2025"
        }
        ArticleCard {
          id: "3",
          category: "Banking",
          title: "Net Interest Margins in a Flattening Curve",
          excerpt: "Which lenders hold up when short rates stop falling faster than long ones.",
          date: "March 9, 2025"
        }
      }
    }
  }
}
