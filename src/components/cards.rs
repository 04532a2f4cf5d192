#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn ArticleCard(id: String, category: String, title: String, excerpt: String, date: String) -> Element {
  rsx! {
    div {
      class: "article-card",
      span { class: "article-category", "{category}" }
      h3 { class: "article-card-title", "{title}" }
      p { class: "article-excerpt", "{excerpt}" }
      div {
        class: "article-meta",
        span { i { "data-lucide": "calendar" } " {date}" }
        a {
          class: "article-link",
          href: "#article/{id}",
          "Read more"
        }
      }
    }
  }
}

#[component]
pub fn AboutSection(icon: String, heading: String, body: String) -> Element {
  rsx! {
    div {
      class: "about-section",
      h3 {
        class: "about-title",
        i { "data-lucide": "{icon}" }
        "{heading}"
      }
      p { "{body}" }
    }
  }
}
