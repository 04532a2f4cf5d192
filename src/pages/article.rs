use dioxus::prelude::*;

#[component]
pub fn ArticleView() -> Element {
  rsx! {
    section {
      id: "article",
      class: "page",
      a { class: "back-link", href: "#articles", "← Back to articles" },
      article {
        class: "article-full",
        h1 { class: "article-title-full", "Loading article..." },
        div { class: "article-body", "Full article content would be loaded here..." }
      }
    }
  }
}
