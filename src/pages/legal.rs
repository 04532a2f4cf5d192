use dioxus::prelude::*;

#[component]
pub fn Privacy() -> Element {
  rsx! {
    section {
      id: "privacy",
      class: "page legal",
      h1 { "Privacy Policy" },
      p { "We collect only what you send us through the contact and newsletter forms, and we never sell it." },
      p { "Market data on this site is illustrative and is not stored." }
    }
  }
}

#[component]
pub fn Terms() -> Element {
  rsx! {
    section {
      id: "terms",
      class: "page legal",
      h1 { "Terms of Service" },
      p { "Content on LaVue Market is for information only and is not investment advice." },
      p { "Quoted prices are simulated and must not be used for trading decisions." }
    }
  }
}
