use dioxus::prelude::*;
use crate::components::cards::AboutSection;

#[component]
pub fn About() -> Element {
  rsx! {
    section {
      id: "about",
      class: "page",
      h1 { "About LaVue Market" },
      AboutSection {
        icon: "target",
        heading: "Our Mission",
        body: "Clear, independent market research for investors who want the reasoning, not just the headline."
      }
      AboutSection {
        icon: "users",
        heading: "Our Team",
        body: "Former buy-side analysts, economists and data engineers covering global equities and macro."
      }
      AboutSection {
        icon: "shield-check",
        heading: "Our Standards",
        body: "No paid placements. Every piece is reviewed before it is published."
      }
    }
  }
}
