use dioxus::prelude::*;

const NAV_PAGES: [(&str, &str); 4] = [
  ("home", "Home"),
  ("articles", "Articles"),
  ("about", "About"),
  ("contact", "Contact"),
];

#[component]
pub fn Header() -> Element {
  rsx!{
    header {
      class: "header",
      div {
        class: "nav-container",
        a {
          class: "logo",
          href: "#home",
          i { "data-lucide": "trending-up" }
          span { "LaVue Market" }
        }
        nav {
          class: "nav",
          for (page, label) in NAV_PAGES {
            a {
              key: "nav-{page}",
              class: "nav-link",
              href: "#{page}",
              "{label}"
            }
          }
        }
        button {
          class: "mobile-toggle",
          r#type: "button",
          span {
            class: "menu-icon",
            svg {
              class: "menu-icon-svg",
              xmlns: "http://www.w3.org/2000/svg",
              view_box: "0 0 24 24",
              path {
                d: "M6 12H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 15.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
              path {
                d: "M6 8.5H18",
                stroke: "currentcolor",
                stroke_linecap: "round"
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn NewsletterForm() -> Element {
  rsx! {
    form {
      class: "newsletter-form",
      input {
        class: "form-input",
        r#type: "email",
        name: "email",
        placeholder: "Your email address",
        required: true
      }
      button { r#type: "submit", class: "button button-primary", "Subscribe" }
    }
  }
}

#[component]
pub fn Footer() -> Element {
  rsx!{
    footer {
      class: "footer",
      div {
        class: "footer-container",
        div {
          class: "footer-newsletter",
          h3 { "Market insights in your inbox" }
          p { "Weekly analysis, no noise." }
          NewsletterForm { }
        }
        div {
          class: "footer-links",
          a { href: "#privacy", "Privacy Policy" }
          a { href: "#terms", "Terms of Service" }
          a { href: "#contact", "Contact" }
        }
        div {
          class: "copyright",
          p { "© 2025 LaVue Market" }
          a {
            href: "mailto:contact@lavuemarket.com",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
          }
        }
      }
    }
  }
}
