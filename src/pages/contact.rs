use dioxus::prelude::*;

#[component]
pub fn Contact() -> Element {
  rsx! {
    section {
      id: "contact",
      class: "page",
      h1 { "Contact Us" },
      form {
        class: "contact-form",
        div {
          class: "form-group",
          label { class: "form-label", "Name" },
          input { class: "form-input", name: "name", r#type: "text", required: true }
        },
        div {
          class: "form-group",
          label { class: "form-label", "Email" },
          input { class: "form-input", name: "email", r#type: "email", required: true }
        },
        div {
          class: "form-group",
          label { class: "form-label", "Subject" },
          select {
            class: "form-input",
            name: "subject",
            option { value: "general", "General enquiry" }
            option { value: "editorial", "Editorial" }
            option { value: "partnership", "Partnership" }
          }
        },
        div {
          class: "form-group",
          label { class: "form-label", "Message" },
          textarea { class: "form-input", name: "message", rows: "5", required: true }
        },
        div {
          class: "form-actions",
          button { r#type: "submit", class: "button button-primary submit-button", "Send Message" }
        }
      }
    }
  }
}
