use dioxus::logger::tracing::warn;
use js_sys::wasm_bindgen::JsCast;
use web_sys::{
  Document, Element, HtmlCollection, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
  HtmlTextAreaElement, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::utils::{error::AppError, surface::{FormField, Markup, Surface}};

fn js_err(e: impl std::fmt::Debug) -> AppError {
  AppError::DomError(format!("{:?}", e))
}

fn from_collection(items: HtmlCollection) -> Vec<Element> {
  (0..items.length()).filter_map(|i| items.item(i)).collect()
}

fn from_node_list(items: NodeList) -> Vec<Element> {
  (0..items.length())
    .filter_map(|i| items.item(i))
    .filter_map(|n| n.dyn_into::<Element>().ok())
    .collect()
}

/// The live browser document.
pub struct WebSurface {
  window: Window,
  document: Document,
}

impl WebSurface {
  pub fn new() -> Result<Self, AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::WasmError("global window should exist".to_string()))?;
    let document = window.document().ok_or_else(|| AppError::WasmError("window has no document".to_string()))?;
    Ok(Self { window, document })
  }

  pub fn window(&self) -> &Window {
    &self.window
  }

  pub fn document(&self) -> &Document {
    &self.document
  }

  fn build(&self, markup: &Markup) -> Result<Element, AppError> {
    let el = self.document.create_element(&markup.tag).map_err(js_err)?;
    if !markup.classes.is_empty() {
      el.set_class_name(&markup.class_name());
    }
    for (name, value) in &markup.attrs {
      el.set_attribute(name, value).map_err(js_err)?;
    }
    if let Some(text) = &markup.text {
      el.set_text_content(Some(text));
    }
    for child in &markup.children {
      let child = self.build(child)?;
      el.append_child(&child).map_err(js_err)?;
    }
    Ok(el)
  }
}

impl Surface for WebSurface {
  type Node = Element;

  fn by_id(&self, id: &str) -> Option<Element> {
    self.document.get_element_by_id(id)
  }

  fn by_class(&self, class: &str) -> Vec<Element> {
    from_collection(self.document.get_elements_by_class_name(class))
  }

  fn by_class_in(&self, root: &Element, class: &str) -> Vec<Element> {
    from_collection(root.get_elements_by_class_name(class))
  }

  fn tag_in(&self, root: &Element, tag: &str) -> Option<Element> {
    root.query_selector(tag).ok().flatten()
  }

  fn fragment_links(&self) -> Vec<Element> {
    self.document.query_selector_all("a[href^='#']").map(from_node_list).unwrap_or_default()
  }

  fn attr(&self, node: &Element, name: &str) -> Option<String> {
    node.get_attribute(name)
  }

  fn set_attr(&self, node: &Element, name: &str, value: &str) {
    if let Err(e) = node.set_attribute(name, value) {
      warn!("failed to set {}: {:?}", name, e);
    }
  }

  fn remove_attr(&self, node: &Element, name: &str) {
    if let Err(e) = node.remove_attribute(name) {
      warn!("failed to remove {}: {:?}", name, e);
    }
  }

  fn has_class(&self, node: &Element, class: &str) -> bool {
    node.class_list().contains(class)
  }

  fn add_class(&self, node: &Element, class: &str) {
    if let Err(e) = node.class_list().add_1(class) {
      warn!("failed to add class {}: {:?}", class, e);
    }
  }

  fn remove_class(&self, node: &Element, class: &str) {
    if let Err(e) = node.class_list().remove_1(class) {
      warn!("failed to remove class {}: {:?}", class, e);
    }
  }

  fn toggle_class(&self, node: &Element, class: &str) {
    if let Err(e) = node.class_list().toggle(class) {
      warn!("failed to toggle class {}: {:?}", class, e);
    }
  }

  fn set_class_name(&self, node: &Element, class_name: &str) {
    node.set_class_name(class_name);
  }

  fn text(&self, node: &Element) -> String {
    node.text_content().unwrap_or_default()
  }

  fn set_text(&self, node: &Element, text: &str) {
    node.set_text_content(Some(text));
  }

  fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), AppError> {
    let el = node.dyn_ref::<HtmlElement>().ok_or_else(|| AppError::DomError(format!("<{}> has no style", node.tag_name())))?;
    el.style().set_property(property, value).map_err(js_err)
  }

  fn reflow(&self, node: &Element) {
    if let Some(el) = node.dyn_ref::<HtmlElement>() {
      let _ = el.offset_height();
    }
  }

  fn clear(&self, node: &Element) -> Result<(), AppError> {
    node.set_inner_html("");
    Ok(())
  }

  fn append(&self, parent: &Element, markup: &Markup) -> Result<Element, AppError> {
    let el = self.build(markup)?;
    parent.append_child(&el).map_err(js_err)?;
    Ok(el)
  }

  fn form_fields(&self, form: &Element) -> Vec<FormField> {
    let controls = form.query_selector_all("input, textarea, select").map(from_node_list).unwrap_or_default();
    controls.iter().filter_map(|el| {
      if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Some(FormField { name: input.name(), kind: input.type_(), value: input.value() })
      } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        Some(FormField { name: area.name(), kind: "textarea".to_string(), value: area.value() })
      } else {
        el.dyn_ref::<HtmlSelectElement>()
          .map(|select| FormField { name: select.name(), kind: "select".to_string(), value: select.value() })
      }
    }).collect()
  }

  fn reset_form(&self, form: &Element) {
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
      form.reset();
    }
  }

  fn title(&self) -> String {
    self.document.title()
  }

  fn set_title(&self, title: &str) {
    self.document.set_title(title);
  }

  fn hash(&self) -> String {
    self.window.location().hash().unwrap_or_default()
  }

  fn set_hash(&self, hash: &str) -> Result<(), AppError> {
    self.window.location().set_hash(hash).map_err(js_err)
  }

  fn scroll_y(&self) -> f64 {
    self.window.scroll_y().unwrap_or_default()
  }

  fn scroll_to_top(&self) {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    self.window.scroll_to_with_scroll_to_options(&options);
  }
}
