//! The document surface every page concern reads and writes.
//!
//! Lookups hand back `Option`/`Vec` so a missing element is an ordinary,
//! silent outcome. Only operations that build or restructure the tree, or
//! that touch the address bar, report failures.

use super::error::AppError;

/// Owned description of an element subtree to insert into the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Markup {
  pub tag: String,
  pub classes: Vec<String>,
  pub attrs: Vec<(String, String)>,
  pub text: Option<String>,
  pub children: Vec<Markup>,
}

impl Markup {
  pub fn new(tag: &str) -> Self {
    Markup { tag: tag.to_string(), ..Default::default() }
  }

  pub fn class(mut self, class: &str) -> Self {
    self.classes.extend(class.split_whitespace().map(str::to_string));
    self
  }

  pub fn attr(mut self, name: &str, value: &str) -> Self {
    self.attrs.push((name.to_string(), value.to_string()));
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }

  pub fn child(mut self, child: Markup) -> Self {
    self.children.push(child);
    self
  }

  pub fn class_name(&self) -> String {
    self.classes.join(" ")
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
  pub name: String,
  pub kind: String,
  pub value: String,
}

pub trait Surface {
  type Node: Clone + PartialEq + 'static;

  fn by_id(&self, id: &str) -> Option<Self::Node>;
  /// All elements carrying `class`, in document order.
  fn by_class(&self, class: &str) -> Vec<Self::Node>;
  /// Descendants of `root` carrying `class`, in document order.
  fn by_class_in(&self, root: &Self::Node, class: &str) -> Vec<Self::Node>;
  fn tag_in(&self, root: &Self::Node, tag: &str) -> Option<Self::Node>;
  /// Anchors whose `href` is an in-page fragment.
  fn fragment_links(&self) -> Vec<Self::Node>;

  fn first_by_class(&self, class: &str) -> Option<Self::Node> {
    self.by_class(class).into_iter().next()
  }

  fn first_in(&self, root: &Self::Node, class: &str) -> Option<Self::Node> {
    self.by_class_in(root, class).into_iter().next()
  }

  fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
  fn set_attr(&self, node: &Self::Node, name: &str, value: &str);
  fn remove_attr(&self, node: &Self::Node, name: &str);

  fn has_class(&self, node: &Self::Node, class: &str) -> bool;
  fn add_class(&self, node: &Self::Node, class: &str);
  fn remove_class(&self, node: &Self::Node, class: &str);
  fn toggle_class(&self, node: &Self::Node, class: &str);
  fn set_class_name(&self, node: &Self::Node, class_name: &str);

  fn text(&self, node: &Self::Node) -> String;
  fn set_text(&self, node: &Self::Node, text: &str);
  fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), AppError>;
  /// Forces layout so a following style write restarts CSS animations.
  fn reflow(&self, node: &Self::Node);

  fn clear(&self, node: &Self::Node) -> Result<(), AppError>;
  fn append(&self, parent: &Self::Node, markup: &Markup) -> Result<Self::Node, AppError>;

  fn form_fields(&self, form: &Self::Node) -> Vec<FormField>;
  fn reset_form(&self, form: &Self::Node);

  fn title(&self) -> String;
  fn set_title(&self, title: &str);
  fn hash(&self) -> String;
  fn set_hash(&self, hash: &str) -> Result<(), AppError>;
  fn scroll_y(&self) -> f64;
  fn scroll_to_top(&self);
}
