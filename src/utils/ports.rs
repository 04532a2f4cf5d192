/// Blocking user notice; an `alert` in the browser.
pub trait Notifier {
  fn notify(&self, message: &str);
}

/// Swaps icon placeholders for rendered icons. Must tolerate the icon
/// library being absent.
pub trait IconRenderer {
  fn refresh(&self);
}

/// Viewport-intersection watcher for entrance animations.
pub trait ViewportWatcher<N> {
  fn observe(&self, node: &N);
  fn unobserve(&self, node: &N);
}

/// Source of uniform price perturbations in `[-1.0, 1.0)`.
pub trait PriceDrift {
  fn sample(&self) -> f64;
}
