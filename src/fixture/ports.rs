use std::{cell::{Cell, RefCell}, collections::VecDeque};

use crate::utils::ports::{IconRenderer, Notifier, PriceDrift, ViewportWatcher};

type Probe = Box<dyn Fn() -> String>;

/// Records every notice, plus an optional snapshot taken at notify time.
#[derive(Default)]
pub struct RecordingNotifier {
  messages: RefCell<Vec<(String, Option<String>)>>,
  probe: RefCell<Option<Probe>>,
}

impl RecordingNotifier {
  pub fn probe_with(&self, probe: impl Fn() -> String + 'static) {
    *self.probe.borrow_mut() = Some(Box::new(probe));
  }

  pub fn messages(&self) -> Vec<String> {
    self.messages.borrow().iter().map(|(m, _)| m.clone()).collect()
  }

  pub fn snapshots(&self) -> Vec<Option<String>> {
    self.messages.borrow().iter().map(|(_, s)| s.clone()).collect()
  }
}

impl Notifier for RecordingNotifier {
  fn notify(&self, message: &str) {
    let snapshot = self.probe.borrow().as_ref().map(|probe| probe());
    self.messages.borrow_mut().push((message.to_string(), snapshot));
  }
}

#[derive(Default)]
pub struct CountingIcons {
  refreshes: Cell<usize>,
}

impl CountingIcons {
  pub fn refreshes(&self) -> usize {
    self.refreshes.get()
  }
}

impl IconRenderer for CountingIcons {
  fn refresh(&self) {
    self.refreshes.set(self.refreshes.get() + 1);
  }
}

pub struct RecordingWatcher<N> {
  observed: RefCell<Vec<N>>,
  unobserved: RefCell<Vec<N>>,
}

impl<N: Clone + PartialEq> RecordingWatcher<N> {
  pub fn new() -> Self {
    RecordingWatcher { observed: RefCell::new(vec![]), unobserved: RefCell::new(vec![]) }
  }

  pub fn is_watching(&self, node: &N) -> bool {
    self.observed.borrow().contains(node) && !self.unobserved.borrow().contains(node)
  }

  pub fn observed(&self) -> Vec<N> {
    self.observed.borrow().clone()
  }
}

impl<N: Clone + PartialEq> ViewportWatcher<N> for RecordingWatcher<N> {
  fn observe(&self, node: &N) {
    self.observed.borrow_mut().push(node.clone());
    self.unobserved.borrow_mut().retain(|n| n != node);
  }

  fn unobserve(&self, node: &N) {
    self.unobserved.borrow_mut().push(node.clone());
  }
}

/// Replays scripted perturbations, then holds at zero.
#[derive(Default)]
pub struct ScriptedDrift {
  samples: RefCell<VecDeque<f64>>,
}

impl ScriptedDrift {
  pub fn push(&self, samples: &[f64]) {
    self.samples.borrow_mut().extend(samples.iter().copied());
  }
}

impl PriceDrift for ScriptedDrift {
  fn sample(&self) -> f64 {
    self.samples.borrow_mut().pop_front().unwrap_or(0.0)
  }
}
