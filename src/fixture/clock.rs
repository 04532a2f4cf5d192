use std::{cell::{Cell, RefCell}, collections::{BTreeMap, HashSet}, time::Duration};

use crate::utils::{error::AppError, scheduler::{RepeatingTask, Scheduler, Task, TimerHandle}};

pub const FRAME: Duration = Duration::from_millis(16);

enum Entry {
  Once(Task),
  Every(Duration, RepeatingTask),
}

/// Scheduler on virtual time. Nothing runs until `advance` is called.
pub struct VirtualClock {
  now: Cell<Duration>,
  seq: Cell<u64>,
  queue: RefCell<BTreeMap<(Duration, u64), (TimerHandle, Entry)>>,
  cancelled: RefCell<HashSet<TimerHandle>>,
  refusing: Cell<bool>,
}

impl VirtualClock {
  pub fn new() -> Self {
    VirtualClock {
      now: Cell::new(Duration::ZERO),
      seq: Cell::new(0),
      queue: RefCell::new(BTreeMap::new()),
      cancelled: RefCell::new(HashSet::new()),
      refusing: Cell::new(false),
    }
  }

  pub fn now(&self) -> Duration {
    self.now.get()
  }

  pub fn pending(&self) -> usize {
    self.queue.borrow().len()
  }

  /// Makes every later scheduling call fail.
  pub fn refuse(&self, refusing: bool) {
    self.refusing.set(refusing);
  }

  pub fn advance(&self, by: Duration) {
    let target = self.now.get() + by;
    loop {
      let next = {
        let mut queue = self.queue.borrow_mut();
        match queue.keys().next().copied() {
          Some(key) if key.0 <= target => queue.remove(&key).map(|entry| (key.0, entry)),
          _ => None,
        }
      };
      let Some((due, (handle, entry))) = next else { break };
      self.now.set(due);
      match entry {
        Entry::Once(task) => task(),
        Entry::Every(period, mut task) => {
          task();
          if !self.cancelled.borrow().contains(&handle) {
            self.push(due + period, handle, Entry::Every(period, task));
          }
        }
      }
    }
    self.now.set(target);
  }

  fn push(&self, due: Duration, handle: TimerHandle, entry: Entry) {
    let seq = self.seq.get() + 1;
    self.seq.set(seq);
    self.queue.borrow_mut().insert((due, seq), (handle, entry));
  }

  fn arm(&self, delay: Duration, entry: Entry) -> Result<TimerHandle, AppError> {
    if self.refusing.get() {
      return Err(AppError::TimerError("virtual clock refused the timer".to_string()));
    }
    let handle = TimerHandle(self.seq.get() + 1);
    self.push(self.now.get() + delay, handle, entry);
    Ok(handle)
  }
}

impl Scheduler for VirtualClock {
  fn after(&self, delay: Duration, task: Task) -> Result<TimerHandle, AppError> {
    self.arm(delay, Entry::Once(task))
  }

  fn every(&self, period: Duration, task: RepeatingTask) -> Result<TimerHandle, AppError> {
    self.arm(period, Entry::Every(period, task))
  }

  fn next_frame(&self, task: Task) -> Result<TimerHandle, AppError> {
    self.arm(FRAME, Entry::Once(task))
  }

  fn cancel(&self, handle: TimerHandle) {
    self.cancelled.borrow_mut().insert(handle);
    self.queue.borrow_mut().retain(|_, (h, _)| *h != handle);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::rc::Rc;

  #[test]
  fn one_shot_tasks_fire_in_due_order() {
    let clock = VirtualClock::new();
    let log = Rc::new(RefCell::new(vec![]));
    for (delay, tag) in [(300, "c"), (100, "a"), (200, "b")] {
      let log = log.clone();
      clock.after(Duration::from_millis(delay), Box::new(move || log.borrow_mut().push(tag))).unwrap();
    }
    clock.advance(Duration::from_millis(150));
    assert_eq!(*log.borrow(), vec!["a"]);
    clock.advance(Duration::from_millis(200));
    assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    assert_eq!(clock.pending(), 0);
  }

  #[test]
  fn repeating_task_fires_each_period_until_cancelled() {
    let clock = VirtualClock::new();
    let ticks = Rc::new(Cell::new(0));
    let counter = ticks.clone();
    let handle = clock.every(Duration::from_secs(30), Box::new(move || counter.set(counter.get() + 1))).unwrap();
    clock.advance(Duration::from_secs(95));
    assert_eq!(ticks.get(), 3);
    clock.cancel(handle);
    clock.advance(Duration::from_secs(60));
    assert_eq!(ticks.get(), 3);
  }
}
