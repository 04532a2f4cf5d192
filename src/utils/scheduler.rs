use std::time::Duration;

use super::error::AppError;

pub type Task = Box<dyn FnOnce()>;
pub type RepeatingTask = Box<dyn FnMut()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Deferred work on the single UI thread.
pub trait Scheduler {
  fn after(&self, delay: Duration, task: Task) -> Result<TimerHandle, AppError>;
  fn every(&self, period: Duration, task: RepeatingTask) -> Result<TimerHandle, AppError>;
  /// Runs `task` before the next repaint.
  fn next_frame(&self, task: Task) -> Result<TimerHandle, AppError>;
  fn cancel(&self, handle: TimerHandle);
}
