use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// One-shot delayed callbacks. Nothing scheduled can be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Task);
}

/// Browser timers via `setTimeout`.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }
}
