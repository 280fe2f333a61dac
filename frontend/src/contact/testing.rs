//! In-memory stand-ins for the browser, used by the pipeline tests.

use std::cell::{Cell, RefCell};

use super::fields::{Field, FormFields};
use super::scheduler::{Scheduler, Task};
use super::surface::{BannerId, RenderSurface};

#[derive(Default)]
pub struct FakeSurface {
    fields: RefCell<FormFields>,
    errors: RefCell<Vec<(Field, String)>>,
    banners: RefCell<Vec<(BannerId, String, bool)>>,
    next_banner: Cell<u64>,
}

impl FakeSurface {
    pub fn with_fields(fields: FormFields) -> Self {
        let surface = Self::default();
        surface.fill(fields);
        surface
    }

    pub fn fill(&self, fields: FormFields) {
        *self.fields.borrow_mut() = fields;
    }

    pub fn errors(&self) -> Vec<(Field, String)> {
        self.errors.borrow().clone()
    }

    /// `(id, text, leaving)` for every banner still in the document.
    pub fn banners(&self) -> Vec<(BannerId, String, bool)> {
        self.banners.borrow().clone()
    }
}

impl RenderSurface for FakeSurface {
    fn read_fields(&self) -> FormFields {
        self.fields.borrow().clone()
    }

    fn clear_errors(&self) {
        self.errors.borrow_mut().clear();
    }

    fn insert_error(&self, field: Field, message: &str) {
        self.errors.borrow_mut().push((field, message.to_string()));
    }

    fn reset_fields(&self) {
        *self.fields.borrow_mut() = FormFields::default();
    }

    fn show_banner(&self, message: &str) -> BannerId {
        let id = BannerId(self.next_banner.get());
        self.next_banner.set(id.0 + 1);
        self.banners.borrow_mut().push((id, message.to_string(), false));
        id
    }

    fn begin_banner_exit(&self, id: BannerId) {
        for banner in self.banners.borrow_mut().iter_mut() {
            if banner.0 == id {
                banner.2 = true;
            }
        }
    }

    fn remove_banner(&self, id: BannerId) {
        self.banners.borrow_mut().retain(|banner| banner.0 != id);
    }
}

/// Virtual clock; tasks only run when the test advances time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    seq: Cell<u64>,
    pending: RefCell<Vec<(u64, u64, Task)>>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    /// Moves the clock forward, running due tasks in deadline order.
    /// Tasks scheduled along the way run too if they fall inside the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = self
                .pending
                .borrow()
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= target)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(index, _)| index);
            let Some(index) = next else { break };

            let (due, _, task) = self.pending.borrow_mut().remove(index);
            self.now.set(due);
            task();
        }
        self.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        let due = self.now.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push((due, seq, task));
    }
}
