//! In-memory [`MenuHost`] whose guards count what is still alive.

use super::controller::{MenuController, MenuSettings};
use super::host::{CloseTicket, MenuHost, MenuMode, MenuState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Counts live guards so tests can assert nothing leaks
pub(crate) struct Guard(Rc<Cell<usize>>);

impl Guard {
    fn new(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self(live.clone())
    }
}

impl Drop for Guard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

#[derive(Default, Clone)]
pub(crate) struct HostLog {
    pub(crate) live_timers: Rc<Cell<usize>>,
    pub(crate) live_listeners: Rc<Cell<usize>>,
    pub(crate) scheduled: Rc<RefCell<Vec<(CloseTicket, u32)>>>,
    pub(crate) navbar_height: Rc<Cell<Option<f64>>>,
    pub(crate) transitions: Rc<RefCell<Vec<MenuState>>>,
}

pub(crate) struct FakeHost(pub(crate) HostLog);

impl MenuHost for FakeHost {
    type Timer = Guard;
    type Listener = Guard;

    fn schedule_close(&mut self, ticket: CloseTicket, delay_ms: u32) -> Guard {
        self.0.scheduled.borrow_mut().push((ticket, delay_ms));
        Guard::new(&self.0.live_timers)
    }

    fn attach_outside_listener(&mut self) -> Guard {
        Guard::new(&self.0.live_listeners)
    }

    fn measure_anchor_offset(&self) -> Option<f64> {
        self.0.navbar_height.get()
    }

    fn state_changed(&mut self, state: MenuState) {
        self.0.transitions.borrow_mut().push(state);
    }
}

pub(crate) fn controller(mode: MenuMode) -> (MenuController<FakeHost>, HostLog) {
    let seen = HostLog::default();
    seen.navbar_height.set(Some(64.0));
    let controller = MenuController::new(FakeHost(seen.clone()), mode, MenuSettings::default());
    (controller, seen)
}
