#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Chosen by the host from the viewport; the controller never detects it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Hover opens, leaving closes after a short delay
    Desktop,
    /// Tapping the trigger toggles
    Mobile,
}

/// The two hoverable parts of a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuZone {
    Trigger,
    Panel,
}

/// Identifies one scheduled close; stale tickets are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CloseTicket(pub u64);

/// Side-effect capabilities injected into a [`super::MenuController`].
pub trait MenuHost {
    /// Pending deferred close. Dropping it must cancel the callback.
    type Timer;
    /// Active outside-pointer listener. Dropping it must detach the listener.
    type Listener;

    /// Arrange for `MenuEvent::CloseTimerElapsed(ticket)` to be delivered after `delay_ms`
    fn schedule_close(&mut self, ticket: CloseTicket, delay_ms: u32) -> Self::Timer;

    /// Start delivering `MenuEvent::PointerDownOutside` for pointer-downs outside trigger and panel
    fn attach_outside_listener(&mut self) -> Self::Listener;

    /// Current navbar height in px, `None` if it cannot be measured yet
    fn measure_anchor_offset(&self) -> Option<f64>;

    /// Called after every Open/Closed transition
    fn state_changed(&mut self, _state: MenuState) {}
}
