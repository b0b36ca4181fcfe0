use super::host::{CloseTicket, MenuHost, MenuMode, MenuState, MenuZone};
use crate::shared::config::MenuConfig;

/// Inputs the host forwards from pointer, click and resize events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    PointerEnter(MenuZone),
    /// `into_other` is set when the pointer moves straight from trigger to panel or back
    PointerLeave { zone: MenuZone, into_other: bool },
    CloseTimerElapsed(CloseTicket),
    TriggerActivated,
    PointerDownOutside,
    ItemActivated,
    BackdropClicked,
    /// Another entry of the same bar opened
    SiblingOpened,
    ViewportResized,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuSettings {
    pub close_delay_ms: u32,
    pub default_anchor_offset: f64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}

impl From<&MenuConfig> for MenuSettings {
    fn from(config: &MenuConfig) -> Self {
        Self {
            close_delay_ms: config.close_delay_ms,
            default_anchor_offset: config.default_anchor_offset,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Hover {
    trigger: bool,
    panel: bool,
}

impl Hover {
    fn set(&mut self, zone: MenuZone, value: bool) {
        match zone {
            MenuZone::Trigger => self.trigger = value,
            MenuZone::Panel => self.panel = value,
        }
    }

    fn any(&self) -> bool {
        self.trigger || self.panel
    }
}

/// Dropdown state for one navigation entry.
///
/// While `Open` the controller holds the outside-click listener; while a
/// close is pending it holds the timer. Both are released on close, on mode
/// switch and on drop.
pub struct MenuController<H: MenuHost> {
    host: H,
    mode: MenuMode,
    settings: MenuSettings,
    state: MenuState,
    anchor_offset: f64,
    hover: Hover,
    next_ticket: u64,
    pending_close: Option<(CloseTicket, H::Timer)>,
    outside_listener: Option<H::Listener>,
}

impl<H: MenuHost> MenuController<H> {
    /// Creates a closed controller and takes the first anchor measurement
    pub fn new(host: H, mode: MenuMode, settings: MenuSettings) -> Self {
        let mut controller = Self {
            host,
            mode,
            settings,
            state: MenuState::Closed,
            anchor_offset: settings.default_anchor_offset,
            hover: Hover::default(),
            next_ticket: 0,
            pending_close: None,
            outside_listener: None,
        };
        controller.remeasure();
        controller
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Vertical panel offset in px
    pub fn anchor_offset(&self) -> f64 {
        self.anchor_offset
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_some()
    }

    pub fn is_listening_outside(&self) -> bool {
        self.outside_listener.is_some()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn open(&mut self) {
        self.cancel_pending_close();
        self.transition(MenuState::Open);
    }

    pub fn close(&mut self) {
        self.transition(MenuState::Closed);
    }

    pub fn toggle(&mut self) {
        match self.state {
            MenuState::Open => self.close(),
            MenuState::Closed => self.open(),
        }
    }

    /// Switching modes closes the menu and forgets hover state
    pub fn set_mode(&mut self, mode: MenuMode) {
        if self.mode == mode {
            return;
        }
        log::debug!("mega menu: mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.hover = Hover::default();
        self.close();
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuState {
        match event {
            MenuEvent::PointerEnter(zone) => {
                if self.mode == MenuMode::Desktop {
                    self.hover.set(zone, true);
                    self.open();
                }
            }
            MenuEvent::PointerLeave { zone, into_other } => {
                if self.mode == MenuMode::Desktop {
                    self.hover.set(zone, false);
                    if !into_other && self.is_open() {
                        self.schedule_close();
                    }
                }
            }
            MenuEvent::CloseTimerElapsed(ticket) => {
                let current = self.pending_close.as_ref().map(|(t, _)| *t);
                if current == Some(ticket) {
                    self.pending_close = None;
                    if !self.hover.any() {
                        self.close();
                    }
                }
            }
            MenuEvent::TriggerActivated => {
                if self.mode == MenuMode::Mobile {
                    self.toggle();
                }
            }
            MenuEvent::PointerDownOutside
            | MenuEvent::ItemActivated
            | MenuEvent::BackdropClicked => self.close(),
            MenuEvent::SiblingOpened => {
                if self.mode == MenuMode::Mobile {
                    self.close();
                }
            }
            MenuEvent::ViewportResized => self.remeasure(),
        }
        self.state
    }

    fn remeasure(&mut self) {
        if let Some(offset) = self.host.measure_anchor_offset() {
            self.anchor_offset = offset;
        }
    }

    fn schedule_close(&mut self) {
        self.next_ticket += 1;
        let ticket = CloseTicket(self.next_ticket);
        let timer = self.host.schedule_close(ticket, self.settings.close_delay_ms);
        // replacing drops (cancels) the previous timer
        self.pending_close = Some((ticket, timer));
    }

    fn cancel_pending_close(&mut self) {
        self.pending_close = None;
    }

    fn transition(&mut self, next: MenuState) {
        if self.state == next {
            return;
        }
        match next {
            MenuState::Open => {
                self.outside_listener = Some(self.host.attach_outside_listener());
            }
            MenuState::Closed => {
                self.cancel_pending_close();
                self.outside_listener = None;
            }
        }
        log::debug!("mega menu: {:?} -> {:?}", self.state, next);
        self.state = next;
        self.host.state_changed(next);
    }
}
