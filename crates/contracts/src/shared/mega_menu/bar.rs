use super::controller::{MenuController, MenuEvent};
use super::host::{MenuHost, MenuMode, MenuState};

/// All dropdown menus of one navigation bar.
///
/// Routes events to a single menu by index and keeps the bar consistent:
/// whenever a menu opens, every other menu receives
/// [`MenuEvent::SiblingOpened`]. In mobile mode that closes them, so at most
/// one panel is open; desktop menus ignore it and close on their own timers.
pub struct MenuBar<H: MenuHost> {
    menus: Vec<MenuController<H>>,
}

impl<H: MenuHost> MenuBar<H> {
    pub fn new(menus: Vec<MenuController<H>>) -> Self {
        Self { menus }
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub fn menu(&self, index: usize) -> Option<&MenuController<H>> {
        self.menus.get(index)
    }

    /// Indices of the menus currently open
    pub fn open_menus(&self) -> Vec<usize> {
        self.menus
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_open())
            .map(|(i, _)| i)
            .collect()
    }

    /// Feeds `event` to menu `index`; `None` for an unknown index
    pub fn handle(&mut self, index: usize, event: MenuEvent) -> Option<MenuState> {
        self.update(index, |menu| {
            menu.handle(event);
        })
    }

    /// Runs `f` on menu `index`, then notifies the siblings if it opened
    pub fn update(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut MenuController<H>),
    ) -> Option<MenuState> {
        let menu = self.menus.get_mut(index)?;
        let was_open = menu.is_open();
        f(menu);
        let state = menu.state();

        if !was_open && state.is_open() {
            for (i, sibling) in self.menus.iter_mut().enumerate() {
                if i != index {
                    sibling.handle(MenuEvent::SiblingOpened);
                }
            }
        }
        Some(state)
    }

    /// Sends `event` to every menu, e.g. a viewport resize
    pub fn broadcast(&mut self, event: MenuEvent) {
        for menu in &mut self.menus {
            menu.handle(event);
        }
    }

    pub fn set_mode(&mut self, mode: MenuMode) {
        for menu in &mut self.menus {
            menu.set_mode(mode);
        }
    }

    pub fn close_all(&mut self) {
        for menu in &mut self.menus {
            menu.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mega_menu::fake_host::{controller, FakeHost, HostLog};
    use crate::shared::mega_menu::MenuZone;

    fn bar(mode: MenuMode, count: usize) -> (MenuBar<FakeHost>, Vec<HostLog>) {
        let (menus, seen): (Vec<_>, Vec<_>) = (0..count).map(|_| controller(mode)).unzip();
        (MenuBar::new(menus), seen)
    }

    #[test]
    fn test_mobile_opening_one_closes_the_other() {
        let (mut bar, seen) = bar(MenuMode::Mobile, 3);

        assert_eq!(bar.handle(0, MenuEvent::TriggerActivated), Some(MenuState::Open));
        assert_eq!(bar.open_menus(), vec![0]);

        assert_eq!(bar.handle(1, MenuEvent::TriggerActivated), Some(MenuState::Open));
        assert_eq!(bar.open_menus(), vec![1]);
        assert_eq!(seen[0].live_listeners.get(), 0);
        assert_eq!(seen[1].live_listeners.get(), 1);
    }

    #[test]
    fn test_desktop_siblings_stay_open_until_their_timer() {
        let (mut bar, seen) = bar(MenuMode::Desktop, 2);

        bar.handle(0, MenuEvent::PointerEnter(MenuZone::Trigger));
        bar.handle(0, MenuEvent::PointerLeave { zone: MenuZone::Trigger, into_other: false });
        bar.handle(1, MenuEvent::PointerEnter(MenuZone::Trigger));
        assert_eq!(bar.open_menus(), vec![0, 1]);

        let ticket = seen[0].scheduled.borrow().last().expect("close scheduled").0;
        bar.handle(0, MenuEvent::CloseTimerElapsed(ticket));
        assert_eq!(bar.open_menus(), vec![1]);
    }

    #[test]
    fn test_closing_does_not_notify_siblings() {
        let (mut bar, seen) = bar(MenuMode::Mobile, 2);
        bar.handle(1, MenuEvent::TriggerActivated);
        bar.handle(0, MenuEvent::TriggerActivated);
        bar.handle(0, MenuEvent::TriggerActivated);

        assert!(bar.open_menus().is_empty());
        assert_eq!(*seen[1].transitions.borrow(), vec![MenuState::Open, MenuState::Closed]);
    }

    #[test]
    fn test_update_open_also_enforces_exclusion() {
        let (mut bar, _) = bar(MenuMode::Mobile, 2);
        bar.update(0, |m| m.open());
        bar.update(1, |m| m.toggle());
        assert_eq!(bar.open_menus(), vec![1]);
    }

    #[test]
    fn test_mode_switch_and_close_all() {
        let (mut bar, seen) = bar(MenuMode::Desktop, 2);
        bar.handle(0, MenuEvent::PointerEnter(MenuZone::Panel));
        bar.set_mode(MenuMode::Mobile);
        assert!(bar.open_menus().is_empty());
        assert_eq!(seen[0].live_listeners.get(), 0);

        bar.handle(1, MenuEvent::TriggerActivated);
        bar.close_all();
        assert!(bar.open_menus().is_empty());
    }

    #[test]
    fn test_resize_broadcast_and_unknown_index() {
        let (mut bar, seen) = bar(MenuMode::Desktop, 2);
        for seen in &seen {
            seen.navbar_height.set(Some(96.0));
        }
        bar.broadcast(MenuEvent::ViewportResized);
        assert_eq!(bar.menu(0).map(|m| m.anchor_offset()), Some(96.0));
        assert_eq!(bar.menu(1).map(|m| m.anchor_offset()), Some(96.0));
        assert_eq!(bar.handle(5, MenuEvent::TriggerActivated), None);
        assert_eq!(bar.len(), 2);
    }
}
