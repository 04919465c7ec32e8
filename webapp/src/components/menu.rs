// Overlay state for the site header, kept separate from the components so
// that the hover-intent rules can be tested without a browser.
//
// the dropdown follows the pointer: entering a category trigger (or the open
// panel itself) shows that category and cancels any pending close, leaving
// starts a short countdown, and only an expired countdown or an explicit
// dismissal takes the panel down.  the mobile drawer is a plain toggle and
// never interacts with the dropdown.

// grace period between the pointer leaving and the panel closing, long
// enough to traverse the gap from trigger to panel
pub const CLOSE_DELAY_MS: u32 = 200;

// what the caller should do with the single pending close timer
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerAction {
    Keep,
    Cancel,
    Schedule,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    dropdown: Option<&'static str>,
    drawer: bool,
}

impl MenuState {
    pub fn dropdown(&self) -> Option<&'static str> {
        self.dropdown
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer
    }

    // pointer entered a category trigger or its open panel
    pub fn pointer_enter(&mut self, category_id: &'static str) -> TimerAction {
        self.dropdown = Some(category_id);
        TimerAction::Cancel
    }

    // pointer left the trigger or panel, so start the close countdown
    pub fn pointer_leave(&mut self) -> TimerAction {
        match self.dropdown {
            Some(_) => TimerAction::Schedule,
            None => TimerAction::Keep,
        }
    }

    // the countdown ran out without the pointer coming back
    pub fn close_elapsed(&mut self) {
        self.dropdown = None;
    }

    // immediate dismissal from an outside click or a link navigation
    pub fn dismiss_dropdown(&mut self) -> TimerAction {
        self.dropdown = None;
        TimerAction::Cancel
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer = !self.drawer;
    }

    pub fn close_drawer(&mut self) {
        self.drawer = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entering_a_trigger_opens_its_panel_and_cancels_the_timer() {
        let mut menu = MenuState::default();

        assert_eq!(menu.pointer_enter("underwater"), TimerAction::Cancel);
        assert_eq!(menu.dropdown(), Some("underwater"));
    }

    #[test]
    fn leaving_schedules_a_close_and_reentry_keeps_the_panel_up() {
        let mut menu = MenuState::default();

        let _ = menu.pointer_enter("underwater");
        assert_eq!(menu.pointer_leave(), TimerAction::Schedule);

        // the panel stays up during the grace period
        assert_eq!(menu.dropdown(), Some("underwater"));

        // pointer came back before the countdown fired
        assert_eq!(menu.pointer_enter("underwater"), TimerAction::Cancel);
        assert_eq!(menu.dropdown(), Some("underwater"));
    }

    #[test]
    fn an_expired_countdown_closes_the_panel() {
        let mut menu = MenuState::default();

        let _ = menu.pointer_enter("land");
        let _ = menu.pointer_leave();

        menu.close_elapsed();
        assert_eq!(menu.dropdown(), None);
    }

    #[test]
    fn leaving_with_nothing_open_schedules_nothing() {
        let mut menu = MenuState::default();

        assert_eq!(menu.pointer_leave(), TimerAction::Keep);
    }

    #[test]
    fn only_one_panel_is_open_at_a_time() {
        let mut menu = MenuState::default();

        let _ = menu.pointer_enter("underwater");
        let _ = menu.pointer_enter("air");

        assert_eq!(menu.dropdown(), Some("air"));
    }

    #[test]
    fn dismissal_clears_the_panel_and_the_pending_close() {
        let mut menu = MenuState::default();

        let _ = menu.pointer_enter("underwater");
        let _ = menu.pointer_leave();

        assert_eq!(menu.dismiss_dropdown(), TimerAction::Cancel);
        assert_eq!(menu.dropdown(), None);
    }

    #[test]
    fn the_drawer_is_independent_of_the_dropdown() {
        let mut menu = MenuState::default();

        menu.toggle_drawer();
        assert!(menu.drawer_open());

        let _ = menu.pointer_enter("underwater");
        let _ = menu.dismiss_dropdown();
        assert!(menu.drawer_open());

        let _ = menu.pointer_enter("underwater");
        menu.close_drawer();
        assert_eq!(menu.dropdown(), Some("underwater"));
        assert!(!menu.drawer_open());

        menu.toggle_drawer();
        menu.toggle_drawer();
        assert!(!menu.drawer_open());
    }
}
