//! Local UI chrome state (theme, navigation menus).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of session state so the navbar can evolve
//! independently of identity data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through an `RwSignal<UiState>` context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    /// Collapsed navigation menu on narrow screens.
    pub mobile_menu_open: bool,
    /// Avatar dropdown with the user's name and Logout.
    pub user_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.user_menu_open = false;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    /// Close every open menu, e.g. after following a link.
    pub fn close_menus(&mut self) {
        self.mobile_menu_open = false;
        self.user_menu_open = false;
    }
}
