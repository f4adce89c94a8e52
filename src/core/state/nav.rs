use crate::core::{cmd::Cmd, msg::nav::NavMsg};

/// Collapsible navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub selected: usize,
    pub link_count: usize,
}

impl NavState {
    pub fn new(link_count: usize) -> Self {
        Self {
            menu_open: false,
            selected: 0,
            link_count,
        }
    }

    /// Index of the highlighted link, if the menu is open and has links
    pub fn selected_link(&self) -> Option<usize> {
        (self.menu_open && self.selected < self.link_count).then_some(self.selected)
    }

    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            NavMsg::CloseMenu | NavMsg::Follow => {
                if !self.menu_open {
                    return vec![];
                }
                self.menu_open = false;
            }
            NavMsg::SelectNext => {
                if !self.menu_open || self.link_count == 0 {
                    return vec![];
                }
                self.selected = (self.selected + 1) % self.link_count;
            }
            NavMsg::SelectPrevious => {
                if !self.menu_open || self.link_count == 0 {
                    return vec![];
                }
                self.selected = (self.selected + self.link_count - 1) % self.link_count;
            }
        }
        vec![Cmd::RequestRender]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_toggle() {
        let mut nav = NavState::new(6);
        nav.update(NavMsg::ToggleMenu);
        assert!(nav.menu_open);
        nav.update(NavMsg::ToggleMenu);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_selection_wraps() {
        let mut nav = NavState::new(3);
        nav.update(NavMsg::ToggleMenu);

        nav.update(NavMsg::SelectPrevious);
        assert_eq!(nav.selected_link(), Some(2));
        nav.update(NavMsg::SelectNext);
        assert_eq!(nav.selected_link(), Some(0));
    }

    #[test]
    fn test_selection_ignored_while_closed() {
        let mut nav = NavState::new(3);
        assert!(nav.update(NavMsg::SelectNext).is_empty());
        assert_eq!(nav.selected, 0);
        assert_eq!(nav.selected_link(), None);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut nav = NavState::new(3);
        assert!(nav.update(NavMsg::CloseMenu).is_empty());
        nav.update(NavMsg::ToggleMenu);
        assert_eq!(nav.update(NavMsg::CloseMenu), vec![Cmd::RequestRender]);
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_empty_menu() {
        let mut nav = NavState::new(0);
        nav.update(NavMsg::ToggleMenu);
        assert!(nav.update(NavMsg::SelectNext).is_empty());
        assert_eq!(nav.selected_link(), None);
    }
}
