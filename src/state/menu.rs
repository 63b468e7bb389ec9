use crate::sections::SectionId;
use crate::utils::scroll::{scroll_to, ScrollOutcome, Viewport};

/// Whether the mobile dropdown is open. One instance lives in the `Landing`
/// component and is handed down through props.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub expanded: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        MenuState { expanded: !self.expanded }
    }

    pub fn closed(self) -> Self {
        MenuState { expanded: false }
    }
}

/// Whether the mobile dropdown is mounted. It stays mounted while its exit
/// animation plays after the menu closes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownPhase {
    #[default]
    Unmounted,
    Open,
    Leaving,
}

impl DropdownPhase {
    /// Phase after the menu's `expanded` flag changes.
    pub fn follow(self, expanded: bool) -> Self {
        match (self, expanded) {
            (_, true) => DropdownPhase::Open,
            (DropdownPhase::Open, false) => DropdownPhase::Leaving,
            (phase, false) => phase,
        }
    }

    /// Phase once the exit animation has finished.
    pub fn settled(self) -> Self {
        match self {
            DropdownPhase::Leaving => DropdownPhase::Unmounted,
            phase => phase,
        }
    }

    /// `Some(leaving)` when the dropdown should be in the tree.
    pub fn render(self, expanded: bool) -> Option<bool> {
        if expanded {
            Some(false)
        } else if self == DropdownPhase::Leaving {
            Some(true)
        } else {
            None
        }
    }
}

/// Closes the menu and scrolls to `id`. Returns the new menu state together
/// with what the viewport did.
pub fn select_section<V: Viewport>(menu: MenuState, viewport: &V, id: &str) -> (MenuState, ScrollOutcome) {
    let menu = menu.closed();
    if SectionId::parse(id).is_none() {
        log::debug!("#{} is not a registered section", id);
    }
    let outcome = scroll_to(viewport, id);
    (menu, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scroll::test_support::FakeViewport;

    #[test]
    fn starts_collapsed() {
        assert!(!MenuState::default().expanded);
    }

    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let once = MenuState::default().toggled();
        assert!(once.expanded);
        assert!(!once.toggled().expanded);
    }

    #[test]
    fn dropdown_plays_exit_before_unmounting() {
        let open = DropdownPhase::default().follow(true);
        assert_eq!(open, DropdownPhase::Open);
        assert_eq!(open.render(true), Some(false));

        let leaving = open.follow(false);
        assert_eq!(leaving, DropdownPhase::Leaving);
        assert_eq!(leaving.render(false), Some(true));

        assert_eq!(leaving.settled(), DropdownPhase::Unmounted);
        assert_eq!(leaving.settled().render(false), None);
    }

    #[test]
    fn reopening_mid_exit_shows_open_dropdown() {
        let leaving = DropdownPhase::Open.follow(false);
        assert_eq!(leaving.follow(true), DropdownPhase::Open);
        assert_eq!(DropdownPhase::Open.settled(), DropdownPhase::Open);
    }

    #[test]
    fn collapsed_on_load_renders_nothing() {
        let phase = DropdownPhase::default().follow(false);
        assert_eq!(phase, DropdownPhase::Unmounted);
        assert_eq!(phase.render(false), None);
    }

    #[test]
    fn select_section_always_closes() {
        let viewport = FakeViewport::with_sections(&[("features", 900.0)]);
        for start in [MenuState { expanded: true }, MenuState { expanded: false }] {
            let (menu, _) = select_section(start, &viewport, "features");
            assert!(!menu.expanded);
        }
    }

    #[test]
    fn select_section_closes_even_for_missing_target() {
        let viewport = FakeViewport::with_sections(&[]);
        let (menu, outcome) = select_section(MenuState { expanded: true }, &viewport, "nowhere");
        assert!(!menu.expanded);
        assert_eq!(outcome, ScrollOutcome::MissingTarget);
    }

    #[test]
    fn pricing_from_open_mobile_menu() {
        let viewport = FakeViewport::with_sections(&[("hero", 0.0), ("pricing", 2400.0)]);
        let (menu, outcome) = select_section(MenuState { expanded: true }, &viewport, "pricing");
        assert!(!menu.expanded);
        assert_eq!(outcome, ScrollOutcome::Scrolled);
        assert_eq!(viewport.scroll_top(), 2400.0);
    }
}
