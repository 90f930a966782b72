use crate::section::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub section: SectionId,
    pub label: &'static str,
    pub highlighted: bool,
}

pub fn nav_entries(active: SectionId) -> Vec<NavEntry> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavEntry {
            section,
            label: section.label(),
            highlighted: section == active,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(self, scroll_y: f64, threshold_px: f64) -> Self {
        Self {
            scrolled: scroll_y > threshold_px,
            ..self
        }
    }

    pub fn chrome_opaque(&self) -> bool {
        self.scrolled || self.menu_open
    }

    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    // Leaves the active section to the tracker.
    pub fn navigate(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }
}
