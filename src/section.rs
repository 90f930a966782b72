use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Experience => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section containing the viewport midpoint, if any. On overlap the last
/// matching section in `sections` wins.
pub fn midpoint_section(
    scroll_y: f64,
    viewport_height: f64,
    sections: &[SectionBounds],
) -> Option<SectionId> {
    let midpoint = scroll_y + viewport_height / 2.0;

    sections
        .iter()
        .filter(|bounds| bounds.contains(midpoint))
        .last()
        .map(|bounds| bounds.section)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionTracker {
    active: SectionId,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTracker {
    pub fn new() -> Self {
        Self {
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        self.active != SectionId::Home
    }

    /// Last intersecting entry wins; exits never change the active section.
    pub fn observe_intersections(
        &mut self,
        entries: impl IntoIterator<Item = (SectionId, bool)>,
    ) -> Option<SectionId> {
        let entered = entries
            .into_iter()
            .filter(|(_, is_intersecting)| *is_intersecting)
            .map(|(section, _)| section)
            .last()?;

        self.set_active(entered)
    }

    pub fn observe_layout(
        &mut self,
        scroll_y: f64,
        viewport_height: f64,
        sections: &[SectionBounds],
    ) -> Option<SectionId> {
        let section = midpoint_section(scroll_y, viewport_height, sections)?;
        self.set_active(section)
    }

    fn set_active(&mut self, section: SectionId) -> Option<SectionId> {
        if self.active == section {
            return None;
        }

        self.active = section;
        Some(section)
    }
}
