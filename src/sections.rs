use std::fmt;

/// Every region of the page that can be scrolled to or revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Testimonials,
    Pricing,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Testimonials,
        SectionId::Pricing,
        SectionId::Footer,
    ];

    /// DOM id the region is rendered with.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Footer => "footer",
        }
    }

    pub fn parse(id: &str) -> Option<SectionId> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// Regions on the first screen are shown on load instead of on scroll.
    pub fn is_first_screen(self) -> bool {
        matches!(self, SectionId::Hero)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section: SectionId,
}

/// Navigation links in display order, shared by the desktop bar and the
/// mobile dropdown.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { label: "Features", section: SectionId::Features },
    NavItem { label: "Testimonials", section: SectionId::Testimonials },
    NavItem { label: "Pricing", section: SectionId::Pricing },
];
