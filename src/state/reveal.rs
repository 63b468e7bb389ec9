use crate::config::{
    FOOTER_REVEAL_THRESHOLD, MENU_DURATION_SECS, MENU_OFFSET_Y, REVEAL_DURATION_SECS, REVEAL_OFFSET_Y,
    SECTION_REVEAL_THRESHOLD,
};
use crate::sections::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// This observation revealed the region.
    Fired,
    /// Nothing changed: below threshold or already visible.
    Ignored,
}

/// One-shot reveal for a single page region. Once visible it stays visible
/// and stops listening.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealController {
    state: RevealState,
    threshold: f64,
}

impl RevealController {
    /// Waits for `threshold` (fraction of the region's area, 0.0 meaning any
    /// pixel) to come into view.
    pub fn hidden(threshold: f64) -> Self {
        Self { state: RevealState::Hidden, threshold: threshold.clamp(0.0, 1.0) }
    }

    /// First-screen regions start out revealed.
    pub fn visible() -> Self {
        Self { state: RevealState::Visible, threshold: 0.0 }
    }

    pub fn for_section(section: SectionId) -> Self {
        match section {
            section if section.is_first_screen() => Self::visible(),
            SectionId::Footer => Self::hidden(FOOTER_REVEAL_THRESHOLD),
            _ => Self::hidden(SECTION_REVEAL_THRESHOLD),
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_observing(&self) -> bool {
        self.state == RevealState::Hidden
    }

    /// Feeds one intersection report. `ratio` is the visible fraction of the
    /// region's area.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> RevealTransition {
        if !self.is_observing() || !self.crosses(is_intersecting, ratio) {
            return RevealTransition::Ignored;
        }
        self.state = RevealState::Visible;
        RevealTransition::Fired
    }

    /// Reveals without an observation, for hosts that cannot observe.
    pub fn force_visible(&mut self) -> RevealTransition {
        self.observe(true, 1.0)
    }

    fn crosses(&self, is_intersecting: bool, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            is_intersecting
        } else {
            ratio >= self.threshold
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_secs: f64,
    pub easing: Easing,
}

pub const REVEAL_TRANSITION: Transition = Transition {
    duration_secs: REVEAL_DURATION_SECS,
    easing: Easing::EaseOut,
};

/// Resting values for opacity and vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionTarget {
    pub opacity: f64,
    pub translate_y: f64,
}

impl MotionTarget {
    pub fn for_state(state: RevealState) -> Self {
        match state {
            RevealState::Hidden => MotionTarget { opacity: 0.0, translate_y: REVEAL_OFFSET_Y },
            RevealState::Visible => MotionTarget { opacity: 1.0, translate_y: 0.0 },
        }
    }

    fn declarations(self) -> String {
        format!("opacity: {}; transform: translateY({}px);", self.opacity, self.translate_y)
    }

    /// Inline style; the browser interpolates between successive targets.
    pub fn to_style(self, transition: Transition) -> String {
        format!(
            "{} transition: opacity {secs}s {ease}, transform {secs}s {ease};",
            self.declarations(),
            secs = transition.duration_secs,
            ease = transition.easing.as_css(),
        )
    }
}

pub const MENU_TRANSITION: Transition = Transition {
    duration_secs: MENU_DURATION_SECS,
    easing: Easing::EaseInOut,
};

pub fn reveal_style(state: RevealState) -> String {
    MotionTarget::for_state(state).to_style(REVEAL_TRANSITION)
}

/// CSS for content that plays its motion once when mounted: first-screen
/// regions and the mobile dropdown, which has no earlier frame to transition
/// from.
pub fn enter_animation_css(class: &str, from: MotionTarget, transition: Transition) -> String {
    let to = MotionTarget::for_state(RevealState::Visible);
    format!(
        "@keyframes {class}-enter {{ from {{ {} }} to {{ {} }} }}\n.{class} {{ animation: {class}-enter {}s {}; }}",
        from.declarations(),
        to.declarations(),
        transition.duration_secs,
        transition.easing.as_css(),
    )
}

/// CSS for content that animates out before it is unmounted. Applied through
/// the `{class}-leaving` modifier and held at the final frame.
pub fn exit_animation_css(class: &str, to: MotionTarget, transition: Transition) -> String {
    let from = MotionTarget::for_state(RevealState::Visible);
    format!(
        "@keyframes {class}-exit {{ from {{ {} }} to {{ {} }} }}\n.{class}-leaving {{ animation: {class}-exit {}s {} forwards; }}",
        from.declarations(),
        to.declarations(),
        transition.duration_secs,
        transition.easing.as_css(),
    )
}

pub fn load_reveal_css(class: &str) -> String {
    enter_animation_css(class, MotionTarget::for_state(RevealState::Hidden), REVEAL_TRANSITION)
}

const MENU_OFFSTAGE: MotionTarget = MotionTarget { opacity: 0.0, translate_y: MENU_OFFSET_Y };

pub fn menu_enter_css(class: &str) -> String {
    enter_animation_css(class, MENU_OFFSTAGE, MENU_TRANSITION)
}

pub fn menu_exit_css(class: &str) -> String {
    exit_animation_css(class, MENU_OFFSTAGE, MENU_TRANSITION)
}
