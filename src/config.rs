/// Brand shown in the nav bar, hero and footer. Override at build time with
/// `LANDING_BRAND_NAME`.
pub fn get_brand_name() -> &'static str {
    option_env!("LANDING_BRAND_NAME").unwrap_or("TaskFlow")
}

// Reveal animation
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.3;
pub const FOOTER_REVEAL_THRESHOLD: f64 = 0.0;
pub const REVEAL_OFFSET_Y: f64 = 40.0;
pub const REVEAL_DURATION_SECS: f64 = 0.7;

// Mobile dropdown
pub const MENU_OFFSET_Y: f64 = -20.0;
pub const MENU_DURATION_SECS: f64 = 0.3;
pub const MENU_EXIT_MS: u32 = 300;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_name_is_never_empty() {
        assert!(!get_brand_name().is_empty());
    }

    #[test]
    fn menu_unmounts_after_its_exit_animation() {
        assert_eq!(f64::from(MENU_EXIT_MS), MENU_DURATION_SECS * 1000.0);
    }

    #[test]
    fn thresholds_are_fractions() {
        for t in [SECTION_REVEAL_THRESHOLD, FOOTER_REVEAL_THRESHOLD] {
            assert!((0.0..=1.0).contains(&t));
        }
    }
}
