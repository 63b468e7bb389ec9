use chrono::{Datelike, Local};

/// Calendar year on the visitor's clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {} {}. All rights reserved.", year, brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_given_year_and_brand() {
        assert_eq!(copyright_line(2026, "TaskFlow"), "© 2026 TaskFlow. All rights reserved.");
    }

    #[test]
    fn current_year_matches_clock() {
        assert_eq!(current_year(), Local::now().year());
        assert!(current_year() >= 2024);
    }
}
