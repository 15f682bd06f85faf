use chrono::{Datelike, Local};

// current_year is read on every call, never cached, so a long session crossing
// new year sees the new bound.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use crate::utils::date::current_year;

    #[test]
    fn test_should_return_plausible_year() {
        let year = current_year();
        assert!(year >= 2024);
        assert!(year < 10000);
    }
}
