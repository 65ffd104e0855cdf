/// Format an ISO `YYYY-MM-DD` date as a short month-year label. Anything
/// that does not look like one is returned unchanged.
pub fn pretty_month(as_of: &str) -> String {
    let mut parts = as_of.split('-');
    let year = parts.next().unwrap_or_default();
    let month = match parts.next() {
        Some(month) => month,
        None => return String::from(as_of),
    };
    let name = match month {
        "01" => "Jan",
        "02" => "Feb",
        "03" => "Mar",
        "04" => "Apr",
        "05" => "May",
        "06" => "Jun",
        "07" => "Jul",
        "08" => "Aug",
        "09" => "Sep",
        "10" => "Oct",
        "11" => "Nov",
        "12" => "Dec",
        _ => return String::from(as_of),
    };
    if year.len() != 4 {
        return String::from(as_of);
    }
    format!("{name} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(pretty_month("2025-06-01"), "Jun 2025");
        assert_eq!(pretty_month("1999-12-31"), "Dec 1999");
    }

    #[test]
    fn leaves_everything_else_alone() {
        assert_eq!(pretty_month("June 2025"), "June 2025");
        assert_eq!(pretty_month("2025-13-01"), "2025-13-01");
        assert_eq!(pretty_month("25-06-01"), "25-06-01");
        assert_eq!(pretty_month(""), "");
    }
}
