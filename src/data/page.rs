use super::error::ConversionError;

const SUMMARY_NAME: &str = "Summary";
const PAGE_PREFIX: &str = "Page";

/// Number of numbered pages the deck can address.
pub const PAGE_COUNT: u8 = 15;

/// Identifier for one panel of the deck: the Summary overview or one of the
/// numbered pages. The set is closed; there is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageId {
    Summary,
    Page(u8),
}

impl PageId {
    /// Every addressable identifier, Summary first.
    pub fn all() -> impl Iterator<Item = PageId> {
        std::iter::once(PageId::Summary).chain((1..=PAGE_COUNT).map(PageId::Page))
    }
}

impl TryFrom<&str> for PageId {
    type Error = ConversionError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value == SUMMARY_NAME {
            return Ok(PageId::Summary);
        }
        if let Some(digits) = value.strip_prefix(PAGE_PREFIX) {
            if let Ok(number) = digits.parse::<u8>() {
                // Only the canonical spelling counts; Page01 and Page+1 do not
                if digits == number.to_string() && (1..=PAGE_COUNT).contains(&number) {
                    return Ok(PageId::Page(number));
                }
            }
        }
        Err(ConversionError::BadString(String::from(value)))
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageId::Summary => write!(f, "{SUMMARY_NAME}"),
            PageId::Page(number) => write!(f, "{PAGE_PREFIX}{number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_and_numbered_pages() {
        assert_eq!(PageId::try_from("Summary").unwrap(), PageId::Summary);
        assert_eq!(PageId::try_from("Page1").unwrap(), PageId::Page(1));
        assert_eq!(PageId::try_from("Page15").unwrap(), PageId::Page(15));
    }

    #[test]
    fn rejects_everything_outside_the_enumeration() {
        for bad in ["Page0", "Page16", "page1", "Page01", "Page+1", "Pages1", "Page", "", "NotAPage"] {
            assert!(PageId::try_from(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn display_round_trips_every_identifier() {
        for page in PageId::all() {
            let name = page.to_string();
            assert_eq!(PageId::try_from(name.as_str()).unwrap(), page);
        }
    }

    #[test]
    fn the_enumeration_has_sixteen_identifiers() {
        assert_eq!(PageId::all().count(), 16);
    }
}
