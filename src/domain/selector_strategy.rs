/// Candidates at least this many characters long are not treated as names by
/// the generic fallback.
pub const SHORT_TEXT_THRESHOLD: usize = 50;

/// Tags scanned by the generic fallback once every strategy came back empty.
pub const FALLBACK_SELECTOR: &str = "h3, h4, strong, b";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SelectorStrategy {
    /// A CSS selector handed straight to the parser.
    Css(&'static str),
    /// Any element whose `class` attribute contains the needle, ignoring case.
    ClassContains(&'static str),
}

/// Tried in order, the first one yielding a non-empty name wins.
pub const CASCADE: [SelectorStrategy; 5] = [
    SelectorStrategy::Css(".company-card .company-name"),
    SelectorStrategy::Css(".company .name"),
    SelectorStrategy::Css("div[class*='company'] span[class*='name']"),
    SelectorStrategy::Css("h4"),
    SelectorStrategy::ClassContains("company"),
];

impl SelectorStrategy {
    pub fn class_matches(needle: &str, class_attr: &str) -> bool {
        class_attr
            .to_lowercase()
            .contains(needle.to_lowercase().as_str())
    }
}

pub fn is_short_text(text: &str) -> bool {
    text.chars().count() < SHORT_TEXT_THRESHOLD
}
