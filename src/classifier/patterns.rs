use regex::Regex;
use std::sync::LazyLock;

// Optional run of digits, one token, then everything up to '>'.
static HOLD_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+ )?[^ ]+ +?([^>]+)").expect("HOLD description pattern must compile")
});

// A token and three segments, each closed by a literal backslash, then the merchant up to a double space.
static CARD_DESCRIPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r" [^ ]+?\\.+?\\.+?\\.+?\\(.+?)  ").expect("CRD description pattern must compile")
});

/// Extracts the merchant from the description of a pending card authorization.
pub fn extract_hold_payee(description: &str) -> Option<&str> {
    first_capture(&HOLD_DESCRIPTION, description)
}

/// Extracts the merchant from the description of a settled card operation.
pub fn extract_card_payee(description: &str) -> Option<&str> {
    first_capture(&CARD_DESCRIPTION, description)
}

fn first_capture<'a>(pattern: &Regex, text: &'a str) -> Option<&'a str> {
    pattern.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|capture| capture.as_str())
        .filter(|capture| !capture.is_empty())
}
