use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static SECRET_PARAMS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<key>(?:apisecret|usertoken|password|old_password)=)[^&]*")
        .expect("redaction pattern is a valid regex")
});

/// Masks secret query parameters (`apisecret`, `usertoken`, `password`, `old_password`) in a URL
///
/// Used before logging request URLs. Other parameters are returned untouched.
pub fn redact_secrets(url: &str) -> Cow<'_, str> {
    SECRET_PARAMS.replace_all(url, "${key}***")
}
