use lazy_static::lazy_static;
use regex::Regex;

use crate::config::BASE_URL;

lazy_static! {
    static ref POPTASTIC_RE: Regex = Regex::new(r"poptastic\('([^']+)'\)").unwrap();
}

/// Extract the detail-page URL hidden inside a `poptastic('...')` script call.
///
/// The listing encodes navigation as an inline popup call instead of a plain
/// href. `None` means the entry cannot be deep-linked; callers skip it rather
/// than treat it as a failure.
pub fn resolve_detail_url(js_href: &str) -> Option<String> {
    let caps = POPTASTIC_RE.captures(js_href)?;
    Some(format!("{}{}", BASE_URL, &caps[1]))
}
