//! Home root composition
//!
//! Builds the home root from the two configuration fragments. No filesystem
//! access happens here.

use std::path::MAIN_SEPARATOR_STR;

/// Append a separator unless `fragment` already ends with one.
///
/// Repeated trailing separators are kept as they are.
pub fn with_trailing_separator(fragment: &str) -> String {
    if fragment.ends_with(MAIN_SEPARATOR_STR) {
        fragment.to_string()
    } else {
        format!("{}{}", fragment, MAIN_SEPARATOR_STR)
    }
}

/// Compose the home root from the home location and the application directory name
pub fn compose_home_path(location: &str, name: &str) -> String {
    let mut path = with_trailing_separator(location);
    path.push_str(&with_trailing_separator(name));
    path
}
