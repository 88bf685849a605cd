//! Human-readable rendering of ISO 8601 durations.
//!
//! Only the time designators (hours, minutes, seconds) are recognized, each
//! independently and in any order. Anything else passes through untouched.

use regex::Regex;
use std::sync::LazyLock;

static HOURS_RE: LazyLock<Regex> = LazyLock::new(|| component_regex('H'));
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| component_regex('M'));
static SECONDS_RE: LazyLock<Regex> = LazyLock::new(|| component_regex('S'));

fn component_regex(designator: char) -> Regex {
    let pattern = format!(r"(?i)(\d+){}", designator);
    Regex::new(&pattern).unwrap_or_else(|e| {
        log::error!("Failed to compile duration pattern '{}': {}", pattern, e);
        crate::utils::never_matching_regex()
    })
}

/// Formats a duration such as `PT1H30M` as `1 hour 30 minutes`.
///
/// Components are always listed as hours, minutes, seconds regardless of
/// their order in the input. Matching is case-insensitive.
///
/// # Returns
///
/// The formatted phrase, or `duration` unchanged when no component matches.
///
/// # Examples
///
/// ```
/// use faq_howto_schema::format_duration;
///
/// assert_eq!(format_duration("PT1H30M"), "1 hour 30 minutes");
/// assert_eq!(format_duration("PT5M2H"), "2 hours 5 minutes");
/// assert_eq!(format_duration("soon"), "soon");
/// ```
pub fn format_duration(duration: &str) -> String {
    let parts: Vec<String> = [
        (&*HOURS_RE, "hour", "hours"),
        (&*MINUTES_RE, "minute", "minutes"),
        (&*SECONDS_RE, "second", "seconds"),
    ]
    .into_iter()
    .filter_map(|(re, singular, plural)| {
        let value = component_value(re, duration)?;
        Some(pluralize(value, singular, plural))
    })
    .collect();

    if parts.is_empty() {
        duration.to_string()
    } else {
        parts.join(" ")
    }
}

fn component_value(re: &Regex, duration: &str) -> Option<u64> {
    let digits = re.captures(duration)?.get(1)?.as_str();
    match digits.parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Ignoring duration component '{}': {}", digits, e);
            None
        }
    }
}

fn pluralize(value: u64, singular: &str, plural: &str) -> String {
    if value == 1 {
        format!("{} {}", value, singular)
    } else {
        format!("{} {}", value, plural)
    }
}
