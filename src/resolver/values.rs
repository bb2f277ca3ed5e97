use chrono::{DateTime, FixedOffset, Utc};

use super::platform::LocalZone;

pub const TRUE: &str = "true";
pub const FALSE: &str = "false";

pub fn timestamp(instant: DateTime<Utc>, zone: LocalZone) -> String {
    let local = instant.with_timezone(&zone.offset_at(instant));
    format!(
        "{} GMT{} ({})",
        local.format("%Y-%m-%d %H:%M:%S%.3f"),
        local.format("%z"),
        zone.abbreviation_at(instant)
    )
}

pub fn offset_hours(offset: FixedOffset) -> String {
    format!("{:.1}", f64::from(offset.local_minus_utc()) / 3600.0)
}

pub fn language_code(locale: &str) -> String {
    let primary = locale
        .trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default();

    let is_language = !primary.is_empty()
        && primary.chars().all(|c| c.is_ascii_alphabetic())
        && !primary.eq_ignore_ascii_case("c")
        && !primary.eq_ignore_ascii_case("posix");

    if is_language {
        primary.to_ascii_lowercase()
    } else {
        String::new()
    }
}

pub fn flag(value: bool) -> &'static str {
    if value { TRUE } else { FALSE }
}
