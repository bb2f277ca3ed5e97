use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LocalZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl LocalZone {
    pub fn parse(name: &str) -> Result<Self, String> {
        name.trim()
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|err| format!("unknown time zone `{}`: {err}", name.trim()))
    }

    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
            Self::Fixed(offset) => *offset,
        }
    }

    // Zones without a letter abbreviation in the tz database report a bare
    // offset (`-03`, `+0545`); those get the `GMT+HH:MM` label instead.
    pub fn abbreviation_at(&self, instant: DateTime<Utc>) -> String {
        match self {
            Self::Named(tz) => {
                let name = instant.with_timezone(tz).format("%Z").to_string();
                if name.starts_with(['+', '-']) {
                    gmt_label(self.offset_at(instant))
                } else {
                    name
                }
            }
            Self::Fixed(offset) => gmt_label(*offset),
        }
    }
}

fn gmt_label(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("GMT{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

pub trait Platform: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    fn local_zone(&self) -> LocalZone;
    fn locale(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct SystemPlatform {
    zone: Option<LocalZone>,
    locale: Option<String>,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zone(mut self, zone: LocalZone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    fn detect_zone() -> LocalZone {
        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => return LocalZone::Named(tz),
                Err(err) => tracing::debug!(zone = %name, error = %err, "system zone not in tz database"),
            },
            Err(err) => tracing::debug!(error = %err, "unable to read system time zone"),
        }

        LocalZone::Fixed(Local::now().offset().fix())
    }
}

impl Platform for SystemPlatform {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_zone(&self) -> LocalZone {
        self.zone.unwrap_or_else(Self::detect_zone)
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone().or_else(sys_locale::get_locale)
    }
}

#[derive(Debug, Clone)]
pub struct FixedPlatform {
    pub now: DateTime<Utc>,
    pub zone: LocalZone,
    pub locale: Option<String>,
}

impl FixedPlatform {
    pub fn new(now: DateTime<Utc>, zone: LocalZone, locale: Option<&str>) -> Self {
        Self {
            now,
            zone,
            locale: locale.map(str::to_string),
        }
    }
}

impl Platform for FixedPlatform {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_zone(&self) -> LocalZone {
        self.zone
    }

    fn locale(&self) -> Option<String> {
        self.locale.clone()
    }
}
