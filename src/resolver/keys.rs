use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

pub const ACTION: &str = "action";
pub const VARIABLE_NAME: &str = "variable_name";
pub const CURRENT_VALUE: &str = "current_value";
pub const DEFAULT_VALUE: &str = "default_value";
pub const DEFAULT_NONE: &str = "default_none";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    FetchVariable,
    EnforceDefault,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchVariable => "fetch_variable",
            Self::EnforceDefault => "enforce_default",
        }
    }
}

impl FromStr for Action {
    type Err = ResolveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "fetch_variable" => Ok(Self::FetchVariable),
            "enforce_default" => Ok(Self::EnforceDefault),
            other => Err(ResolveError::UnexpectedValue {
                key: ACTION,
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum VariableName {
    Environment,
    Timestamp,
    LanguageCode,
    TimezoneOffset,
    VersionName,
    LoggedIn,
    AnonymizeIp,
}

impl VariableName {
    pub const ALL: [VariableName; 7] = [
        Self::Environment,
        Self::Timestamp,
        Self::LanguageCode,
        Self::TimezoneOffset,
        Self::VersionName,
        Self::LoggedIn,
        Self::AnonymizeIp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Timestamp => "timestamp",
            Self::LanguageCode => "language_code",
            Self::TimezoneOffset => "timezone_offset",
            Self::VersionName => "version_name",
            Self::LoggedIn => "logged_in",
            Self::AnonymizeIp => "anonymize_ip",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::Environment => "\"test\" in debug builds, otherwise \"production\"",
            Self::Timestamp => "local time with millisecond precision and zone",
            Self::LanguageCode => "language code of the current locale (e.g. \"en\")",
            Self::TimezoneOffset => "current UTC offset in hours (e.g. \"-8.0\")",
            Self::VersionName => "application version string",
            Self::LoggedIn => "\"true\" when a user session is active",
            Self::AnonymizeIp => "\"true\" when the IP address should be anonymized",
        }
    }
}

impl FromStr for VariableName {
    type Err = ResolveError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| ResolveError::UnexpectedValue {
                key: VARIABLE_NAME,
                value: value.to_string(),
            })
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_names_parse_from_wire_form() {
        for name in VariableName::ALL {
            assert_eq!(name.as_str().parse::<VariableName>(), Ok(name));
        }
    }

    #[test]
    fn unknown_action_reports_its_value() {
        let err = "track".parse::<Action>().expect_err("unknown action");
        assert_eq!(err.to_string(), "Unexpected 'action' value: track");
    }

    #[test]
    fn wire_names_are_case_sensitive() {
        assert!("Timestamp".parse::<VariableName>().is_err());
        assert!("FETCH_VARIABLE".parse::<Action>().is_err());
    }
}
