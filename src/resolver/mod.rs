pub mod environment;
pub mod keys;
pub mod platform;
pub mod request;
pub mod session;
pub mod values;

use std::fmt;
use std::sync::Arc;

pub use environment::Environment;
pub use keys::{Action, VariableName};
pub use platform::{FixedPlatform, LocalZone, Platform, SystemPlatform};
pub use request::Request;
pub use session::{SessionStateProvider, StaticSession};

use crate::error::ResolveError;

const ERROR_PREFIX: &str = "Analytics Variable Provider Error: ";

#[derive(Clone)]
pub struct VariableResolver {
    environment: Environment,
    version_name: String,
    platform: Arc<dyn Platform>,
    session: Option<Arc<dyn SessionStateProvider>>,
}

impl VariableResolver {
    pub fn new(environment: Environment, version_name: impl Into<String>) -> Self {
        Self {
            environment,
            version_name: version_name.into(),
            platform: Arc::new(SystemPlatform::new()),
            session: None,
        }
    }

    pub fn with_platform(mut self, platform: Arc<dyn Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_session(mut self, session: Arc<dyn SessionStateProvider>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn version_name(&self) -> &str {
        &self.version_name
    }

    /// Resolves one host request. `None` tells the host to omit the value.
    pub fn resolve(&self, request: &Request) -> Option<String> {
        match self.dispatch(request) {
            Ok(value) => value,
            Err(err) => self.error_value(&err),
        }
    }

    fn dispatch(&self, request: &Request) -> Result<Option<String>, ResolveError> {
        let action = request
            .non_empty_text(keys::ACTION)
            .ok_or(ResolveError::MissingKey(keys::ACTION))?;
        let action = action.parse::<Action>()?;
        let default = effective_default(request);

        tracing::debug!(%action, has_default = default.is_some(), "dispatching request");

        match action {
            Action::FetchVariable => {
                let name = request
                    .non_empty_text(keys::VARIABLE_NAME)
                    .ok_or(ResolveError::MissingKey(keys::VARIABLE_NAME))?;

                // Lookup failures still fall back to the default when the
                // error-value is suppressed.
                let value = match name.parse::<VariableName>().and_then(|name| self.fetch(name)) {
                    Ok(value) => Some(value),
                    Err(err) => self.error_value(&err),
                };

                Ok(value.filter(|value| !value.is_empty()).or(default))
            }
            Action::EnforceDefault => {
                let current = request.text(keys::CURRENT_VALUE);
                match current.as_deref() {
                    None | Some("" | "undefined" | "null") => Ok(default),
                    Some(value) => Ok(Some(value.to_string())),
                }
            }
        }
    }

    pub fn fetch(&self, name: VariableName) -> Result<String, ResolveError> {
        let value = match name {
            VariableName::Environment => self.environment.as_str().to_string(),
            VariableName::Timestamp => {
                values::timestamp(self.platform.now(), self.platform.local_zone())
            }
            VariableName::LanguageCode => self
                .platform
                .locale()
                .map(|locale| values::language_code(&locale))
                .unwrap_or_default(),
            VariableName::TimezoneOffset => {
                let zone = self.platform.local_zone();
                values::offset_hours(zone.offset_at(self.platform.now()))
            }
            VariableName::VersionName => self.version_name.clone(),
            VariableName::LoggedIn => self
                .session
                .as_ref()
                .and_then(|session| session.is_logged_in())
                .map(values::flag)
                .ok_or(ResolveError::NotImplemented("loggedInStatus"))?
                .to_string(),
            VariableName::AnonymizeIp => self
                .session
                .as_ref()
                .and_then(|session| session.should_anonymize_ip())
                .map(values::flag)
                .ok_or(ResolveError::NotImplemented("anonymizeIp"))?
                .to_string(),
        };

        Ok(value)
    }

    pub fn error_value(&self, err: &ResolveError) -> Option<String> {
        tracing::warn!(environment = %self.environment, error = %err, "unable to resolve request");

        match self.environment {
            Environment::Test => Some(format!("{ERROR_PREFIX}{err}")),
            Environment::Production => None,
        }
    }
}

impl fmt::Debug for VariableResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableResolver")
            .field("environment", &self.environment)
            .field("version_name", &self.version_name)
            .field("session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}

fn effective_default(request: &Request) -> Option<String> {
    if request.contains(keys::DEFAULT_NONE) {
        return None;
    }

    request.text(keys::DEFAULT_VALUE).map(|value| value.into_owned())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn resolver(environment: Environment) -> VariableResolver {
        let now = Utc.with_ymd_and_hms(2020, 2, 11, 19, 26, 2).unwrap();
        let zone = LocalZone::parse("America/Los_Angeles").expect("known zone");
        VariableResolver::new(environment, "1.4.2")
            .with_platform(Arc::new(FixedPlatform::new(now, zone, Some("en-US"))))
    }

    #[test]
    fn default_none_wins_over_default_value() {
        let request = Request::new()
            .with("default_value", "N/A")
            .with("default_none", "");
        assert_eq!(effective_default(&request), None);
    }

    #[test]
    fn missing_action_is_an_error_value() {
        let request = Request::new().with("variable_name", "timestamp");
        assert_eq!(
            resolver(Environment::Test).resolve(&request).as_deref(),
            Some("Analytics Variable Provider Error: 'action' key not found")
        );
        assert_eq!(resolver(Environment::Production).resolve(&request), None);
    }

    #[test]
    fn missing_variable_name_ignores_default() {
        let request = Request::new()
            .with("action", "fetch_variable")
            .with("default_value", "fallback");
        assert_eq!(
            resolver(Environment::Test).resolve(&request).as_deref(),
            Some("Analytics Variable Provider Error: 'variable_name' key not found")
        );
        assert_eq!(resolver(Environment::Production).resolve(&request), None);
    }

    #[test]
    fn placeholder_falls_back_to_default_in_production() {
        let request = Request::new()
            .with("action", "fetch_variable")
            .with("variable_name", "logged_in")
            .with("default_value", "unknown");
        assert_eq!(
            resolver(Environment::Production).resolve(&request).as_deref(),
            Some("unknown")
        );
        assert_eq!(
            resolver(Environment::Test).resolve(&request).as_deref(),
            Some("Analytics Variable Provider Error: Need to implement loggedInStatus")
        );
    }

    #[test]
    fn session_provider_answers_placeholders() {
        let resolver = resolver(Environment::Production)
            .with_session(Arc::new(StaticSession::new(Some(true), Some(false))));
        assert_eq!(resolver.fetch(VariableName::LoggedIn).as_deref(), Ok("true"));
        assert_eq!(resolver.fetch(VariableName::AnonymizeIp).as_deref(), Ok("false"));
    }

    #[test]
    fn partially_configured_session_errors_for_missing_field() {
        let resolver = resolver(Environment::Test)
            .with_session(Arc::new(StaticSession::new(Some(false), None)));
        assert_eq!(resolver.fetch(VariableName::LoggedIn).as_deref(), Ok("false"));
        assert_eq!(
            resolver.fetch(VariableName::AnonymizeIp),
            Err(ResolveError::NotImplemented("anonymizeIp"))
        );
    }
}
