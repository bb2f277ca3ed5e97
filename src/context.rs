use std::sync::Arc;

use crate::config::{self, AppPaths, Settings};
use crate::error::AppResult;
use crate::output::Output;
use crate::resolver::{Environment, SystemPlatform, VariableResolver};

#[derive(Debug)]
pub struct AppContext {
    pub profile: String,
    pub verbose: u8,
    pub paths: AppPaths,
    pub settings: Settings,
    pub resolver: VariableResolver,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        profile: String,
        json: bool,
        verbose: u8,
        environment: Option<Environment>,
    ) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Self::from_paths(paths, profile, json, verbose, environment)
    }

    pub fn from_paths(
        paths: AppPaths,
        profile: String,
        json: bool,
        verbose: u8,
        environment: Option<Environment>,
    ) -> AppResult<Self> {
        let profile = config::resolve_profile(&profile);
        let settings = config::load_settings(&paths, &profile)?;
        let resolver = build_resolver(&settings, environment)?;
        let output = Output::new(json);

        tracing::info!(
            profile = %profile,
            environment = %resolver.environment(),
            version = resolver.version_name(),
            "resolver ready"
        );

        Ok(Self {
            profile,
            verbose,
            paths,
            settings,
            resolver,
            output,
        })
    }
}

pub fn build_resolver(
    settings: &Settings,
    environment: Option<Environment>,
) -> AppResult<VariableResolver> {
    let mut platform = SystemPlatform::new();
    if let Some(zone) = settings.time_zone()? {
        platform = platform.with_zone(zone);
    }
    if let Some(locale) = settings.locale() {
        platform = platform.with_locale(locale);
    }

    let mut resolver =
        VariableResolver::new(settings.environment(environment), settings.version_name())
            .with_platform(Arc::new(platform));

    let session = settings.session();
    if session.is_configured() {
        resolver = resolver.with_session(Arc::new(session));
    }

    Ok(resolver)
}
