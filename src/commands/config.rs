use serde::Serialize;

use crate::cli::ConfigCommand;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct EffectiveSettings<'a> {
    profile: &'a str,
    environment: &'a str,
    version_name: &'a str,
    locale: Option<&'a str>,
    time_zone: Option<&'a str>,
    logged_in: Option<bool>,
    anonymize_ip: Option<bool>,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            let effective = EffectiveSettings {
                profile: &ctx.profile,
                environment: ctx.resolver.environment().as_str(),
                version_name: ctx.resolver.version_name(),
                locale: ctx.settings.locale(),
                time_zone: ctx.settings.time_zone.as_deref(),
                logged_in: ctx.settings.logged_in,
                anonymize_ip: ctx.settings.anonymize_ip,
            };

            let text = format!(
                "{}: {} build {} (locale {}, zone {})",
                effective.profile,
                effective.environment,
                effective.version_name,
                effective.locale.unwrap_or("system"),
                effective.time_zone.unwrap_or("system"),
            );
            ctx.output.emit(&text, &effective)
        }
        ConfigCommand::Path => {
            let path = ctx.paths.settings_file(&ctx.profile);
            let text = path.display().to_string();
            ctx.output.emit(&text, &text)
        }
    }
}
