use std::io;

use serde_json::Value;

use crate::cli::ResolveArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::resolver::Request;

pub fn run(ctx: &AppContext, args: ResolveArgs) -> AppResult<()> {
    let raw = match args.request {
        Some(raw) => raw,
        None => io::read_to_string(io::stdin())?,
    };

    let request = parse_request(&raw)?;
    tracing::debug!(keys = request.len(), "parsed request");

    let value = ctx.resolver.resolve(&request);
    ctx.output.emit_value(value.as_deref())
}

fn parse_request(raw: &str) -> AppResult<Request> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(AppError::InvalidInput("request is empty".to_string()));
    }

    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(AppError::InvalidInput(
            "request must be a JSON object".to_string(),
        ));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_requests() {
        let request = parse_request(r#" {"action":"fetch_variable","variable_name":"timestamp"} "#)
            .expect("object request");
        assert_eq!(request.text("action").as_deref(), Some("fetch_variable"));
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(
            parse_request(r#"["action"]"#),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(parse_request("   "), Err(AppError::InvalidInput(_))));
        assert!(matches!(parse_request("{"), Err(AppError::Json(_))));
    }
}
