use std::io::{self, Write};

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub value: Option<&'a str>,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => print_line(text_line),
            OutputMode::Json => print_json(json_value),
        }
    }

    pub fn emit_value(&self, value: Option<&str>) -> AppResult<()> {
        match (self.mode, value) {
            (OutputMode::Text, Some(value)) => print_line(value),
            (OutputMode::Text, None) => {
                tracing::info!("no value resolved");
                Ok(())
            }
            (OutputMode::Json, value) => print_json(&Resolution { value }),
        }
    }
}

fn print_line(line: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_value_serializes_as_null() {
        let payload = serde_json::to_string(&Resolution { value: None }).expect("serializable");
        assert_eq!(payload, r#"{"value":null}"#);
    }

    #[test]
    fn empty_value_stays_a_string() {
        let payload =
            serde_json::to_string(&Resolution { value: Some("") }).expect("serializable");
        assert_eq!(payload, r#"{"value":""}"#);
    }
}
