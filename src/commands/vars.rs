use serde::Serialize;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;
use crate::resolver::VariableName;

#[derive(Debug, Serialize)]
struct VariableInfo {
    name: &'static str,
    description: &'static str,
}

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let vars = VariableName::ALL
        .into_iter()
        .map(|name| VariableInfo {
            name: name.as_str(),
            description: name.describe(),
        })
        .collect::<Vec<_>>();

    if ctx.output.mode() == OutputMode::Text {
        for var in &vars {
            println!("{:<16} {}", var.name, var.description);
        }
        return Ok(());
    }

    ctx.output.emit("", &vars)
}
