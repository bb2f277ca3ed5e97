use crate::cli::FetchArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolver::Action;
use crate::resolver::Request;
use crate::resolver::keys::{ACTION, VARIABLE_NAME};

pub fn run(ctx: &AppContext, args: FetchArgs) -> AppResult<()> {
    let request = Request::new()
        .with(ACTION, Action::FetchVariable.as_str())
        .with(VARIABLE_NAME, args.name);
    let request = super::with_defaults(request, args.defaults);

    let value = ctx.resolver.resolve(&request);
    ctx.output.emit_value(value.as_deref())
}
