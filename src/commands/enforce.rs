use crate::cli::EnforceArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::resolver::Action;
use crate::resolver::Request;
use crate::resolver::keys::{ACTION, CURRENT_VALUE};

pub fn run(ctx: &AppContext, args: EnforceArgs) -> AppResult<()> {
    let mut request = Request::new().with(ACTION, Action::EnforceDefault.as_str());
    if let Some(current) = args.current {
        request = request.with(CURRENT_VALUE, current);
    }
    let request = super::with_defaults(request, args.defaults);

    let value = ctx.resolver.resolve(&request);
    ctx.output.emit_value(value.as_deref())
}
