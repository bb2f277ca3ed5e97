pub mod config;
pub mod enforce;
pub mod fetch;
pub mod resolve;
pub mod vars;

use crate::cli::DefaultArgs;
use crate::resolver::Request;
use crate::resolver::keys::{DEFAULT_NONE, DEFAULT_VALUE};

pub(crate) fn with_defaults(mut request: Request, defaults: DefaultArgs) -> Request {
    if let Some(value) = defaults.default_value {
        request = request.with(DEFAULT_VALUE, value);
    }
    if defaults.default_none {
        request = request.with(DEFAULT_NONE, "");
    }
    request
}
