//! Application context — unified state passed to every command handler.

use crate::infra::aws::AwsTarget;
use crate::output::OutputContext;

/// Unified application context passed to every command handler.
///
/// Constructed once in `Cli::run()` and passed as `&AppContext` to all
/// command handlers.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// AWS profile/region overrides from the global flags.
    pub target: AwsTarget,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool, target: AwsTarget) -> Self {
        Self {
            output: OutputContext::new(no_color, quiet),
            target,
        }
    }
}
