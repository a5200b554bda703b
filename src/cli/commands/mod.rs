//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod render;
pub mod validate;

use crate::cli::args::{Cli, Commands};
use crate::error::DocuframeError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), DocuframeError> {
    match cli.command {
        Commands::Render(args) => render::run(&args).await,
        Commands::Validate(args) => validate::run(&args).await,
    }
}
