//! `validate` command handler.
//!
//! Parses a documentation record and prints every semantic issue
//! found, errors first.

use crate::cli::args::ValidateArgs;
use crate::doc::{DocumentationRecord, Validator};
use crate::error::{DocuframeError, InputError};

/// Validate a documentation record file.
///
/// # Errors
///
/// Returns an input error when the record fails to parse or has
/// error-severity issues; warnings alone do not fail.
pub async fn run(args: &ValidateArgs) -> Result<(), DocuframeError> {
    let text = tokio::fs::read_to_string(&args.doc).await?;
    let record =
        DocumentationRecord::from_json(&text).map_err(InputError::InvalidJson)?;

    let result = Validator::new().validate(&record);
    for issue in result.errors.iter().chain(&result.warnings) {
        println!("{issue}");
    }

    if result.has_errors() {
        return Err(InputError::InvalidRecord {
            path: args.doc.display().to_string(),
            count: result.errors.len(),
        }
        .into());
    }

    println!(
        "{}: ok ({} warning(s))",
        args.doc.display(),
        result.warnings.len()
    );
    Ok(())
}
