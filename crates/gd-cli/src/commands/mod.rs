pub mod check;
pub mod levels;
pub mod loss;
pub mod play;

use std::path::Path;

use gd_core::{Content, ContentError};
use tracing::info;

/// Load and validate a content file. Validation issues are printed to
/// stderr, one per line.
fn load_content(path: &Path) -> Result<Content, String> {
    match Content::load(path) {
        Ok(content) => {
            info!(
                path = %path.display(),
                levels = content.level_count(),
                questions = content.question_count(),
                "content loaded"
            );
            Ok(content)
        }
        Err(ContentError::Invalid(issues)) => {
            for issue in &issues {
                eprintln!("  {issue}");
            }
            Err(format!(
                "{} failed validation with {} issue{}",
                path.display(),
                issues.len(),
                if issues.len() == 1 { "" } else { "s" }
            ))
        }
        Err(e) => Err(e.to_string()),
    }
}
