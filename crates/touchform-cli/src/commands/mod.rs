pub mod check;
pub mod replay;

use std::path::Path;

use anyhow::Context;
use touchform::{FormConfig, FormState};

/// Loads a definition file and mounts the form it describes.
///
/// Without a path, `touchform.toml` in the working directory is used, and a
/// missing or malformed file yields an empty form.
pub fn load_form(path: Option<&Path>) -> anyhow::Result<FormState> {
    let config = match path {
        Some(path) => FormConfig::load_from(path)?,
        None => FormConfig::load(),
    };
    tracing::debug!(form = %config.form.name, fields = config.fields.len(), "definition loaded");
    let source = path.map_or_else(
        || touchform::config::DEFAULT_CONFIG_FILE.to_string(),
        |p| p.display().to_string(),
    );
    config
        .to_form()
        .with_context(|| format!("invalid form definition in {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_definition_falls_back_to_empty_form() {
        // the crate directory has no touchform.toml
        let form = load_form(None).unwrap();
        assert!(form.is_empty());
    }
}
