// touchform/src/config.rs: form definitions loaded from `touchform.toml`
use std::path::Path;

use garde::Validate;
use serde::Deserialize;
use tracing::warn;

use crate::error::{FormError, Result};
use crate::field::FieldDefinition;
use crate::form::FormState;
use crate::id::FieldId;
use crate::input::InputConfig;
use crate::kind::{FieldKind, YearRange, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};

pub const DEFAULT_CONFIG_FILE: &str = "touchform.toml";

/// Form definition file.
///
/// ```toml
/// [form]
/// name = "signup"
///
/// [[fields]]
/// id = "birth_year"
/// label = "Birth year"
/// kind = "year"
/// min = 1900
/// max = 2019
///
/// [[fields]]
/// id = "nickname"
/// kind = "text"
/// optional = true
/// ```
#[derive(Debug, Default, Deserialize, Validate)]
pub struct FormConfig {
    #[serde(default)]
    #[garde(dive)]
    pub form: FormSection,
    #[serde(default)]
    #[garde(dive)]
    pub fields: Vec<FieldSpec>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FormSection {
    #[serde(default = "default_name")]
    #[garde(length(min = 1))]
    pub name: String,
}

fn default_name() -> String {
    "form".into()
}

impl Default for FormSection {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct FieldSpec {
    #[garde(length(min = 1))]
    pub id: String,
    /// Defaults to the id.
    #[serde(default)]
    #[garde(length(min = 1))]
    pub label: Option<String>,
    #[serde(flatten)]
    #[garde(skip)]
    pub kind: KindSpec,
    #[serde(default)]
    #[garde(skip)]
    pub optional: bool,
    /// Value the field is mounted with.
    #[serde(default)]
    #[garde(skip)]
    pub value: String,
    #[serde(default)]
    #[garde(skip)]
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindSpec {
    Text {
        #[serde(default)]
        min_length: Option<usize>,
        #[serde(default)]
        max_length: Option<usize>,
    },
    Email,
    Url,
    Year {
        #[serde(default)]
        min: Option<i32>,
        #[serde(default)]
        max: Option<i32>,
        /// Upper bound follows the calendar. Cannot be combined with `max`.
        #[serde(default)]
        through_current_year: bool,
    },
    Number {
        #[serde(default)]
        min: Option<i64>,
        #[serde(default)]
        max: Option<i64>,
    },
    Pattern {
        pattern: String,
    },
}

impl KindSpec {
    pub fn to_kind(&self) -> Result<FieldKind> {
        match self {
            KindSpec::Text {
                min_length,
                max_length,
            } => FieldKind::text_bounded(*min_length, *max_length),
            KindSpec::Email => Ok(FieldKind::email()),
            KindSpec::Url => Ok(FieldKind::url()),
            KindSpec::Year {
                min,
                max,
                through_current_year,
            } => {
                let min = min.unwrap_or(DEFAULT_MIN_YEAR);
                let range = match (max, through_current_year) {
                    (Some(_), true) => {
                        return Err(FormError::InvalidDefinition(
                            "year field sets both `max` and `through_current_year`".into(),
                        ))
                    }
                    (None, true) => YearRange::through_current_year(min)?,
                    (max, false) => YearRange::new(min, max.unwrap_or(DEFAULT_MAX_YEAR))?,
                };
                Ok(FieldKind::Year(range))
            }
            KindSpec::Number { min, max } => FieldKind::number(*min, *max),
            KindSpec::Pattern { pattern } => FieldKind::pattern(pattern),
        }
    }
}

impl FieldSpec {
    pub fn to_definition(&self) -> Result<FieldDefinition> {
        let id = FieldId::parse(&self.id)?;
        let label = self.label.clone().unwrap_or_else(|| self.id.trim().to_string());
        let mut definition = FieldDefinition::new(id, label, self.kind.to_kind()?)
            .with_value(self.value.clone());
        definition.optional = self.optional;
        Ok(definition)
    }
}

impl FormConfig {
    /// Load from `touchform.toml` in the current directory.
    /// Returns an empty definition if the file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_in(".")
    }

    /// Load `touchform.toml` from `dir`, falling back to an empty definition.
    pub fn load_in(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            warn!("{} not found, using an empty form", path.display());
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            warn!("failed to load {}: {}, using an empty form", path.display(), e);
            Self::default()
        })
    }

    /// Load from a specific path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| FormError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Checks the definition and builds the form it describes.
    pub fn to_form(&self) -> Result<FormState> {
        self.validate()
            .map_err(|report| FormError::InvalidDefinition(report.to_string()))?;
        let definitions = self
            .fields
            .iter()
            .map(FieldSpec::to_definition)
            .collect::<Result<Vec<_>>>()?;
        FormState::from_definitions(definitions)
    }

    /// Input options declared for a field.
    pub fn input_config(&self, id: &str) -> Option<&InputConfig> {
        self.fields
            .iter()
            .find(|f| f.id.trim() == id)
            .map(|f| &f.input)
    }
}
