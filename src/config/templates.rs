use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::yml_settings::YmlSettings;
use crate::domain::{UrlPath, UrlPathOptions};

pub const DEFAULT_CONFIG_FILE: &str = "templates.yml";

/// A compiled template together with its human readable description
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub description: Option<String>,
    pub path: UrlPath,
}

impl TryFrom<YmlSettings> for TemplateEntry {
    type Error = anyhow::Error;

    fn try_from(value: YmlSettings) -> Result<Self> {
        let options = UrlPathOptions {
            case_sensitive: value.case_sensitive,
        };
        let path = UrlPath::with_options(&value.template, options)
            .with_context(|| format!("Invalid template for '{}'", value.name))?;

        Ok(Self {
            description: value.description,
            path,
        })
    }
}

/// Named templates loaded from configuration, compiled once at load time
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, TemplateEntry>,
}

impl TemplateRegistry {
    pub fn from_settings(settings: Vec<YmlSettings>) -> Result<Self> {
        let mut templates = BTreeMap::new();

        for setting in settings {
            let name = setting.name.clone();
            let entry = TemplateEntry::try_from(setting)?;
            if templates.insert(name.clone(), entry).is_some() {
                bail!("Duplicate template name: {}", name);
            }
        }

        tracing::debug!(count = templates.len(), "loaded URL templates");
        Ok(Self { templates })
    }

    pub fn from_yaml(yml: &str) -> Result<Self> {
        let settings: Vec<YmlSettings> =
            serde_yaml::from_str(yml).context("Invalid yaml configuration")?;
        Self::from_settings(settings)
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        let yml = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_yaml(&yml).with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn get(&self, name: &str) -> Option<&UrlPath> {
        self.templates.get(name).map(|entry| &entry.path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateEntry)> {
        self.templates
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
