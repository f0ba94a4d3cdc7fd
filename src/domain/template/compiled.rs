// Compiled template: normalized source plus cached patterns

use crate::error::Result;

use super::ast::ParamKey;
use super::parser::TemplateParser;
use super::pattern::PathPattern;
use super::substitutor::Substitutor;

/// A template compiled once and shared by every match/format call
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    source: String,
    exact: PathPattern,
    prefix: PathPattern,
    substitutor: Substitutor,
    keys: Vec<ParamKey>,
}

impl CompiledTemplate {
    pub fn compile(template: &str, case_sensitive: bool) -> Result<Self> {
        let source = normalize(template);
        let parsed = TemplateParser::parse(&source)?;

        let exact = PathPattern::compile(&parsed, true, case_sensitive)?;
        let prefix = PathPattern::compile(&parsed, false, case_sensitive)?;
        let keys = parsed.keys().into_iter().cloned().collect::<Vec<_>>();

        tracing::debug!(
            template = %source,
            params = keys.len(),
            exact = exact.as_str(),
            prefix = prefix.as_str(),
            "compiled URL template"
        );

        Ok(Self {
            source,
            exact,
            prefix,
            substitutor: Substitutor::new(parsed),
            keys,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn keys(&self) -> &[ParamKey] {
        &self.keys
    }

    pub fn pattern(&self, exact: bool) -> &PathPattern {
        if exact {
            &self.exact
        } else {
            &self.prefix
        }
    }

    pub fn substitutor(&self) -> &Substitutor {
        &self.substitutor
    }
}

/// Strip one trailing `/` unless the template is the root
fn normalize(template: &str) -> String {
    match template.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => template.to_string(),
    }
}
