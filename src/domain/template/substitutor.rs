// Rebuilds a concrete path from a template and parameter values

use crate::domain::params::Params;
use crate::error::{Error, Result};

use super::ast::{Template, TemplatePart};

/// Substitutes parameter values into a parsed template
#[derive(Debug, Clone)]
pub struct Substitutor {
    template: Template,
}

impl Substitutor {
    pub fn new(template: Template) -> Self {
        Self { template }
    }

    /// Build the path for the given values.
    ///
    /// Values are percent-encoded. A required parameter without a non-empty
    /// value fails with [`Error::MissingParameter`]; an optional one is dropped
    /// together with its separator.
    pub fn substitute(&self, params: &Params) -> Result<String> {
        let mut path = String::new();

        for part in &self.template.parts {
            match part {
                TemplatePart::Literal(text) => path.push_str(text),
                TemplatePart::Param { key, prefix } => {
                    match params.get(&key.name).filter(|v| !v.is_empty()) {
                        Some(value) => {
                            if let Some(sep) = prefix {
                                path.push(*sep);
                            }
                            path.push_str(&urlencoding::encode(value));
                        }
                        None if key.optional => {}
                        None => return Err(Error::MissingParameter(key.name.clone())),
                    }
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateParser;

    fn substitutor(template: &str) -> Substitutor {
        Substitutor::new(TemplateParser::parse(template).unwrap())
    }

    #[test]
    fn test_substitute_literal_only() {
        let result = substitutor("/p/settings").substitute(&Params::new()).unwrap();
        assert_eq!(result, "/p/settings");
    }

    #[test]
    fn test_substitute_required() {
        let params = Params::new().with("p", "123");
        let result = substitutor("/:p/settings").substitute(&params).unwrap();
        assert_eq!(result, "/123/settings");
    }

    #[test]
    fn test_substitute_optional_omitted() {
        let sub = substitutor("/a/:id/:name?");
        assert_eq!(sub.substitute(&Params::new().with("id", "123")).unwrap(), "/a/123");

        let mut params = Params::new().with("id", "123");
        params.unset("name");
        assert_eq!(sub.substitute(&params).unwrap(), "/a/123");

        let params = Params::new().with("id", "123").with("name", "");
        assert_eq!(sub.substitute(&params).unwrap(), "/a/123");
    }

    #[test]
    fn test_substitute_optional_present() {
        let params = Params::new().with("id", "123").with("name", "456");
        let result = substitutor("/a/:id/:name?").substitute(&params).unwrap();
        assert_eq!(result, "/a/123/456");
    }

    #[test]
    fn test_substitute_encodes_values() {
        let params = Params::new().with("q", "hello world/x");
        let result = substitutor("/search/:q").substitute(&params).unwrap();
        assert_eq!(result, "/search/hello%20world%2Fx");
    }

    #[test]
    fn test_substitute_missing_required() {
        let result = substitutor("/a/:id").substitute(&Params::new());
        assert_eq!(result.unwrap_err(), Error::MissingParameter("id".to_string()));
    }

    #[test]
    fn test_substitute_empty_required() {
        let result = substitutor("/a/:id").substitute(&Params::new().with("id", ""));
        assert_eq!(result.unwrap_err(), Error::MissingParameter("id".to_string()));
    }

    #[test]
    fn test_substitute_only_optional_yields_root() {
        let result = substitutor("/:lang?").substitute(&Params::new()).unwrap();
        assert_eq!(result, "/");
    }
}
