// Translation of a parsed template into an anchored regex

use regex::{Regex, RegexBuilder};

use crate::error::Result;

use super::ast::{Template, TemplatePart};

/// Compiled matching pattern for one anchoring mode.
///
/// Exact patterns anchor both ends of the path. Prefix patterns anchor the
/// start only and require the match to stop on a segment boundary, so
/// `/p/settings` accepts `/p/settings/more` but not `/p/settingsmore`.
/// A single trailing `/` is accepted in both modes.
#[derive(Debug, Clone)]
pub struct PathPattern {
    regex: Regex,
    end: bool,
}

impl PathPattern {
    pub fn compile(template: &Template, end: bool, case_sensitive: bool) -> Result<Self> {
        let mut route = String::from("^");
        let last = template.parts.len().saturating_sub(1);

        for (i, part) in template.parts.iter().enumerate() {
            match part {
                TemplatePart::Literal(text) => {
                    let text: &str = if i == last {
                        text.strip_suffix('/').unwrap_or(text)
                    } else {
                        text
                    };
                    route.push_str(&regex::escape(text));
                }
                TemplatePart::Param { key, prefix } => {
                    let class = match prefix {
                        Some('.') => "[^/.]+?",
                        _ => "[^/]+?",
                    };
                    let sep = prefix
                        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
                        .unwrap_or_default();

                    if key.optional {
                        route.push_str(&format!("(?:{}({}))?", sep, class));
                    } else {
                        route.push_str(&format!("{}({})", sep, class));
                    }
                }
            }
        }

        if end {
            route.push_str("/?$");
        } else {
            route.push_str("(?:/|$)");
        }

        let regex = RegexBuilder::new(&route)
            .case_insensitive(!case_sensitive)
            .build()?;

        Ok(Self { regex, end })
    }

    /// Run the pattern against a pathname, returning one entry per parameter
    /// in declaration order. Optional parameters that did not participate are `None`.
    pub fn exec(&self, pathname: &str) -> Option<Vec<Option<String>>> {
        let captures = self.regex.captures(pathname)?;

        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        )
    }

    pub fn is_exact(&self) -> bool {
        self.end
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateParser;

    fn compile(template: &str, end: bool) -> PathPattern {
        PathPattern::compile(&TemplateParser::parse(template).unwrap(), end, false).unwrap()
    }

    fn caps(values: &[Option<&str>]) -> Option<Vec<Option<String>>> {
        Some(values.iter().map(|v| v.map(str::to_string)).collect())
    }

    #[test]
    fn test_exact_literal() {
        let pattern = compile("/p/settings", true);
        assert!(pattern.is_exact());
        assert_eq!(pattern.exec("/p/settings"), caps(&[]));
        assert_eq!(pattern.exec("/p/settings/"), caps(&[]));
        assert_eq!(pattern.exec("/p/settings/x"), None);
        assert_eq!(pattern.exec("/other/path"), None);
    }

    #[test]
    fn test_exact_params() {
        let pattern = compile("/:a/:b/a", true);
        assert_eq!(pattern.exec("/123/456/a"), caps(&[Some("123"), Some("456")]));
        assert_eq!(pattern.exec("/123/456/a/"), caps(&[Some("123"), Some("456")]));
        assert_eq!(pattern.exec("/123/a"), None);
    }

    #[test]
    fn test_prefix_stops_on_segment_boundary() {
        let pattern = compile("/p/settings", false);
        assert!(!pattern.is_exact());
        assert_eq!(pattern.exec("/p/settings/sda/asda"), caps(&[]));
        assert_eq!(pattern.exec("/p/settings"), caps(&[]));
        assert_eq!(pattern.exec("/p/settingsx"), None);
    }

    #[test]
    fn test_prefix_captures_whole_segment() {
        let pattern = compile("/:a/:b", false);
        assert_eq!(
            pattern.exec("/12/345/extra/segments"),
            caps(&[Some("12"), Some("345")])
        );
    }

    #[test]
    fn test_optional_param_absent() {
        let pattern = compile("/a/id/:name?", true);
        assert_eq!(pattern.exec("/a/id"), caps(&[None]));
        assert_eq!(pattern.exec("/a/id/"), caps(&[None]));
        assert_eq!(pattern.exec("/a/id/123"), caps(&[Some("123")]));
    }

    #[test]
    fn test_dot_prefixed_optional() {
        let pattern = compile("/file/:name.:ext?", true);
        assert_eq!(pattern.exec("/file/report.pdf"), caps(&[Some("report"), Some("pdf")]));
        assert_eq!(pattern.exec("/file/report"), caps(&[Some("report"), None]));
    }

    #[test]
    fn test_root_template() {
        let exact = compile("/", true);
        assert_eq!(exact.exec("/"), caps(&[]));
        assert_eq!(exact.exec(""), caps(&[]));
        assert_eq!(exact.exec("/x"), None);

        let prefix = compile("/", false);
        assert_eq!(prefix.exec("/x/y"), caps(&[]));
    }

    #[test]
    fn test_literals_are_escaped() {
        let pattern = compile("/a+b/(c)", true);
        assert_eq!(pattern.exec("/a+b/(c)"), caps(&[]));
        assert_eq!(pattern.exec("/aab/c"), None);
    }

    #[test]
    fn test_case_sensitivity() {
        let template = TemplateParser::parse("/Settings").unwrap();
        let insensitive = PathPattern::compile(&template, true, false).unwrap();
        let sensitive = PathPattern::compile(&template, true, true).unwrap();
        assert!(insensitive.exec("/settings").is_some());
        assert!(sensitive.exec("/settings").is_none());
        assert!(sensitive.exec("/Settings").is_some());
    }
}
