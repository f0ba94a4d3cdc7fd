// Template parser using recursive descent

use std::collections::HashSet;

use crate::error::{Error, Result};

use super::ast::{ParamKey, Template, TemplatePart};

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    pub fn parse(template: &'a str) -> Result<Template> {
        if template.is_empty() {
            return Err(Error::InvalidTemplate(
                "URL template is not defined".to_string(),
            ));
        }

        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<Template> {
        let mut parts = Vec::new();
        let mut literal_buf = String::new();
        let mut seen = HashSet::new();
        // An escaped `/` or `.` stays literal and never becomes a prefix
        let mut escaped_tail = false;

        while let Some(ch) = self.peek_char() {
            match ch {
                '\\' => {
                    self.pos += 1;
                    let escaped = self.consume_char()?;
                    literal_buf.push(escaped);
                    escaped_tail = true;
                }
                ':' if self.peek_ahead(1).is_some_and(is_name_char) => {
                    self.pos += 1;
                    let key = self.parse_param()?;

                    if !seen.insert(key.name.clone()) {
                        return Err(Error::InvalidTemplate(format!(
                            "Duplicate parameter '{}' at position {}",
                            key.name, self.pos
                        )));
                    }

                    // The separator right before the parameter belongs to its segment
                    let prefix = match literal_buf.chars().last() {
                        Some(sep @ ('/' | '.')) if !escaped_tail => {
                            literal_buf.pop();
                            Some(sep)
                        }
                        _ => None,
                    };

                    if !literal_buf.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal_buf)));
                    }
                    parts.push(TemplatePart::Param { key, prefix });
                    escaped_tail = false;
                }
                _ => {
                    literal_buf.push(self.consume_char()?);
                    escaped_tail = false;
                }
            }
        }

        if !literal_buf.is_empty() {
            parts.push(TemplatePart::Literal(literal_buf));
        }

        Ok(Template::new(parts))
    }

    fn parse_param(&mut self) -> Result<ParamKey> {
        let mut name = String::new();

        while let Some(ch) = self.peek_char().filter(|c| is_name_char(*c)) {
            name.push(ch);
            self.pos += ch.len_utf8();
        }

        let optional = self.peek_char() == Some('?');
        if optional {
            self.pos += 1;
        }

        Ok(ParamKey::new(name).with_optional(optional))
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn consume_char(&mut self) -> Result<char> {
        let ch = self.peek_char().ok_or_else(|| {
            Error::InvalidTemplate(format!("Unexpected end of input at position {}", self.pos))
        })?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
