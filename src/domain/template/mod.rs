// Template module for `:name` / `:name?` path templates
//
// This module provides parsing of path templates, translation into anchored
// regex patterns, and substitution of parameter values back into a path.

mod ast;
mod compiled;
mod parser;
mod pattern;
mod substitutor;

pub use ast::{ParamKey, Template, TemplatePart};
pub use compiled::CompiledTemplate;
pub use parser::TemplateParser;
pub use pattern::PathPattern;
pub use substitutor::Substitutor;
