// Command line front end over a single template

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::config::TemplateRegistry;
use crate::domain::{Params, Query, UrlPath};

fn pair_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("KEY=VALUE")
        .action(ArgAction::Append)
        .help(help)
}

pub fn command() -> Command {
    Command::new("urlpath")
        .about("Match, format and rewrite URLs against a path template")
        .subcommand_required(true)
        .arg(
            Arg::new("template")
                .short('t')
                .long("template")
                .value_name("TEMPLATE")
                .help("Path template, e.g. /users/:id/:tab?"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("CONFIG")
                .help("Path to a YAML file containing named templates"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("NAME")
                .help("Name of the template to use from the config file"),
        )
        .subcommand(
            Command::new("match")
                .about("Match a URL and print the extracted parameters as JSON")
                .arg(Arg::new("url").required(true).value_name("URL"))
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .action(ArgAction::SetTrue)
                        .help("Only require the start of the path to match"),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Build a URL from parameter values")
                .arg(pair_arg("param", "Parameter value"))
                .arg(pair_arg("query", "Query string value")),
        )
        .subcommand(
            Command::new("replace")
                .about("Rewrite a URL with some parameter or query values replaced")
                .arg(Arg::new("url").required(true).value_name("URL"))
                .arg(pair_arg("param", "Parameter value to override"))
                .arg(pair_arg("query", "Query string value to override"))
                .arg(
                    Arg::new("unset")
                        .long("unset")
                        .value_name("KEY")
                        .action(ArgAction::Append)
                        .help("Optional parameter to drop"),
                ),
        )
        .subcommand(Command::new("list").about("List the templates of the config file"))
}

/// Execute parsed arguments, writing results to `out`.
///
/// Returns `false` when the URL did not match the template.
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<bool> {
    match matches.subcommand() {
        Some(("match", sub)) => {
            let path = resolve_template(matches)?;
            let url = required(sub, "url")?;
            let result = path.match_url(url, !sub.get_flag("prefix"));
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
            Ok(result.is_match())
        }
        Some(("format", sub)) => {
            let path = resolve_template(matches)?;
            let params = collect_params(sub)?;
            let query = collect_query(sub)?;
            let url = path.format(&params, query.as_ref())?;
            writeln!(out, "{}", url)?;
            Ok(true)
        }
        Some(("replace", sub)) => {
            let path = resolve_template(matches)?;
            let url = required(sub, "url")?;
            let mut params = collect_params(sub)?;
            for name in sub.get_many::<String>("unset").unwrap_or_default() {
                params.unset(name.as_str());
            }
            let query = collect_query(sub)?;

            match path.replace(url, Some(&params), query.as_ref())? {
                Some(replaced) => {
                    writeln!(out, "{}", replaced)?;
                    Ok(true)
                }
                None => {
                    tracing::info!(url = %url, template = path.template(), "URL does not match template");
                    Ok(false)
                }
            }
        }
        Some(("list", _)) => {
            let registry = load_registry(matches)?;
            for (name, entry) in registry.iter() {
                match &entry.description {
                    Some(description) => {
                        writeln!(out, "{}\t{}\t{}", name, entry.path.template(), description)?
                    }
                    None => writeln!(out, "{}\t{}", name, entry.path.template())?,
                }
            }
            Ok(true)
        }
        Some((other, _)) => bail!("Unknown subcommand: {}", other),
        None => bail!("No subcommand given"),
    }
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(id)
        .with_context(|| format!("Missing argument: {}", id))
}

fn load_registry(matches: &ArgMatches) -> Result<TemplateRegistry> {
    let config = matches.get_one::<String>("config").map(Path::new);
    TemplateRegistry::load(config)
}

fn resolve_template(matches: &ArgMatches) -> Result<UrlPath> {
    if let Some(template) = matches.get_one::<String>("template") {
        return Ok(UrlPath::new(template)?);
    }

    let name = matches
        .get_one::<String>("name")
        .context("Either --template or --name must be given")?;
    let registry = load_registry(matches)?;
    registry
        .get(name)
        .cloned()
        .with_context(|| format!("No template named '{}'", name))
}

fn parse_pair(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => bail!("Empty key in '{}'", raw),
        Some(pair) => Ok(pair),
        None => bail!("Expected KEY=VALUE but got '{}'", raw),
    }
}

fn collect_params(matches: &ArgMatches) -> Result<Params> {
    let mut params = Params::new();
    for raw in matches.get_many::<String>("param").unwrap_or_default() {
        let (key, value) = parse_pair(raw)?;
        params.insert(key, value);
    }
    Ok(params)
}

fn collect_query(matches: &ArgMatches) -> Result<Option<Query>> {
    let Some(values) = matches.get_many::<String>("query") else {
        return Ok(None);
    };

    let mut query = Query::new();
    for raw in values {
        let (key, value) = parse_pair(raw)?;
        query.insert(key, value);
    }
    Ok(Some(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (bool, String) {
        let matches = command().try_get_matches_from(args).unwrap();
        let mut out = Vec::new();
        let ok = run(&matches, &mut out).unwrap();
        (ok, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_match_prints_json() {
        let (ok, out) = run_args(&["urlpath", "-t", "/p/:id", "match", "/p/7?a=1"]);
        assert!(ok);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["status"], "match");
        assert_eq!(json["params"]["id"], "7");
        assert_eq!(json["query"]["a"], "1");
    }

    #[test]
    fn test_match_prefix_flag() {
        let (ok, _) = run_args(&["urlpath", "-t", "/p/:id", "match", "/p/7/more"]);
        assert!(!ok);
        let (ok, _) = run_args(&["urlpath", "-t", "/p/:id", "match", "--prefix", "/p/7/more"]);
        assert!(ok);
    }

    #[test]
    fn test_format() {
        let (ok, out) = run_args(&[
            "urlpath", "-t", "/a/:id/:name?", "format", "--param", "id=123", "--query", "x=1",
        ]);
        assert!(ok);
        assert_eq!(out.trim(), "/a/123?x=1");
    }

    #[test]
    fn test_replace_with_unset() {
        let (ok, out) = run_args(&[
            "urlpath", "-t", "/a/:id/:name?", "replace", "/a/1/bob?x=1", "--unset", "name",
            "--query", "y=2",
        ]);
        assert!(ok);
        assert_eq!(out.trim(), "/a/1?x=1&y=2");
    }

    #[test]
    fn test_replace_not_matching() {
        let (ok, out) = run_args(&["urlpath", "-t", "/:a/:b", "replace", "/1/2/3"]);
        assert!(!ok);
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_pair_rejects_missing_equals() {
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=x").is_err());
        assert_eq!(parse_pair("a=b=c").unwrap(), ("a", "b=c"));
    }

    #[test]
    fn test_missing_template_selection_fails() {
        let matches = command()
            .try_get_matches_from(["urlpath", "format"])
            .unwrap();
        let err = run(&matches, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Either --template or --name"));
    }
}
