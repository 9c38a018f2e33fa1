#![deny(clippy::all)]

/**
 * Stache Compiler CLI
 *
 * Argument handling and output rendering behind the `stachec` binary
 */
use anyhow::{anyhow, bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use stache_compiler::ml_parser::defaults::InterpolationConfig;
use stache_compiler::{parse, tokenize, ParseOptions};
use std::fs;
use std::io::{self, Read};

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// What to print for a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Tokens,
    Tree,
}

pub fn command() -> Command {
    Command::new("stachec")
        .version(version())
        .about("Tokenize mustache templates and print the result as JSON")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("Template to read; stdin when omitted or \"-\""),
        )
        .arg(
            Arg::new("tokens")
                .short('t')
                .long("tokens")
                .action(ArgAction::SetTrue)
                .help("Print the flat token stream instead of the tree"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("JSON file with parse options; flags override it"),
        )
        .arg(
            Arg::new("delimiters")
                .long("delimiters")
                .num_args(2)
                .value_names(["OPEN", "CLOSE"])
                .help("Plain interpolation delimiters"),
        )
        .arg(
            Arg::new("triple-delimiters")
                .long("triple-delimiters")
                .num_args(2)
                .value_names(["OPEN", "CLOSE"])
                .help("Unescaped interpolation delimiters"),
        )
        .arg(
            Arg::new("interpolate")
                .short('i')
                .long("interpolate")
                .value_name("TAG=BOOL")
                .action(ArgAction::Append)
                .help("Enable or disable interpolation inside a tag, e.g. style=true"),
        )
        .arg(
            Arg::new("preserve-whitespace")
                .long("preserve-whitespace")
                .action(ArgAction::SetTrue)
                .help("Keep whitespace runs in text"),
        )
        .arg(
            Arg::new("strip-comments")
                .long("strip-comments")
                .action(ArgAction::SetTrue)
                .help("Drop HTML comments from the output"),
        )
}

/// Options from `--config` with the individual flags applied on top
pub fn options_from_matches(matches: &ArgMatches) -> Result<ParseOptions> {
    let mut options = match matches.get_one::<String>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid config file {}", path))?
        }
        None => ParseOptions::default(),
    };

    if let Some(pair) = delimiter_pair(matches, "delimiters") {
        options.delimiters = pair;
    }
    if let Some(pair) = delimiter_pair(matches, "triple-delimiters") {
        options.triple_delimiters = pair;
    }
    for entry in matches.get_many::<String>("interpolate").into_iter().flatten() {
        let (tag_name, interpolate) = parse_policy_entry(entry)?;
        options.interpolate.set(tag_name, interpolate);
    }
    if matches.get_flag("preserve-whitespace") {
        options.preserve_whitespace = true;
    }
    if matches.get_flag("strip-comments") {
        options.strip_comments = true;
    }

    options.validate()?;
    debug!("parse options: {:?}", options);
    Ok(options)
}

fn delimiter_pair(matches: &ArgMatches, id: &str) -> Option<InterpolationConfig> {
    let mut values = matches.get_many::<String>(id)?;
    let start = values.next()?.clone();
    let end = values.next()?.clone();
    Some(InterpolationConfig::new(start, end))
}

/// `tag=true` / `tag=false`
fn parse_policy_entry(entry: &str) -> Result<(&str, bool)> {
    let Some((tag_name, value)) = entry.split_once('=') else {
        bail!("expected TAG=BOOL, got {:?}", entry);
    };
    let interpolate = value
        .parse::<bool>()
        .with_context(|| format!("expected true or false for tag {:?}", tag_name))?;
    Ok((tag_name, interpolate))
}

/// Tokenize or parse `source` and render the result as pretty JSON
pub fn render(source: &str, options: &ParseOptions, output: Output) -> Result<String> {
    let json = match output {
        Output::Tokens => {
            let tokens = tokenize(source, options)
                .map_err(|error| anyhow!(error.contextual_message(source)))?;
            info!("{} tokens", tokens.len());
            serde_json::to_string_pretty(&tokens)?
        }
        Output::Tree => {
            let nodes = parse(source, options)
                .map_err(|error| anyhow!(error.contextual_message(source)))?;
            info!("{} root nodes", nodes.len());
            serde_json::to_string_pretty(&nodes)?
        }
    };
    Ok(json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}

/// Run the command for parsed arguments, returning what to print
pub fn run(matches: &ArgMatches) -> Result<String> {
    let options = options_from_matches(matches)?;
    let input = matches.get_one::<String>("input").map(String::as_str);
    let source = read_input(input)?;
    let output = if matches.get_flag("tokens") {
        Output::Tokens
    } else {
        Output::Tree
    };
    render(&source, &options, output)
        .with_context(|| format!("failed to compile {}", input.unwrap_or("<stdin>")))
}
