//! Validate and query a store catalog's categories.
//!
//! Reads a store-info document from a file, stdin, or the configured catalog
//! path, checks its categories, and prints either the normalized category
//! section or a single category selected by name or by good id.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::env;
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;
use store_categories::{CategoryIndex, resolve_catalog_path};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match CliArgs::parse() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err:#}");
            eprint!("{}", usage());
            std::process::exit(2);
        }
    };

    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: CliArgs) -> Result<()> {
    let index = match args.source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            CategoryIndex::from_json_str(&buf)?
        }
        InputSource::File(path) => {
            let path = resolve_catalog_path(path.as_deref())?;
            tracing::info!(path = %path.display(), "Loading store catalog");
            CategoryIndex::load(&path)?
        }
    };

    let output: Value = match args.query {
        Query::All => index.to_json(),
        Query::Name(name) => match index.category(&name) {
            Some(category) => category.to_json(),
            None => bail!("no category named '{name}'"),
        },
        Query::Good(item_id) => match index.category_for_good(&item_id) {
            Some(category) => category.to_json(),
            None => bail!("good '{item_id}' is not listed in any category"),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[derive(Debug, PartialEq)]
enum InputSource {
    /// `None` defers to configured catalog discovery.
    File(Option<PathBuf>),
    Stdin,
}

#[derive(Debug, PartialEq)]
enum Query {
    All,
    Name(String),
    Good(String),
}

#[derive(Debug)]
struct CliArgs {
    source: InputSource,
    query: Query,
    verbose: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        Self::parse_from(env::args_os().skip(1))
    }

    fn parse_from(args: impl IntoIterator<Item = OsString>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut source: Option<InputSource> = None;
        let mut query: Option<Query> = None;
        let mut verbose = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--file" => {
                    let path = next_value(&mut args, "--file")?;
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::File(Some(PathBuf::from(path))));
                }
                "--stdin" => {
                    if source.is_some() {
                        bail!("--file/--stdin may only be provided once");
                    }
                    source = Some(InputSource::Stdin);
                }
                "--name" => {
                    let name = next_value(&mut args, "--name")?;
                    if query.is_some() {
                        bail!("--name/--good may only be provided once");
                    }
                    query = Some(Query::Name(name));
                }
                "--good" => {
                    let item_id = next_value(&mut args, "--good")?;
                    if query.is_some() {
                        bail!("--name/--good may only be provided once");
                    }
                    query = Some(Query::Good(item_id));
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print!("{}", usage());
                    std::process::exit(0);
                }
                other => bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            source: source.unwrap_or(InputSource::File(None)),
            query: query.unwrap_or(Query::All),
            verbose,
        })
    }
}

fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}

fn usage() -> &'static str {
    "Usage: category-check [--file PATH|--stdin] [--name NAME|--good ITEM_ID] [--verbose]\n\
Validates the categories of a store catalog and prints them as JSON. Without --file the path comes from STORE_CATALOG_PATH or ./store_catalog.json.\n"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        CliArgs::parse_from(args.iter().map(OsString::from))
    }

    #[test]
    fn defaults_to_discovered_catalog() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.source, InputSource::File(None));
        assert_eq!(args.query, Query::All);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_good_query_from_stdin() {
        let args = parse(&["--stdin", "--good", "sword_001", "-v"]).unwrap();
        assert_eq!(args.source, InputSource::Stdin);
        assert_eq!(args.query, Query::Good("sword_001".into()));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_conflicting_flags() {
        assert!(parse(&["--stdin", "--file", "x.json"]).is_err());
        assert!(parse(&["--name", "a", "--good", "b"]).is_err());
        assert!(parse(&["--name"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }
}
