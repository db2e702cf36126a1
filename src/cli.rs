use std::{
    env, fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};

const DEFAULT_CONFIG_FILE: &str = "aethero.jsonc";
const USAGE: &str =
    "usage: aethero [--config <path>] [--document <path>] [--export-session <path>]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub document: Option<PathBuf>,
    pub export_session: Option<PathBuf>,
}

impl CliArgs {
    /// The explicit `--config` path, else `./aethero.jsonc` when it exists.
    pub fn config_path(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.config {
            return Ok(Some(path.clone()));
        }
        let mut path = env::current_dir()?;
        path.push(DEFAULT_CONFIG_FILE);
        Ok(path.exists().then_some(path))
    }
}

pub fn args_from_env() -> Result<CliArgs> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--config" => &mut parsed.config,
            "--document" => &mut parsed.document,
            "--export-session" => &mut parsed.export_session,
            other => return Err(anyhow!("unexpected argument '{other}'. {USAGE}")),
        };
        let value = args
            .next()
            .ok_or_else(|| anyhow!("{flag} requires a path. {USAGE}"))?;
        if slot.replace(PathBuf::from(value)).is_some() {
            return Err(anyhow!("{flag} given more than once. {USAGE}"));
        }
    }

    Ok(parsed)
}

/// Reads the document from `path`, or from stdin when no path is given.
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read document {}", path.display())),
        None => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("failed to read document from stdin")?;
            Ok(document)
        }
    }
}
