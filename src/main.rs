use std::{fs, sync::Arc};

use aethero::{
    cli::{args_from_env, read_document},
    config::Config,
    logging::init_tracing,
    reflection::ReflectionAggregator,
    tag::{SystemClock, UuidIdSource},
};
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let args = args_from_env()?;
    let config = match args.config_path()? {
        Some(config_path) => Config::load(&config_path)
            .with_context(|| format!("failed to load config from {}", config_path.display()))?,
        None => Config::default(),
    };
    let logging_guard = init_tracing(&config.logging)?;

    let _run = logging_guard.run_span().entered();
    let document = read_document(args.document.as_deref())?;
    let mut aggregator = ReflectionAggregator::from_config(
        config.analyzer,
        config.reflection,
        Arc::new(SystemClock),
        Arc::new(UuidIdSource),
    );
    let report = aggregator.reflect(&document)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize reflection report")?
    );

    if let Some(export_path) = &args.export_session {
        let export = serde_json::to_string_pretty(&aggregator.export_session())
            .context("failed to serialize session export")?;
        fs::write(export_path, export)
            .with_context(|| format!("failed to write {}", export_path.display()))?;
        tracing::info!(
            target: "reflection",
            path = %export_path.display(),
            "session_exported"
        );
    }

    Ok(())
}
