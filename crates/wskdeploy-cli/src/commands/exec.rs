//! Exec resolution command.

use anyhow::{Context, Result};
use wskdeploy_config::SystemConfig;
use wskdeploy_core::json::pretty_json;
use wskdeploy_packager::ExecResolver;

pub fn run(
    config: &SystemConfig,
    artifact: &str,
    kind: Option<String>,
    docker: bool,
    main: Option<String>,
) -> Result<()> {
    let resolver = ExecResolver::new(config.resolver.clone());
    let exec = resolver
        .resolve(
            artifact,
            kind.as_deref().unwrap_or_default(),
            docker,
            main.as_deref().unwrap_or_default(),
        )
        .with_context(|| format!("Failed to resolve artifact: {}", artifact))?;

    println!("{}", pretty_json(&exec)?);
    Ok(())
}
