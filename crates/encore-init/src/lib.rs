use tracing::debug;

/// Load `.env`, install the eyre report handler and start the log subscriber.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init() -> eyre::Result<()> {
    let dotenv = dotenvy::dotenv().ok();

    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(true)
        .with_line_number(true)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    Ok(())
}
