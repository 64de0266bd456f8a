use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Map `-v` occurrences to a level. Warnings are always shown.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber once per process.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: impl Into<LevelFilter>) -> anyhow::Result<()> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_for_verbosity(1), LevelFilter::DEBUG);
        assert_eq!(level_for_verbosity(5), LevelFilter::TRACE);
    }

    #[test]
    fn init_is_idempotent() {
        assert!(init_logging(LevelFilter::WARN).is_ok());
        assert!(init_logging(LevelFilter::DEBUG).is_ok());
    }
}
