use env_logger::Env;

/// Install the global logger. `RUST_LOG` wins; otherwise `--verbose`
/// selects debug output and the default is warnings only.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(false);
        init_logging(true);
        log::debug!("logger installed");
    }
}
