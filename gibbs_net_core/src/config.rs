use log::LevelFilter;
use once_cell::sync::Lazy;
use std::str::FromStr;

pub(crate) static CONF: Lazy<Config> = Lazy::new(|| {
    let log_level = std::env::var("GIBBS_NET_LOG_LEVEL")
        .or_else::<std::env::VarError, _>(|_| Ok("info".to_owned()))
        .ok()
        .map(|l| LevelFilter::from_str(&l).unwrap_or(LevelFilter::Info))
        .unwrap_or(LevelFilter::Info);

    let seed = std::env::var("GIBBS_NET_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);

    Config { log_level, seed }
});

pub(crate) struct Config {
    pub log_level: log::LevelFilter,
    /// seed used by `Network::default`
    pub seed: u64,
}

pub(crate) mod tracing {
    use super::*;

    #[derive(Clone, Copy)]
    pub struct Logger;

    impl Logger {
        pub fn get_logger() -> &'static Logger {
            Lazy::force(&LOGGER)
        }
    }

    // a host binary may already have installed its own logger
    #[allow(unused_must_use)]
    static LOGGER: Lazy<Logger> = Lazy::new(|| {
        env_logger::builder()
            .format_module_path(true)
            .format_timestamp_nanos()
            .target(env_logger::Target::Stderr)
            .filter(None, CONF.log_level)
            .try_init();

        Logger
    });
}
