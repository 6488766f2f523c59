//! Logger setup.

use std::{str::FromStr, sync::Once};

use log::LevelFilter;

static INIT: Once = Once::new();

/// Picks the level filter: `RUST_LOG` wins if it names a plain level,
/// otherwise the configured level, otherwise `info`.
pub fn level_filter(configured: &str, env: Option<&str>) -> LevelFilter {
    env.and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .or_else(|| LevelFilter::from_str(configured.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

/// Installs the global logger. Subsequent calls are ignored.
pub fn init(configured_level: &str) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let level = level_filter(configured_level, env.as_deref());
        let result = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply();
        if let Err(e) = result {
            eprintln!("logger already set: {e}");
        }
        log::debug!("logging initialized at {level}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_config() {
        assert_eq!(level_filter("info", Some("trace")), LevelFilter::Trace);
        assert_eq!(level_filter("warn", None), LevelFilter::Warn);
    }

    #[test]
    fn module_filters_fall_back_to_config() {
        assert_eq!(
            level_filter("debug", Some("gl_tutorials=trace,sdl2=warn")),
            LevelFilter::Debug
        );
        assert_eq!(level_filter("nonsense", None), LevelFilter::Info);
    }

    #[test]
    fn second_init_keeps_the_first_level() {
        init("debug");
        init("trace");
        let env = std::env::var("RUST_LOG").ok();
        assert_eq!(log::max_level(), level_filter("debug", env.as_deref()));
    }
}
