//! Verbosity flags and `env_logger` setup shared by both binaries.

use clap::Args;
use log::LevelFilter;

/// Global verbosity flags.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Verbosity {
    /// The log level these flags select.
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Error
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

/// Builds a stderr logger at the flag-selected level. Directives in
/// `rust_log` (the `RUST_LOG` syntax) are applied on top and win.
pub fn builder(verbosity: &Verbosity, rust_log: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(verbosity.level_filter())
        .target(env_logger::Target::Stderr);
    if let Some(spec) = rust_log.filter(|s| !s.trim().is_empty()) {
        builder.parse_filters(spec);
    }
    builder
}

/// Initialises `env_logger` on stderr, honouring `RUST_LOG` when set.
pub fn init(verbosity: &Verbosity) {
    let rust_log = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    if let Err(e) = builder(verbosity, rust_log.as_deref()).try_init() {
        log::warn!("logger already initialised, keeping it: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        assert_eq!(Verbosity::default().level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn quiet_and_verbose_levels() {
        let quiet = Verbosity {
            quiet: true,
            verbose: false,
        };
        let verbose = Verbosity {
            quiet: false,
            verbose: true,
        };
        assert_eq!(quiet.level_filter(), LevelFilter::Error);
        assert_eq!(verbose.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn flags_set_level_without_rust_log() {
        let verbose = Verbosity {
            quiet: false,
            verbose: true,
        };
        assert_eq!(builder(&verbose, None).build().filter(), LevelFilter::Debug);
        assert_eq!(
            builder(&Verbosity::default(), Some("")).build().filter(),
            LevelFilter::Warn
        );
    }

    #[test]
    fn rust_log_overrides_flags() {
        let quiet = Verbosity {
            quiet: true,
            verbose: false,
        };
        let verbose = Verbosity {
            quiet: false,
            verbose: true,
        };
        assert_eq!(
            builder(&quiet, Some("trace")).build().filter(),
            LevelFilter::Trace
        );
        assert_eq!(
            builder(&verbose, Some("error")).build().filter(),
            LevelFilter::Error
        );
    }

    #[test]
    fn second_init_is_harmless() {
        init(&Verbosity::default());
        init(&Verbosity::default());
    }
}
