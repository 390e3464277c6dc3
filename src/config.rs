// src/config.rs
use crate::args::Args;
pub use count_deps_engine::config::{Config, CorpusOptions, MarkerRule};
use count_deps_engine::options::MalformedPolicy;

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let marker = MarkerRule {
            column: args.marker.column.into(),
            marker: args.marker.marker,
        };
        let malformed = if args.behavior.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        };

        Self {
            corpus: CorpusOptions::new(args.in_dir, args.ext),
            marker,
            malformed,
            jobs: args.behavior.jobs,
        }
    }
}

/// Log filter implied by `-v`/`-q`; `RUST_LOG` still wins when set.
pub fn log_level(args: &Args) -> log::LevelFilter {
    if args.behavior.quiet {
        return log::LevelFilter::Error;
    }
    match args.behavior.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
