// crates/engine/src/lib.rs
pub mod config;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod record;
pub mod stats;

use crate::config::Config;
use crate::filesystem::Corpus;
use crate::stats::{FileCount, RunResult};
use count_deps_shared_kernel::{Counts, ErrorContext, Result};

/// Count the corpus described by `config` and collect every per-file result.
///
/// # Errors
/// Returns the first error in corpus order; see [`run_with`].
pub fn run(config: &Config) -> Result<RunResult> {
    let mut files = Vec::new();
    let total = run_with(config, |file| {
        files.push(file.clone());
        Ok(())
    })?;
    let result = RunResult::from_files(files);
    debug_assert_eq!(result.total, total);
    Ok(result)
}

/// Count the corpus, handing each file's result to `on_file` in corpus order,
/// and return the folded total.
///
/// `on_file` sees every file that was counted successfully before the first
/// failure, so callers can stream output. Nothing is reported after the
/// first error and no total is produced.
///
/// # Errors
/// Returns the first configuration, enumeration, read, or malformed-line
/// error, or any error returned by `on_file`.
pub fn run_with<F>(config: &Config, mut on_file: F) -> Result<Counts>
where
    F: FnMut(&FileCount) -> Result<()>,
{
    config.validate()?;
    let corpus = filesystem::resolve_corpus(&config.corpus)?;
    log::info!(
        "{} files match {} in {}",
        corpus.len(),
        corpus.pattern,
        corpus.dir.display()
    );

    count_corpus(&corpus, config)?.try_fold(Counts::ZERO, |total, result| -> Result<Counts> {
        let file = result?;
        on_file(&file).with_context(|| format!("reporting {}", file.path.display()))?;
        Ok(total + file.counts)
    })
}

/// Lazily count in order when running on one thread.
#[cfg(not(feature = "parallel"))]
fn count_corpus<'a>(
    corpus: &'a Corpus,
    config: &'a Config,
) -> Result<impl Iterator<Item = Result<FileCount>> + 'a> {
    Ok(corpus
        .files
        .iter()
        .map(move |path| processor::process_file(path, config)))
}

/// Count on a rayon pool. Results keep corpus order, so callers observe the
/// same sequence as a single-threaded run.
#[cfg(feature = "parallel")]
fn count_corpus<'a>(
    corpus: &'a Corpus,
    config: &'a Config,
) -> Result<Box<dyn Iterator<Item = Result<FileCount>> + 'a>> {
    use rayon::prelude::*;

    let threads = if config.jobs == 0 {
        num_cpus::get()
    } else {
        config.jobs
    };

    if threads <= 1 || corpus.len() <= 1 {
        return Ok(Box::new(
            corpus
                .files
                .iter()
                .map(move |path| processor::process_file(path, config)),
        ));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| count_deps_shared_kernel::InfrastructureError::ThreadPoolCreation {
            details: e.to_string(),
        })?;
    log::info!("counting {} files on {threads} threads", corpus.len());

    let results: Vec<Result<FileCount>> = pool.install(|| {
        corpus
            .files
            .par_iter()
            .map(|path| processor::process_file(path, config))
            .collect()
    });
    Ok(Box::new(results.into_iter()))
}
