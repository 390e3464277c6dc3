// crates/engine/src/processor.rs
use crate::config::Config;
use crate::options::MalformedPolicy;
use crate::record::{Line, MissingColumn};
use crate::stats::FileCount;
use count_deps_shared_kernel::{Counts, DomainError, InfrastructureError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Count one corpus file.
///
/// # Errors
/// Fails if the file cannot be opened or read, or (under
/// [`MalformedPolicy::Abort`]) on the first token line that lacks the marker
/// column.
pub fn process_file(path: &Path, config: &Config) -> Result<FileCount> {
    let file = File::open(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let counts = count_reader(&mut reader, path, config)?;
    log::debug!("{}: {counts}", path.display());
    Ok(FileCount::new(path, counts))
}

/// Classify every line of `reader` and tally the triple.
///
/// Lines end at `\n`; a final line without one still counts. Invalid UTF-8 is
/// replaced rather than rejected. `path` is only used for error reports.
///
/// # Errors
/// See [`process_file`].
pub fn count_reader<R: BufRead>(reader: &mut R, path: &Path, config: &Config) -> Result<Counts> {
    let rule = &config.marker;
    let mut counts = Counts::ZERO;
    let mut line_buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        line_buf.clear();
        let read = reader
            .read_until(b'\n', &mut line_buf)
            .map_err(|source| InfrastructureError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_no += 1;

        let text = String::from_utf8_lossy(&line_buf);
        match Line::parse(&text) {
            Line::Separator => counts.sentences.increment(),
            Line::Token(record) => {
                counts.tokens.increment();
                match record.field(rule.column) {
                    Ok(field) => {
                        if rule.matches(field) {
                            counts.predicates.increment();
                        }
                    }
                    Err(missing) => on_malformed(path, line_no, missing, config.malformed)?,
                }
            }
        }
    }

    Ok(counts)
}

fn on_malformed(
    path: &Path,
    line: usize,
    missing: MissingColumn,
    policy: MalformedPolicy,
) -> Result<()> {
    let err = DomainError::MalformedLine {
        path: path.to_path_buf(),
        line,
        found: missing.found,
        required: missing.column.required_tokens(),
    };
    match policy {
        MalformedPolicy::Abort => Err(err.into()),
        MalformedPolicy::Skip => {
            log::warn!("{err} (no {} column; counted as unmarked)", missing.column.name());
            Ok(())
        }
    }
}
