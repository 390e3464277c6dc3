// src/presentation.rs
use count_deps_engine::stats::FileCount;
use count_deps_shared_kernel::Counts;
use std::io::{self, Write};

/// `<path> <sentences> <tokens> <predicates>`
pub fn write_file_line<W: Write>(out: &mut W, file: &FileCount) -> io::Result<()> {
    writeln!(out, "{} {}", file.path.display(), file.counts)
}

/// Corpus total, printed last as `[<sentences>, <tokens>, <predicates>]`.
pub fn write_total<W: Write>(out: &mut W, total: &Counts) -> io::Result<()> {
    let (sentences, tokens, predicates) = total.as_tuple();
    writeln!(out, "[{sentences}, {tokens}, {predicates}]")
}
