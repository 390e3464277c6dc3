// tests/common/fixtures.rs

/// Three token lines, one separator, two predicates: `1 3 2`.
pub const TWO_PREDICATES: &str = "w1 w2 w3 w4 pb=5\nw1 w2 w3 w4 x\n\nw1 w2 w3 w4 pb=9\n";

/// One token line carrying a predicate: `0 1 1`.
pub const ONE_PREDICATE: &str = "1 ran run VBD pb=run.02 0 root\n";

/// A sentence in the full dependency layout: `1 4 1`.
pub const SENTENCE: &str = "\
1\tJohn\tjohn\tNNP\t_\t2\tnsubj
2\tbought\tbuy\tVBD\tpb=buy.01\t0\troot
3\tbooks\tbook\tNNS\t_\t2\tdobj
4\t.\t.\t.\t_\t2\tpunct

";

/// A token line with only three columns.
pub const SHORT_LINE: &str = "w1 w2 w3\n";
