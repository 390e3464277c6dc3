// crates/engine/src/record.rs
//! Line-level view of the dependency format.
//!
//! Every line is either a sentence separator (nothing but whitespace) or a
//! token line whose whitespace-separated fields follow [`Column`] order.
//! Only ASCII whitespace separates fields; other Unicode spaces (NBSP,
//! ideographic space) belong to the field they appear in.

use crate::options::Column;

/// A single line of a corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Separator,
    Token(Record<'a>),
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Self {
        let fields: Vec<&str> = line
            .split(is_field_separator)
            .filter(|field| !field.is_empty())
            .collect();
        if fields.is_empty() {
            Self::Separator
        } else {
            Self::Token(Record { fields })
        }
    }
}

/// Space, `\t`, `\n`, `\x0b`, `\x0c` and `\r`.
///
/// `char::is_ascii_whitespace` leaves out the vertical tab, so it is listed
/// explicitly.
fn is_field_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Fields of one token line, borrowed from the line buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

/// The line ended before the requested column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingColumn {
    pub column: Column,
    pub found: usize,
}

impl<'a> Record<'a> {
    pub fn get(&self, column: Column) -> Option<&'a str> {
        self.fields.get(column.index()).copied()
    }

    /// Like [`Record::get`], but reports how short the line was.
    pub fn field(&self, column: Column) -> Result<&'a str, MissingColumn> {
        self.get(column).ok_or(MissingColumn {
            column,
            found: self.fields.len(),
        })
    }
}
