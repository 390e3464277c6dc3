// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            #[inline]
            pub fn increment(&mut self) {
                self.0 += 1;
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl<'a> Sum<&'a $name> for $name {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_newtype! {
    /// 文区切り（空行）の数
    SentenceCount
}

count_newtype! {
    /// データ行（トークン行）の数
    TokenCount
}

count_newtype! {
    /// マーカー付きトークン行の数
    PredicateCount
}

/// The `(separators, data, marked)` triple kept for one file or a whole corpus.
///
/// `Counts` forms a commutative monoid under `+` with [`Counts::ZERO`] as the
/// identity, so totals can be folded in any order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub sentences: SentenceCount,
    pub tokens: TokenCount,
    pub predicates: PredicateCount,
}

impl Counts {
    pub const ZERO: Self = Self {
        sentences: SentenceCount::ZERO,
        tokens: TokenCount::ZERO,
        predicates: PredicateCount::ZERO,
    };

    #[inline]
    pub const fn new(sentences: usize, tokens: usize, predicates: usize) -> Self {
        Self {
            sentences: SentenceCount::new(sentences),
            tokens: TokenCount::new(tokens),
            predicates: PredicateCount::new(predicates),
        }
    }

    /// Number of lines seen, blank or not.
    #[inline]
    pub const fn lines(&self) -> usize {
        self.sentences.value() + self.tokens.value()
    }

    #[inline]
    pub const fn as_tuple(&self) -> (usize, usize, usize) {
        (self.sentences.value(), self.tokens.value(), self.predicates.value())
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            sentences: self.sentences + rhs.sentences,
            tokens: self.tokens + rhs.tokens,
            predicates: self.predicates + rhs.predicates,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<(usize, usize, usize)> for Counts {
    fn from((sentences, tokens, predicates): (usize, usize, usize)) -> Self {
        Self::new(sentences, tokens, predicates)
    }
}

/// Space separated, as printed after a file path.
impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.sentences, self.tokens, self.predicates)
    }
}
