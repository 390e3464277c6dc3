// crates/shared-kernel/src/lib.rs
pub use error::{
    CountDepsError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Counts, PredicateCount, SentenceCount, TokenCount};
