//! Data models for SIMD proposal records.

mod record;

pub use record::{Author, ProposalMetadata, ProposalRecord};
