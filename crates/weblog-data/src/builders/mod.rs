//! Corpus assembly.

pub mod corpus;

pub use corpus::{Corpus, CorpusBuilder, CorpusSummary};
