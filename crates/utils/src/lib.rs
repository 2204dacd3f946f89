//! Utilitaires partagés

pub mod fasta;

pub use fasta::{parse_fasta, sequence_from_fasta, to_fasta};
