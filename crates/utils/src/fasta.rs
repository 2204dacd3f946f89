//! Lecture et écriture FASTA minimales
//!
//! Le codec ne connaît que des lettres de nucléotides: les en-têtes sont
//! retirés avant l'encodage et ajoutés après le décodage.

use adnpix_core::Sequence;
use std::fmt;

/// En-tête par défaut des séquences décodées
pub const DEFAULT_HEADER: &str = "decoded_sequence";

/// Retire les lignes d'en-tête (`>`) et concatène les autres, une fois
/// chaque ligne débarrassée de ses espaces.
///
/// Plusieurs enregistrements sont fusionnés en une seule séquence.
pub fn parse_fasta(content: &str) -> String {
    content
        .trim()
        .lines()
        .filter(|line| !line.starts_with('>'))
        .map(str::trim)
        .collect()
}

/// Séquence prête pour le codec
pub fn sequence_from_fasta(content: &str) -> Sequence {
    Sequence::parse(&parse_fasta(content))
}

/// Enregistrement FASTA unique: `>header\nsequence\n`
pub fn to_fasta(header: &str, sequence: &impl fmt::Display) -> String {
    format!(">{}\n{}\n", header, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_headers() {
        let content = ">chr1 test\nACGT\nTTGG\n>chr2\nCCAA\n";
        assert_eq!(parse_fasta(content), "ACGTTTGGCCAA");
    }

    #[test]
    fn test_parse_raw_sequence() {
        assert_eq!(parse_fasta("  acgt\n  ggcc  \n"), "acgtggcc");
    }

    #[test]
    fn test_parse_handles_crlf_and_blank_lines() {
        assert_eq!(parse_fasta(">h\r\nACG\r\n\r\nTTA\r\n"), "ACGTTA");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_fasta(""), "");
        assert_eq!(parse_fasta(">only header\n"), "");
    }

    #[test]
    fn test_sequence_from_fasta() {
        let sequence = sequence_from_fasta(">x\nacgn\n");
        assert_eq!(sequence.to_string(), "ACGA");
    }

    #[test]
    fn test_to_fasta() {
        let sequence = Sequence::parse("ACGT");
        assert_eq!(to_fasta("seq1", &sequence), ">seq1\nACGT\n");
        assert_eq!(to_fasta(DEFAULT_HEADER, &"AC"), ">decoded_sequence\nAC\n");
    }
}
