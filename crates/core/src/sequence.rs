//! Nucléotides et séquences ADN

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base ADN canonique
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// Table inverse: code 2 bits -> base
const FROM_BITS: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

impl Nucleotide {
    /// Convertit un caractère en base.
    ///
    /// Insensible à la casse. Tout symbole hors {A,C,G,T} (N, IUPAC, chiffres,
    /// espaces...) devient `A` sans erreur.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'C' => Nucleotide::C,
            'G' => Nucleotide::G,
            'T' => Nucleotide::T,
            _ => Nucleotide::A,
        }
    }

    /// Code 2 bits de la base (A=00, C=01, G=10, T=11)
    pub const fn bits(self) -> u8 {
        match self {
            Nucleotide::A => 0b00,
            Nucleotide::C => 0b01,
            Nucleotide::G => 0b10,
            Nucleotide::T => 0b11,
        }
    }

    /// Base correspondant aux 2 bits de poids faible de `bits`
    pub const fn from_bits(bits: u8) -> Self {
        FROM_BITS[(bits & 0b11) as usize]
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    pub fn is_gc(self) -> bool {
        matches!(self, Nucleotide::G | Nucleotide::C)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<char> for Nucleotide {
    fn from(c: char) -> Self {
        Nucleotide::from_char(c)
    }
}

/// Séquence ordonnée de nucléotides
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence {
    bases: Vec<Nucleotide>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse un texte brut, chaque caractère donnant exactement une base
    pub fn parse(text: &str) -> Self {
        text.chars().map(Nucleotide::from_char).collect()
    }

    pub fn from_bases(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Nombre de `A` ajoutés pour atteindre un multiple de `k`
    pub fn padding_len(len: usize, k: usize) -> usize {
        match len % k {
            0 => 0,
            rem => k - rem,
        }
    }

    /// Copie complétée à droite par des `A` jusqu'à un multiple de `k`
    pub fn padded(&self, k: usize) -> Sequence {
        let mut bases = self.bases.clone();
        bases.resize(self.len() + Self::padding_len(self.len(), k), Nucleotide::A);
        Sequence { bases }
    }

    /// Ratio GC (0-1), 0 pour une séquence vide
    pub fn gc_ratio(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        let gc = self.bases.iter().filter(|b| b.is_gc()).count();
        gc as f64 / self.bases.len() as f64
    }

    pub fn starts_with(&self, prefix: &Sequence) -> bool {
        self.bases.starts_with(&prefix.bases)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.bases.iter().map(|b| b.as_char()).collect();
        f.write_str(&s)
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Self {
            bases: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Sequence {
    fn from(text: &str) -> Self {
        Sequence::parse(text)
    }
}
