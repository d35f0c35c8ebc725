use phf::{Map, phf_map};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

/// Fixed symbol ordering shared by profiles, scanning and consensus.
///
/// Row `i` of every profile matrix belongs to `ALPHABET[i]`, and consensus ties are
/// broken by the first symbol in this order.
pub const ALPHABET: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

pub const ALPHABET_SIZE: usize = ALPHABET.len();

static SYMBOL_TABLE: Map<char, Nucleotide> = phf_map! {
    'A' => Nucleotide::A,
    'C' => Nucleotide::C,
    'G' => Nucleotide::G,
    'T' => Nucleotide::T,
};

impl Nucleotide {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up an uppercase IUPAC symbol. Anything outside {A, C, G, T} yields `None`.
    #[inline]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        SYMBOL_TABLE.get(&symbol).copied()
    }

    pub fn to_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(symbol)
    }
}

pub(crate) fn write_symbols(f: &mut fmt::Formatter<'_>, symbols: &[Nucleotide]) -> fmt::Result {
    for nucleotide in symbols {
        write!(f, "{}", nucleotide)?;
    }
    Ok(())
}
