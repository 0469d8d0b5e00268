/// Glyph and bracketing conventions of one generator family.
///
/// The three benchmark families were written against slightly different concrete
/// syntaxes; the presets reproduce each one byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Notation {
    /// Prefix glyph of a negation, printed right before an opening parenthesis.
    pub negation: &'static str,
    /// Implication operator including any surrounding spaces.
    pub implication: &'static str,
    /// `And`, `Implies` and `WeakUntil` print their own enclosing parentheses.
    pub bracket_binary: bool,
    /// Negated aggregate terms print as `(~(a <-> b))` instead of `~(a <-> b)`.
    pub bracket_negated_terms: bool,
}

impl Notation {
    /// Hamming-distance benchmarks: `!`, ` -> `, fully bracketed.
    pub const HAMMING: Notation = Notation {
        negation: "!",
        implication: " -> ",
        bracket_binary: true,
        bracket_negated_terms: false,
    };

    /// Observational determinism benchmarks: `~`, `=>`, flat binary operators.
    pub const OBSERVATIONAL: Notation = Notation {
        negation: "~",
        implication: "=>",
        bracket_binary: false,
        bracket_negated_terms: true,
    };

    /// Quantitative noninterference benchmarks: `!`, fully bracketed.
    ///
    /// QN formulas contain no implication; `implication` only matters for hand-built
    /// formulas printed with this notation.
    pub const QUANTITATIVE: Notation = Notation {
        negation: "!",
        implication: " -> ",
        bracket_binary: true,
        bracket_negated_terms: false,
    };
}

impl Default for Notation {
    fn default() -> Self {
        Self::HAMMING
    }
}
