//! Equivalence aggregates over indexed propositions.
//!
//! An [`Aggregate`] compares every proposition of one kind between two traces. With
//! [`Polarity::Agree`] it renders the conjunction `(p0_a <-> p0_b) & (p1_a <-> p1_b) & ...`;
//! with [`Polarity::Differ`] the disjunction of the negated terms. An aggregate over zero
//! propositions renders nothing; callers that wrap it in a group therefore print `()`.
use strum::{Display, EnumIs};

use crate::prop::{PropKind, Proposition, Trace};

/// N-ary connective joining a sequence of formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs)]
pub enum Junction {
    /// Conjunction, joined by ` & `.
    All,
    /// Disjunction, joined by ` | `.
    Any,
}

impl Junction {
    /// Separator placed between consecutive operands.
    #[inline]
    pub fn joiner(self) -> &'static str {
        match self {
            Junction::All => " & ",
            Junction::Any => " | ",
        }
    }
}

/// Whether an aggregate requires equivalence or tolerates a difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIs)]
pub enum Polarity {
    /// Every proposition agrees on both traces.
    Agree,
    /// At least one proposition differs between the traces.
    Differ,
}

impl Polarity {
    /// Connective joining the per-proposition terms.
    #[inline]
    pub fn junction(self) -> Junction {
        match self {
            Polarity::Agree => Junction::All,
            Polarity::Differ => Junction::Any,
        }
    }
}

/// Per-proposition (in)equivalence of `count` propositions of `kind` between two traces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Aggregate {
    pub kind: PropKind,
    pub lhs: Trace,
    pub rhs: Trace,
    pub count: u32,
    pub polarity: Polarity,
}

impl Aggregate {
    pub fn agree(kind: PropKind, lhs: Trace, rhs: Trace, count: u32) -> Self {
        Self {
            kind,
            lhs,
            rhs,
            count,
            polarity: Polarity::Agree,
        }
    }

    pub fn differ(kind: PropKind, lhs: Trace, rhs: Trace, count: u32) -> Self {
        Self {
            kind,
            lhs,
            rhs,
            count,
            polarity: Polarity::Differ,
        }
    }

    #[inline]
    pub fn junction(&self) -> Junction {
        self.polarity.junction()
    }

    /// An empty aggregate has no terms and renders as nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The compared proposition pairs, ordered by proposition index.
    pub fn terms(&self) -> impl ExactSizeIterator<Item = (Proposition, Proposition)> + '_ {
        (0..self.count).map(|index| {
            (
                Proposition::new(self.kind, index, self.lhs.clone()),
                Proposition::new(self.kind, index, self.rhs.clone()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_pair_same_index_across_traces() {
        let agg = Aggregate::differ(PropKind::Output, Trace::new("x", 2), Trace::new("x", 0), 3);
        let names: Vec<_> = agg
            .terms()
            .map(|(a, b)| format!("{a}/{b}"))
            .collect();
        assert_eq!(names, ["out0_x2/out0_x0", "out1_x2/out1_x0", "out2_x2/out2_x0"]);
        assert_eq!(agg.junction(), Junction::Any);
        assert!(!agg.is_empty());
    }

    #[test]
    fn empty_aggregate_has_no_terms() {
        let agg = Aggregate::agree(PropKind::Input, Trace::new("x", 0), Trace::new("x", 1), 0);
        assert!(agg.is_empty());
        assert_eq!(agg.terms().len(), 0);
        assert_eq!(agg.junction().joiner(), " & ");
    }
}
