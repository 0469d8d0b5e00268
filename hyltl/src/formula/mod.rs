//! Owned formula trees: one variant per operator kind.
//!
//! Role
//! - [`Formula`] is built eagerly by the generators (see [`func`] for free-function
//!   builders) and rendered afterwards by [`pretty`]; construction and printing never mix.
//! - [`Hyperformula`] pairs a matrix with its quantifier prefix and the [`Notation`] the
//!   printer must use.
//!
//! Equality semantics
//! - Equality and hashing are structural: two independently built trees are equal if they
//!   have the same constructors, the same aggregates and pairwise-equal children.
//!
//! Depth
//! - Dropping, printing and walking use explicit stacks and accept trees of any depth.
//!   The derived `Clone`, `PartialEq`, `Hash` and `Debug` recurse on the nesting depth.
//!
//! Example
//! ```
//! use hyltl::prelude::*;
//!
//! let s = Signature::default();
//! let f = globally(aggregate(s.agree(PropKind::Output, 0, 1)));
//! assert_eq!(f.r#type(), FormulaType::Globally);
//! assert_eq!(f.with_notation(Notation::HAMMING).pretty_string(), "G((out0_x0 <-> out0_x1))");
//! ```
pub mod func;
mod notation;
pub mod pretty;

use std::rc::Rc;

use strum::{EnumDiscriminants, EnumIter};

use crate::aggregate::{Aggregate, Junction};
use crate::prop::Trace;

pub use notation::Notation;

/// Formula node.
///
/// `Chain` and `Aggregate` print their operands joined by the connective without
/// parentheses of their own; wrap them in [`Formula::Group`] where the output needs them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumDiscriminants)]
#[strum_discriminants(name(FormulaType), derive(Hash, EnumIter))]
pub enum Formula {
    // Constant
    False,

    // Unary
    Not(Box<Formula>),
    Group(Box<Formula>),
    Next(Box<Formula>),
    Finally(Box<Formula>),
    Globally(Box<Formula>),

    // Binary
    And(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    WeakUntil(Box<Formula>, Box<Formula>),

    // N-ary
    Chain(Junction, Vec<Formula>),
    Aggregate(Aggregate),
}

impl Formula {
    /// Discriminant identifying the kind of this node.
    #[inline]
    pub fn r#type(&self) -> FormulaType {
        FormulaType::from(self)
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Formula> {
        let empty: &[Formula] = &[];
        let (pair, rest) = match self {
            Formula::False | Formula::Aggregate(_) => ([None, None], empty),
            Formula::Not(a)
            | Formula::Group(a)
            | Formula::Next(a)
            | Formula::Finally(a)
            | Formula::Globally(a) => ([Some(&**a), None], empty),
            Formula::And(a, b) | Formula::Implies(a, b) | Formula::WeakUntil(a, b) => {
                ([Some(&**a), Some(&**b)], empty)
            }
            Formula::Chain(_, items) => ([None, None], items.as_slice()),
        };
        pair.into_iter().flatten().chain(rest)
    }

    /// Total number of nodes in this tree.
    pub fn size(&self) -> usize {
        let mut size = 0;
        crate::walker::walk_no_input(self, |node| {
            node.schedule_children(());
            size += 1;
        });
        size
    }

    /// Number of nodes of the given kind in this tree.
    pub fn count(&self, ty: FormulaType) -> usize {
        let mut count = 0;
        crate::walker::walk_no_input(self, |node| {
            node.schedule_children(());
            if node.formula().r#type() == ty {
                count += 1;
            }
        });
        count
    }

    /// Conjunction: `(self & rhs)`.
    #[inline]
    pub fn and(self, rhs: Formula) -> Formula {
        func::and(self, rhs)
    }

    /// Implication: `(self -> rhs)`.
    #[inline]
    pub fn implies(self, rhs: Formula) -> Formula {
        func::implies(self, rhs)
    }

    /// Weak until: `(self W rhs)`.
    #[inline]
    pub fn weak_until(self, rhs: Formula) -> Formula {
        func::weak_until(self, rhs)
    }

    /// Parenthesized: `(self)`.
    #[inline]
    pub fn group(self) -> Formula {
        func::group(self)
    }
}

impl Formula {
    /// Move the direct children out, leaving `False` in their place.
    fn take_children(&mut self, out: &mut Vec<Formula>) {
        match self {
            Formula::False | Formula::Aggregate(_) => {}
            Formula::Not(a)
            | Formula::Group(a)
            | Formula::Next(a)
            | Formula::Finally(a)
            | Formula::Globally(a) => out.push(std::mem::replace(&mut **a, Formula::False)),
            Formula::And(a, b) | Formula::Implies(a, b) | Formula::WeakUntil(a, b) => {
                out.push(std::mem::replace(&mut **a, Formula::False));
                out.push(std::mem::replace(&mut **b, Formula::False));
            }
            Formula::Chain(_, items) => out.append(items),
        }
    }
}

impl Drop for Formula {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        self.take_children(&mut detached);
        // Each popped node is childless by the time it is dropped
        while let Some(mut node) = detached.pop() {
            node.take_children(&mut detached);
        }
    }
}

impl From<Aggregate> for Formula {
    fn from(aggregate: Aggregate) -> Self {
        Formula::Aggregate(aggregate)
    }
}

impl std::ops::BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Self::Output {
        func::and(self, rhs)
    }
}

impl std::ops::Not for Formula {
    type Output = Formula;

    fn not(self) -> Self::Output {
        func::not(self)
    }
}

/// Universal trace quantifier prefix `forall x0. forall x1. ...`.
///
/// Emitted once in front of a matrix and never nested.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Forall {
    var: Rc<str>,
    traces: u64,
}

impl Forall {
    pub fn new(var: impl Into<Rc<str>>, traces: u64) -> Self {
        Self {
            var: var.into(),
            traces,
        }
    }

    /// Number of quantified traces.
    #[inline]
    pub fn len(&self) -> u64 {
        self.traces
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.traces == 0
    }

    /// Quantified trace variables in ascending order.
    pub fn traces(&self) -> impl Iterator<Item = Trace> + '_ {
        // Trace indices are u32; the count is at most u32::MAX + 1.
        (0..self.traces).map(|index| Trace::new(Rc::clone(&self.var), index as u32))
    }
}

/// Quantified formula ready for printing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hyperformula {
    pub notation: Notation,
    pub quantifiers: Forall,
    pub matrix: Formula,
}

/// A borrowed formula together with the notation used to print it.
#[derive(Debug, Clone, Copy)]
pub struct Notated<'a> {
    pub formula: &'a Formula,
    pub notation: Notation,
}

impl Formula {
    /// Attach a notation, e.g. to print a sub-formula on its own.
    #[inline]
    pub fn with_notation(&self, notation: Notation) -> Notated<'_> {
        Notated {
            formula: self,
            notation,
        }
    }
}
