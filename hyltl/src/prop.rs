//! Textual identifiers for atomic propositions.
//!
//! Role
//! - A [`Trace`] is a quantifier-bound trace variable: a base name plus a trace ordinal,
//!   printed as `<var><index>` (e.g. `x1`).
//! - A [`Proposition`] is one indexed input or output observable on one trace, printed as
//!   `<in|out><index>_<trace>` (e.g. `in0_x1`, `out2_x0`).
//!
//! Naming is pure and total. The base name is shared (`Rc<str>`) between every trace of a
//! run so building large formulas does not copy it.
use std::fmt;
use std::rc::Rc;

use strum::{Display, EnumIs, EnumIter, IntoStaticStr};

/// Kind of an atomic proposition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIs, EnumIter, IntoStaticStr,
)]
pub enum PropKind {
    #[strum(serialize = "in")]
    Input,
    #[strum(serialize = "out")]
    Output,
}

impl PropKind {
    /// Text prefix of propositions of this kind.
    #[inline]
    pub fn prefix(self) -> &'static str {
        self.into()
    }
}

/// Quantifier-bound trace variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trace {
    var: Rc<str>,
    index: u32,
}

impl Trace {
    pub fn new(var: impl Into<Rc<str>>, index: u32) -> Self {
        Self {
            var: var.into(),
            index,
        }
    }

    /// Base name shared by all traces of a formula.
    #[inline]
    pub fn var(&self) -> &str {
        &self.var
    }

    #[inline]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Same base name, another trace ordinal.
    #[inline]
    pub fn with_index(&self, index: u32) -> Self {
        Self {
            var: Rc::clone(&self.var),
            index,
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.var, self.index)
    }
}

/// Indexed atomic proposition observed on one trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition {
    pub kind: PropKind,
    pub index: u32,
    pub trace: Trace,
}

impl Proposition {
    pub fn new(kind: PropKind, index: u32, trace: Trace) -> Self {
        Self { kind, index, trace }
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}_{}", self.kind, self.index, self.trace)
    }
}
