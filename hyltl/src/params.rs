//! Validated generator parameters.
//!
//! Every value here is checked at the boundary so that construction cannot hang or
//! silently produce a truncated formula: a [`Distance`] is never negative and an
//! [`OdShape`] is one of exactly three shapes.
use std::rc::Rc;

use strum::{Display, EnumIter, FromRepr};

use crate::aggregate::Aggregate;
use crate::error::{Error, Result};
use crate::formula::Forall;
use crate::prop::{PropKind, Trace};

/// Parameters shared by all generators: quantifier base name and proposition counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    var: Rc<str>,
    pub inputs: u32,
    pub outputs: u32,
}

impl Signature {
    pub const DEFAULT_VAR: &'static str = "x";

    pub fn new(var: impl Into<Rc<str>>, inputs: u32, outputs: u32) -> Self {
        Self {
            var: var.into(),
            inputs,
            outputs,
        }
    }

    /// Quantifier variable base name.
    #[inline]
    pub fn var(&self) -> &str {
        &self.var
    }

    /// Trace variable with ordinal `index`.
    #[inline]
    pub fn trace(&self, index: u32) -> Trace {
        Trace::new(Rc::clone(&self.var), index)
    }

    /// Number of propositions of the given kind.
    #[inline]
    pub fn count(&self, kind: PropKind) -> u32 {
        match kind {
            PropKind::Input => self.inputs,
            PropKind::Output => self.outputs,
        }
    }

    /// Quantifier prefix over `traces` traces.
    pub fn forall(&self, traces: u64) -> Forall {
        Forall::new(Rc::clone(&self.var), traces)
    }

    /// All propositions of `kind` agree between traces `lhs` and `rhs`.
    pub fn agree(&self, kind: PropKind, lhs: u32, rhs: u32) -> Aggregate {
        Aggregate::agree(kind, self.trace(lhs), self.trace(rhs), self.count(kind))
    }

    /// Some proposition of `kind` differs between traces `lhs` and `rhs`.
    pub fn differ(&self, kind: PropKind, lhs: u32, rhs: u32) -> Aggregate {
        Aggregate::differ(kind, self.trace(lhs), self.trace(rhs), self.count(kind))
    }

    /// Whether one of the proposition counts is zero, which yields empty aggregates.
    pub fn is_degenerate(&self) -> bool {
        self.inputs == 0 || self.outputs == 0
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR, 1, 1)
    }
}

/// Hamming-distance window of the HD generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    #[inline]
    pub fn new(window: u32) -> Self {
        Self(window)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Distance {
    fn from(window: u32) -> Self {
        Self(window)
    }
}

impl TryFrom<i64> for Distance {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidDistance {
                value,
                max: u32::MAX,
            })
    }
}

/// Formula shape of the OD generator, numbered like the `-t` selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr)]
#[repr(u8)]
pub enum OdShape {
    /// `G(<implication>)`.
    #[default]
    Global = 1,
    /// `(<inputs agree>)=>G(<outputs agree>)`.
    Implication = 2,
    /// `(<outputs agree>) W (<some input differs>)`.
    WeakUntil = 3,
}

impl OdShape {
    /// Numeric selector of this shape.
    #[inline]
    pub fn selector(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for OdShape {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .and_then(OdShape::from_repr)
            .ok_or(Error::UnknownShape { value })
    }
}

/// Highest trace index `c` of the QN generator; the formula quantifies `c + 1` traces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TraceBound(u32);

impl TraceBound {
    #[inline]
    pub fn new(last: u32) -> Self {
        Self(last)
    }

    /// Highest trace index.
    #[inline]
    pub fn last(self) -> u32 {
        self.0
    }

    /// Number of quantified traces.
    #[inline]
    pub fn traces(self) -> u64 {
        u64::from(self.0) + 1
    }
}

impl From<u32> for TraceBound {
    fn from(last: u32) -> Self {
        Self(last)
    }
}
