use log::warn;

use crate::formula::func::{aggregate, and, conjunction, finally, globally, not};
use crate::formula::{Forall, Formula, Notation};
use crate::generators::Generator;
use crate::params::{Signature, TraceBound};
use crate::prop::PropKind;

/// Quantitative noninterference over `c + 1` traces: it is impossible that all traces
/// share the inputs of trace 0 while every pair of them shows a distinct output.
///
/// ```text
/// !((G(<inputs of 0 agree with 0>) & ... & G(<inputs of c agree with 0>)
///    & F(<outputs of 0 and 1 differ>) & ... & F(<outputs of c and c-1 differ>)))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantitativeNoninterference {
    pub signature: Signature,
    pub bound: TraceBound,
}

impl QuantitativeNoninterference {
    pub fn new(signature: Signature, bound: TraceBound) -> Self {
        Self { signature, bound }
    }

    /// Ordered pairs `(i, j)` of distinct trace indices, `i` outer and `j` inner.
    pub fn pairs(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let last = self.bound.last();
        (0..=last).flat_map(move |i| (0..=last).filter(move |&j| j != i).map(move |j| (i, j)))
    }

    /// Every trace agrees with trace 0 on the inputs, trace 0 included.
    fn left(&self) -> Formula {
        let s = &self.signature;
        conjunction(
            (0..=self.bound.last()).map(|i| globally(aggregate(s.agree(PropKind::Input, i, 0)))),
        )
    }

    /// Every ordered pair of distinct traces eventually differs on some output.
    fn right(&self) -> Formula {
        let s = &self.signature;
        conjunction(
            self.pairs()
                .map(|(i, j)| finally(aggregate(s.differ(PropKind::Output, i, j)))),
        )
    }
}

impl Generator for QuantitativeNoninterference {
    const NAME: &'static str = "qn";
    const NOTATION: Notation = Notation::QUANTITATIVE;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn quantifiers(&self) -> Forall {
        self.signature.forall(self.bound.traces())
    }

    fn matrix(&self) -> Formula {
        if self.bound.last() == 0 {
            warn!("qn: a single trace has no distinct pairs; the right conjunct is empty");
        }
        not(and(self.left(), self.right()))
    }
}
