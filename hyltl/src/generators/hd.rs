use crate::formula::func::{aggregate, and, falsum, finally, group, implies, next, not, weak_until};
use crate::formula::{Forall, Formula, Notation};
use crate::generators::Generator;
use crate::params::{Distance, Signature};
use crate::prop::PropKind;

/// Hamming-distance bound between two traces.
///
/// Once some input differs, the outputs may disagree on at most `d` positions,
/// where every disagreement must be followed by a step:
///
/// ```text
/// forall x0. forall x1. (F(<some input differs>) -> !(Ham(d)))
/// Ham(0) = False
/// Ham(k) = (<outputs agree> W (<some output differs> & X(Ham(k - 1))))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingDistance {
    pub signature: Signature,
    pub distance: Distance,
}

impl HammingDistance {
    pub fn new(signature: Signature, distance: Distance) -> Self {
        Self {
            signature,
            distance,
        }
    }

    /// `Ham(window)`; contains exactly `window` `Next` operators.
    pub fn ham(&self, window: u32) -> Formula {
        let s = &self.signature;
        // Built from the innermost level outwards so deep windows do not recurse
        (0..window).fold(falsum(), |inner, _| {
            weak_until(
                group(aggregate(s.agree(PropKind::Output, 0, 1))),
                and(
                    group(aggregate(s.differ(PropKind::Output, 0, 1))),
                    next(inner),
                ),
            )
        })
    }
}

impl Generator for HammingDistance {
    const NAME: &'static str = "hd";
    const NOTATION: Notation = Notation::HAMMING;

    fn signature(&self) -> &Signature {
        &self.signature
    }

    fn quantifiers(&self) -> Forall {
        self.signature.forall(2)
    }

    fn matrix(&self) -> Formula {
        let inputs_diverge = finally(group(aggregate(
            self.signature.differ(PropKind::Input, 0, 1),
        )));
        implies(inputs_diverge, not(self.ham(self.distance.get())))
    }
}
