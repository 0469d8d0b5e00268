use hyltl::prelude::*;
use termcolor::ColorChoice;

fn main() {
    let signature = Signature::new("pi", 2, 1);

    // Inputs agree until the outputs diverge on the next step.
    let matrix = weak_until(
        group(aggregate(signature.agree(PropKind::Input, 0, 1))),
        next(!aggregate(signature.differ(PropKind::Output, 0, 1))),
    );
    let formula = Hyperformula {
        notation: Notation::HAMMING,
        quantifiers: signature.forall(2),
        matrix,
    };
    formula.pretty_print(ColorChoice::Auto).unwrap();
    println!();

    let od = ObservationalDeterminism::new(signature, OdShape::WeakUntil).build();
    od.pretty_print(ColorChoice::Auto).unwrap();
    println!();
}
