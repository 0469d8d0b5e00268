use clap::Parser;
use hyltl::generators::{Generator, QuantitativeNoninterference};
use hyltl::params::TraceBound;
use hyltl_gen::{CommonArgs, emit, exit_on_error, init_logging, normalize_args};

/// Print a quantitative noninterference HyperLTL formula over c + 1 traces.
#[derive(Parser)]
#[command(name = "qn_gen", version)]
pub struct Arguments {
    #[command(flatten)]
    common: CommonArgs,

    /// Highest trace index; the formula quantifies c + 1 traces [default: 0]
    #[arg(long = "c", value_name = "c")]
    bound: Option<u32>,
}

fn run(args: Arguments) -> hyltl::Result<()> {
    let preset = args.common.load_preset()?;
    let signature = args.common.signature(&preset);
    let bound = TraceBound::new(args.bound.or(preset.qn.c).unwrap_or(0));

    let formula = QuantitativeNoninterference::new(signature, bound).build();
    emit(&formula, &args.common)
}

fn main() {
    init_logging();
    let args = Arguments::parse_from(normalize_args(std::env::args_os()));
    exit_on_error(run(args));
}
