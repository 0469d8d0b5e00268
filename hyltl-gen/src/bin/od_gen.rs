use clap::Parser;
use hyltl::generators::{Generator, ObservationalDeterminism};
use hyltl::params::OdShape;
use hyltl_gen::{CommonArgs, emit, exit_on_error, init_logging, normalize_args};

/// Print an observational determinism HyperLTL formula over two traces.
#[derive(Parser)]
#[command(name = "od_gen", version)]
pub struct Arguments {
    #[command(flatten)]
    common: CommonArgs,

    /// Type of observational determinism: 1 (global), 2 (implication) or 3 (weak until) [default: 1]
    #[arg(long = "t", value_name = "type", allow_negative_numbers = true)]
    shape: Option<i64>,
}

fn run(args: Arguments) -> hyltl::Result<()> {
    let preset = args.common.load_preset()?;
    let signature = args.common.signature(&preset);
    let shape = match args.shape.or(preset.od.t) {
        Some(selector) => OdShape::try_from(selector)?,
        None => OdShape::default(),
    };

    let formula = ObservationalDeterminism::new(signature, shape).build();
    emit(&formula, &args.common)
}

fn main() {
    init_logging();
    let args = Arguments::parse_from(normalize_args(std::env::args_os()));
    exit_on_error(run(args));
}
