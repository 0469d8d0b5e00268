use clap::Parser;
use hyltl::generators::{Generator, HammingDistance};
use hyltl::params::Distance;
use hyltl_gen::{CommonArgs, emit, exit_on_error, init_logging, normalize_args};

/// Print a Hamming-distance bound HyperLTL formula over two traces.
#[derive(Parser)]
#[command(name = "hd_gen", version)]
pub struct Arguments {
    #[command(flatten)]
    common: CommonArgs,

    /// Hamming-distance window, at least 0 [default: 0]
    #[arg(long = "d", value_name = "d", allow_negative_numbers = true)]
    distance: Option<i64>,
}

fn run(args: Arguments) -> hyltl::Result<()> {
    let preset = args.common.load_preset()?;
    let signature = args.common.signature(&preset);
    let distance = Distance::try_from(args.distance.or(preset.hd.d).unwrap_or(0))?;

    let formula = HammingDistance::new(signature, distance).build();
    emit(&formula, &args.common)
}

fn main() {
    init_logging();
    let args = Arguments::parse_from(normalize_args(std::env::args_os()));
    exit_on_error(run(args));
}
