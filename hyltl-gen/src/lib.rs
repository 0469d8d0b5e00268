//! Shared plumbing of the `hd_gen`, `od_gen` and `qn_gen` binaries: flag handling,
//! presets, logging setup and output.
use std::io::Write;

use hyltl::formula::Hyperformula;
use hyltl::formula::pretty::PrettyFormula;
use log::debug;
use termcolor::StandardStream;

pub mod cli;
pub mod preset;

pub use cli::{ColorArg, CommonArgs, normalize_args};
pub use preset::Preset;

/// Environment variable holding the `env_logger` filter.
pub const LOG_ENV: &str = "HYLTL_LOG";

/// Route `log` records to stderr, filtered by [`LOG_ENV`] (default `warn`).
pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"));
}

/// Write the formula, and nothing else, to stdout.
pub fn emit(formula: &Hyperformula, common: &CommonArgs) -> hyltl::Result<()> {
    let stdout = StandardStream::stdout(common.color.into());
    let mut stdout = stdout.lock();
    formula.pretty_render_to(&mut stdout)?;
    if common.newline {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Report a failed run on stderr and exit with status 1.
pub fn exit_on_error(result: hyltl::Result<()>) {
    if let Err(err) = result {
        debug!("{err:?}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
