//! Flags shared by the three generators.
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use hyltl::params::Signature;
use termcolor::ColorChoice;

use crate::preset::Preset;

/// When to color the printed formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Plain text, suitable for model-checker input files.
    #[default]
    Never,
    /// Color if the terminal looks capable.
    Auto,
    Always,
}

impl From<ColorArg> for ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Never => ColorChoice::Never,
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
        }
    }
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Quantifier variable base name [default: x]
    #[arg(long = "pi", value_name = "varname")]
    pub pi: Option<String>,

    /// Number of atomic input propositions, non-negative [default: 1]
    #[arg(long = "in", value_name = "n_in", allow_negative_numbers = true)]
    pub inputs: Option<u32>,

    /// Number of atomic output propositions, non-negative [default: 1]
    #[arg(long = "out", value_name = "n_out", allow_negative_numbers = true)]
    pub outputs: Option<u32>,

    /// TOML file supplying defaults for any flag not given on the command line
    #[arg(long, value_name = "FILE")]
    pub preset: Option<PathBuf>,

    /// Color the formula
    #[arg(long, value_enum, default_value_t = ColorArg::Never)]
    pub color: ColorArg,

    /// Terminate the formula with a newline
    #[arg(long)]
    pub newline: bool,
}

impl CommonArgs {
    /// Load the preset file if one was given, otherwise an empty preset.
    pub fn load_preset(&self) -> hyltl::Result<Preset> {
        match &self.preset {
            Some(path) => Preset::load(path),
            None => Ok(Preset::default()),
        }
    }

    /// Flags first, then the preset, then the built-in defaults.
    pub fn signature(&self, preset: &Preset) -> Signature {
        let var = self
            .pi
            .as_deref()
            .or(preset.pi.as_deref())
            .unwrap_or(Signature::DEFAULT_VAR);
        Signature::new(
            var,
            self.inputs.or(preset.inputs).unwrap_or(1),
            self.outputs.or(preset.outputs).unwrap_or(1),
        )
    }
}

/// Rewrite single-dash long flags (`-pi`, `-in`, `-d`) into their `--` form.
///
/// Arguments that do not start with a letter after the dash (negative numbers) and the
/// `-h`/`-V` shorthands are left alone, as is everything after a bare `--`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(position, arg)| {
            // Program name
            if position == 0 || passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            let mut chars = text.chars();
            let single_dash = chars.next() == Some('-')
                && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && !matches!(text, "-h" | "-V");
            if single_dash {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
