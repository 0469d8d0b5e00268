//! TOML presets for the generator flags.
//!
//! ```toml
//! pi = "x"
//! in = 2
//! out = 3
//!
//! [hd]
//! d = 4
//!
//! [od]
//! t = 3
//!
//! [qn]
//! c = 2
//! ```
//!
//! Every key is optional; unknown keys are rejected so typos do not pass silently.
use std::path::Path;

use hyltl::Error;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Preset {
    pub pi: Option<String>,
    #[serde(rename = "in")]
    pub inputs: Option<u32>,
    #[serde(rename = "out")]
    pub outputs: Option<u32>,
    pub hd: HdPreset,
    pub od: OdPreset,
    pub qn: QnPreset,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HdPreset {
    pub d: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OdPreset {
    pub t: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QnPreset {
    pub c: Option<u32>,
}

impl Preset {
    pub fn load(path: &Path) -> hyltl::Result<Self> {
        let file = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| Error::PresetRead {
            source,
            file: file.clone(),
        })?;
        let preset = Self::parse(&text, &file)?;
        debug!("Loaded preset '{file}': {preset:?}");
        Ok(preset)
    }

    pub fn parse(text: &str, file: &str) -> hyltl::Result<Self> {
        toml::from_str(text).map_err(|source| Error::PresetParse {
            source,
            file: file.to_string(),
        })
    }
}
