use std::str::FromStr;

use serde::Deserialize;

use crate::encoding::EncoderError;

/// Constructor-time settings of the run encoder.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    pub speed_bits: u32,
    pub speed_factor: f64,
    pub block_fords: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            speed_bits: 4,
            speed_factor: 1.0,
            block_fords: true,
        }
    }
}

/// Parses the compact `speed_bits=4|speed_factor=1|block_fords=true` form.
/// Missing keys keep their defaults.
impl FromStr for EncoderConfig {
    type Err = EncoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = EncoderConfig::default();

        for entry in s.split('|').map(str::trim).filter(|e| !e.is_empty()) {
            let invalid = || EncoderError::InvalidProperty(entry.to_string());
            let (key, value) = entry.split_once('=').ok_or_else(invalid)?;
            let value = value.trim();

            match key.trim() {
                "speed_bits" => config.speed_bits = value.parse().map_err(|_| invalid())?,
                "speed_factor" => config.speed_factor = value.parse().map_err(|_| invalid())?,
                "block_fords" => config.block_fords = value.parse().map_err(|_| invalid())?,
                _ => return Err(invalid()),
            }
        }

        Ok(config)
    }
}
