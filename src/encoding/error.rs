use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EncoderError {
    #[error("speed_bits must be between 1 and {max}, got {got}")]
    InvalidSpeedBits { got: u32, max: u32 },
    #[error("speed_factor must be a positive finite number, got {0}")]
    InvalidSpeedFactor(f64),
    #[error("speed field holds at most {max} km/h, the encoder writes up to {required} km/h")]
    SpeedRangeTooSmall { max: f64, required: f64 },
    #[error("invalid encoder property '{0}'")]
    InvalidProperty(String),
}
