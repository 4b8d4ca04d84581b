//! Bit layout of the per-edge attribute record.
//!
//! Low to high: forward access (1 bit), backward access (1 bit), average
//! speed (`speed_bits`, linear `speed_factor`), priority (3 bits).

use crate::{encoding::EncoderError, structures::PriorityLevel};

const FORWARD_BIT: u32 = 0;
const BACKWARD_BIT: u32 = 1;
const SPEED_SHIFT: u32 = 2;
const PRIORITY_BITS: u32 = 3;

pub const MAX_SPEED_BITS: u32 = 32;

/// Raw attribute bits of one edge.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct EdgeFlags(u64);

impl EdgeFlags {
    pub fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    fn get(self, shift: u32, mask: u64) -> u64 {
        (self.0 >> shift) & mask
    }

    fn set(&mut self, shift: u32, mask: u64, value: u64) {
        self.0 = (self.0 & !(mask << shift)) | ((value & mask) << shift);
    }
}

/// Accessors for the sub-fields of an [`EdgeFlags`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FlagLayout {
    speed_bits: u32,
    speed_factor: f64,
    priority_shift: u32,
}

impl FlagLayout {
    pub fn new(speed_bits: u32, speed_factor: f64) -> Result<Self, EncoderError> {
        if !(1..=MAX_SPEED_BITS).contains(&speed_bits) {
            return Err(EncoderError::InvalidSpeedBits {
                got: speed_bits,
                max: MAX_SPEED_BITS,
            });
        }
        if !speed_factor.is_finite() || speed_factor <= 0.0 {
            return Err(EncoderError::InvalidSpeedFactor(speed_factor));
        }

        Ok(Self {
            speed_bits,
            speed_factor,
            priority_shift: SPEED_SHIFT + speed_bits,
        })
    }

    pub fn speed_bits(&self) -> u32 {
        self.speed_bits
    }

    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// Number of low bits the layout occupies.
    pub fn bit_count(&self) -> u32 {
        self.priority_shift + PRIORITY_BITS
    }

    fn speed_mask(&self) -> u64 {
        (1u64 << self.speed_bits) - 1
    }

    /// Largest speed the speed sub-field can hold.
    pub fn max_storable_speed(&self) -> f64 {
        self.speed_mask() as f64 * self.speed_factor
    }

    pub fn access(&self, flags: EdgeFlags, reverse: bool) -> bool {
        let bit = if reverse { BACKWARD_BIT } else { FORWARD_BIT };
        flags.get(bit, 1) == 1
    }

    pub fn set_access(&self, flags: &mut EdgeFlags, reverse: bool, value: bool) {
        let bit = if reverse { BACKWARD_BIT } else { FORWARD_BIT };
        flags.set(bit, 1, value as u64);
    }

    pub fn speed(&self, flags: EdgeFlags) -> f64 {
        flags.get(SPEED_SHIFT, self.speed_mask()) as f64 * self.speed_factor
    }

    /// Stores `speed` rounded to the nearest step. Out-of-range values
    /// saturate; NaN is stored as zero.
    pub fn set_speed(&self, flags: &mut EdgeFlags, speed: f64) {
        let steps = if speed.is_nan() {
            0
        } else {
            (speed / self.speed_factor)
                .round()
                .clamp(0.0, self.speed_mask() as f64) as u64
        };
        flags.set(SPEED_SHIFT, self.speed_mask(), steps);
    }

    pub fn priority(&self, flags: EdgeFlags) -> PriorityLevel {
        let mask = (1u64 << PRIORITY_BITS) - 1;
        PriorityLevel::from_code(flags.get(self.priority_shift, mask) as u8)
            .unwrap_or(PriorityLevel::Unchanged)
    }

    pub fn set_priority(&self, flags: &mut EdgeFlags, priority: PriorityLevel) {
        let mask = (1u64 << PRIORITY_BITS) - 1;
        flags.set(self.priority_shift, mask, priority.code() as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_layouts() {
        assert_eq!(
            FlagLayout::new(0, 1.0),
            Err(EncoderError::InvalidSpeedBits { got: 0, max: 32 })
        );
        assert!(FlagLayout::new(33, 1.0).is_err());
        assert_eq!(
            FlagLayout::new(4, 0.0),
            Err(EncoderError::InvalidSpeedFactor(0.0))
        );
        assert!(FlagLayout::new(4, f64::NAN).is_err());
        assert_eq!(FlagLayout::new(32, 1.0).unwrap().bit_count(), 37);
    }

    #[test]
    fn test_priority_round_trip() {
        let layout = FlagLayout::new(4, 1.0).unwrap();
        for level in PriorityLevel::ALL {
            let mut flags = EdgeFlags::default();
            layout.set_speed(&mut flags, 15.0);
            layout.set_access(&mut flags, true, true);
            layout.set_priority(&mut flags, level);
            assert_eq!(layout.priority(flags), level);
            assert_eq!(layout.speed(flags), 15.0);
            assert!(layout.access(flags, true));
        }
    }

    #[test]
    fn test_speed_quantization_saturates() {
        let layout = FlagLayout::new(4, 1.0).unwrap();
        let mut flags = EdgeFlags::default();

        layout.set_speed(&mut flags, 4.4);
        assert_eq!(layout.speed(flags), 4.0);
        layout.set_speed(&mut flags, 4.6);
        assert_eq!(layout.speed(flags), 5.0);
        layout.set_speed(&mut flags, 40.0);
        assert_eq!(layout.speed(flags), 15.0);
        layout.set_speed(&mut flags, -3.0);
        assert_eq!(layout.speed(flags), 0.0);
        layout.set_speed(&mut flags, f64::INFINITY);
        assert_eq!(layout.speed(flags), layout.max_storable_speed());
        layout.set_speed(&mut flags, f64::NAN);
        assert_eq!(layout.speed(flags), 0.0);
    }

    #[test]
    fn test_fields_do_not_overlap() {
        let layout = FlagLayout::new(5, 0.5).unwrap();
        let mut flags = EdgeFlags::default();
        layout.set_access(&mut flags, false, true);
        layout.set_priority(&mut flags, PriorityLevel::Best);
        layout.set_speed(&mut flags, 8.5);

        assert!(layout.access(flags, false));
        assert!(!layout.access(flags, true));
        assert_eq!(layout.speed(flags), 8.5);
        assert_eq!(layout.priority(flags), PriorityLevel::Best);

        layout.set_access(&mut flags, false, false);
        assert!(!layout.access(flags, false));
        assert_eq!(flags.bits() >> layout.bit_count(), 0);
    }
}
