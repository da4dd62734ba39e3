//! GPIO helpers for display buses
//!
//! Single control lines (DC, WR, RD, RST) use the `embedded-hal`
//! [`OutputPin`](embedded_hal::digital::OutputPin) trait directly. The
//! parallel data lines are driven as one [`PinGroup`] so a whole byte or
//! word is presented before the write strobe.

use core::convert::Infallible;

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Pin group for multi-pin operations
///
/// Bit `n` of a value maps to data line `Dn`. Implementations for a GPIO
/// port usually write the port's set/reset register in one access.
pub trait PinGroup {
    /// Error type
    type Error;

    /// Read all pins at once
    fn read(&self) -> Result<u32, Self::Error>;

    /// Write all pins at once
    fn write(&mut self, value: u32) -> Result<(), Self::Error>;

    /// Switch the group to inputs before a read cycle
    fn set_input(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Switch the group back to outputs after a read cycle
    fn set_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Placeholder for a control line that is not wired (CS tied low, RD tied
/// high, RST tied to the MCU reset).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin;

impl embedded_hal::digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for NoPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::OutputPin;

    #[test]
    fn test_pin_state_bool_conversion() {
        assert_eq!(PinState::from(true), PinState::High);
        assert!(!bool::from(PinState::Low));
    }

    #[test]
    fn test_no_pin_never_fails() {
        let mut pin = NoPin;
        assert!(pin.set_low().is_ok());
        assert!(pin.set_high().is_ok());
    }
}
