//! Display interface abstraction
//!
//! A [`DisplayInterface`] moves command and data bytes to a TFT controller.
//! It knows nothing about the chip: the driver above decides which bytes
//! are commands and how pixels are encoded.

use crate::DisplayError;

/// Width of the data path between host and controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusWidth {
    /// SPI or 8-bit parallel: one byte per transfer
    Bits8,
    /// 16-bit parallel: one word per strobe
    Bits16,
}

/// Byte-level link to a display controller.
pub trait DisplayInterface {
    /// Data path width.
    fn bus_width(&self) -> BusWidth;

    /// Send one command byte (DC low).
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send data bytes (DC high).
    ///
    /// On a 16-bit bus every byte occupies one strobe on D0..D7.
    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Send one 16-bit data word (DC high).
    ///
    /// Byte-wide buses send the high byte first; a 16-bit bus sends the word
    /// in one strobe.
    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        self.write_data(&word.to_be_bytes())
    }

    /// Stream 16-bit words (pixel data) after a RAMWR command.
    fn write_block(&mut self, words: &[u16]) -> Result<(), DisplayError> {
        for word in words {
            self.write_data16(*word)?;
        }
        Ok(())
    }

    /// Read data bytes (DC high) after a read command.
    ///
    /// Byte-wide buses only; a 16-bit bus returns
    /// [`DisplayError::Unsupported`].
    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        let _ = buffer;
        Err(DisplayError::Unsupported)
    }
}

impl<T: DisplayInterface + ?Sized> DisplayInterface for &mut T {
    fn bus_width(&self) -> BusWidth {
        (**self).bus_width()
    }

    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        (**self).write_command(command)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        (**self).write_data(data)
    }

    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        (**self).write_data16(word)
    }

    fn write_block(&mut self, words: &[u16]) -> Result<(), DisplayError> {
        (**self).write_block(words)
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        (**self).read_data(buffer)
    }
}
