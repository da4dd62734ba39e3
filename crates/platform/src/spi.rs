//! 4-wire SPI display interface
//!
//! # Wiring
//!
//! | Signal | Direction | Notes |
//! |--------|-----------|-------|
//! | SCLK   | Host → Display | |
//! | MOSI   | Host → Display | |
//! | MISO   | Display → Host | read-back only, optional |
//! | CS     | Host → Display | managed by `SpiDevice` |
//! | DC     | Host → Display | low = command, high = data |

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::{BusWidth, DisplayError, DisplayInterface};

/// Pixels packed per SPI transaction by [`DisplayInterface::write_block`].
pub const BLOCK_CHUNK_PIXELS: usize = 32;

/// SPI link to a display controller.
///
/// Generic over:
/// - `SPI` - an [`embedded_hal::spi::SpiDevice`] (manages CS).
/// - `DC`  - Data/Command [`embedded_hal::digital::OutputPin`].
pub struct SpiInterface<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Wrap an SPI device and its DC line.
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI device and DC pin.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn data_mode(&mut self) -> Result<(), DisplayError> {
        self.dc.set_high().map_err(|_| DisplayError::Gpio)
    }
}

impl<SPI, DC> DisplayInterface for SpiInterface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    fn bus_width(&self) -> BusWidth {
        BusWidth::Bits8
    }

    /// Assert DC low (command mode) and send one command byte over SPI.
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Gpio)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::Communication)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        self.data_mode()?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::Communication)
    }

    /// Pixels are packed big-endian, [`BLOCK_CHUNK_PIXELS`] per transaction.
    fn write_block(&mut self, words: &[u16]) -> Result<(), DisplayError> {
        if words.is_empty() {
            return Ok(());
        }
        self.data_mode()?;
        let mut buffer = [0u8; BLOCK_CHUNK_PIXELS * 2];
        for chunk in words.chunks(BLOCK_CHUNK_PIXELS) {
            for (slot, word) in buffer.chunks_exact_mut(2).zip(chunk) {
                slot.copy_from_slice(&word.to_be_bytes());
            }
            let bytes = buffer
                .get(..chunk.len() * 2)
                .ok_or(DisplayError::Communication)?;
            self.spi
                .write(bytes)
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        if buffer.is_empty() {
            return Ok(());
        }
        self.data_mode()?;
        self.spi
            .read(buffer)
            .map_err(|_| DisplayError::Communication)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    /// `SpiDevice::write()` is checked by the mock as
    /// TransactionStart + Write(data) + TransactionEnd.
    fn spi_device_write(data: &[u8]) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(data.to_vec()),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn test_command_then_data_toggles_dc() {
        let mut expectations = vec![];
        expectations.extend(spi_device_write(&[0x36]));
        expectations.extend(spi_device_write(&[0x48]));
        let spi = SpiMock::new(&expectations);
        let dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut iface = SpiInterface::new(spi, dc);
        iface.write_command(0x36).unwrap();
        iface.write_data(&[0x48]).unwrap();

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn test_empty_data_is_skipped() {
        let spi = SpiMock::new(&[]);
        let dc = PinMock::new(&[]);
        let mut iface = SpiInterface::new(spi, dc);
        iface.write_data(&[]).unwrap();
        iface.write_block(&[]).unwrap();

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn test_data16_is_big_endian() {
        let spi = SpiMock::new(&spi_device_write(&[0xF8, 0x00]));
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut iface = SpiInterface::new(spi, dc);
        iface.write_data16(0xF800).unwrap();

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn test_block_is_chunked() {
        let pixels = [0x1234u16; BLOCK_CHUNK_PIXELS + 1];
        let mut expectations = vec![];
        expectations.extend(spi_device_write(&[0x12, 0x34].repeat(BLOCK_CHUNK_PIXELS)));
        expectations.extend(spi_device_write(&[0x12, 0x34]));
        let spi = SpiMock::new(&expectations);
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);

        let mut iface = SpiInterface::new(spi, dc);
        iface.write_block(&pixels).unwrap();

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }

    #[test]
    fn test_read_data() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::read_vec(vec![0x00, 0xF8, 0xFC]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let mut iface = SpiInterface::new(spi, dc);

        let mut buffer = [0u8; 3];
        iface.read_data(&mut buffer).unwrap();
        assert_eq!(buffer, [0x00, 0xF8, 0xFC]);

        let (mut spi, mut dc) = iface.release();
        spi.done();
        dc.done();
    }
}
