//! 8080-style parallel display interface
//!
//! Data lines D0..D7 (or D0..D15) are driven as one [`PinGroup`]. A write
//! cycle presents the value, pulls WR low and releases it; the controller
//! latches on the rising edge. Reads pulse RD the same way with the group
//! switched to inputs; only an 8-bit bus can read.

use embedded_hal::digital::OutputPin;

use crate::{BusWidth, DisplayError, DisplayInterface, NoPin, PinGroup};

/// Parallel link to a display controller.
pub struct ParallelInterface<BUS, DC, WR, RD = NoPin> {
    bus: BUS,
    dc: DC,
    wr: WR,
    rd: RD,
    width: BusWidth,
    readable: bool,
}

impl<BUS, DC, WR> ParallelInterface<BUS, DC, WR, NoPin>
where
    BUS: PinGroup,
    DC: OutputPin,
    WR: OutputPin,
{
    /// Write-only interface; the RD line is tied high.
    pub fn new(bus: BUS, dc: DC, wr: WR, width: BusWidth) -> Self {
        Self {
            bus,
            dc,
            wr,
            rd: NoPin,
            width,
            readable: false,
        }
    }
}

impl<BUS, DC, WR, RD> ParallelInterface<BUS, DC, WR, RD>
where
    BUS: PinGroup,
    DC: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
{
    /// Interface with a wired RD strobe, enabling read-back.
    pub fn with_read(bus: BUS, dc: DC, wr: WR, rd: RD, width: BusWidth) -> Self {
        Self {
            bus,
            dc,
            wr,
            rd,
            width,
            readable: true,
        }
    }

    /// Give back the data group and control lines.
    pub fn release(self) -> (BUS, DC, WR, RD) {
        (self.bus, self.dc, self.wr, self.rd)
    }

    /// Present `value` on the data lines and strobe WR.
    fn strobe(&mut self, value: u16) -> Result<(), DisplayError> {
        self.bus
            .write(u32::from(value))
            .map_err(|_| DisplayError::Communication)?;
        self.wr.set_low().map_err(|_| DisplayError::Gpio)?;
        self.wr.set_high().map_err(|_| DisplayError::Gpio)
    }

    fn read_cycle(&mut self) -> Result<u8, DisplayError> {
        self.rd.set_low().map_err(|_| DisplayError::Gpio)?;
        let value = self.bus.read().map_err(|_| DisplayError::Communication);
        self.rd.set_high().map_err(|_| DisplayError::Gpio)?;
        let [low, ..] = value?.to_le_bytes();
        Ok(low)
    }
}

impl<BUS, DC, WR, RD> DisplayInterface for ParallelInterface<BUS, DC, WR, RD>
where
    BUS: PinGroup,
    DC: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
{
    fn bus_width(&self) -> BusWidth {
        self.width
    }

    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::Gpio)?;
        self.strobe(u16::from(command))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| DisplayError::Gpio)?;
        for byte in data {
            self.strobe(u16::from(*byte))?;
        }
        Ok(())
    }

    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        match self.width {
            BusWidth::Bits8 => self.write_data(&word.to_be_bytes()),
            BusWidth::Bits16 => {
                self.dc.set_high().map_err(|_| DisplayError::Gpio)?;
                self.strobe(word)
            }
        }
    }

    fn write_block(&mut self, words: &[u16]) -> Result<(), DisplayError> {
        if words.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(|_| DisplayError::Gpio)?;
        for word in words {
            match self.width {
                BusWidth::Bits8 => {
                    let [high, low] = word.to_be_bytes();
                    self.strobe(u16::from(high))?;
                    self.strobe(u16::from(low))?;
                }
                BusWidth::Bits16 => self.strobe(*word)?,
            }
        }
        Ok(())
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        if !self.readable || self.width == BusWidth::Bits16 {
            return Err(DisplayError::Unsupported);
        }
        self.dc.set_high().map_err(|_| DisplayError::Gpio)?;
        self.bus
            .set_input()
            .map_err(|_| DisplayError::Communication)?;
        let mut result = Ok(());
        for slot in buffer.iter_mut() {
            match self.read_cycle() {
                Ok(byte) => *slot = byte,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
        self.bus
            .set_output()
            .map_err(|_| DisplayError::Communication)?;
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::mocks::MockPinGroup;

    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    fn strobes(count: usize) -> Vec<PinTransaction> {
        (0..count)
            .flat_map(|_| {
                [
                    PinTransaction::set(PinState::Low),
                    PinTransaction::set(PinState::High),
                ]
            })
            .collect()
    }

    #[test]
    fn test_command_strobes_once() {
        let dc = PinMock::new(&[PinTransaction::set(PinState::Low)]);
        let wr = PinMock::new(&strobes(1));
        let mut iface = ParallelInterface::new(MockPinGroup::new(), dc, wr, BusWidth::Bits8);

        iface.write_command(0x2C).unwrap();

        let (bus, mut dc, mut wr, _) = iface.release();
        assert_eq!(bus.writes(), vec![0x2C]);
        dc.done();
        wr.done();
    }

    #[test]
    fn test_word_on_8bit_bus_is_two_strobes() {
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let wr = PinMock::new(&strobes(2));
        let mut iface = ParallelInterface::new(MockPinGroup::new(), dc, wr, BusWidth::Bits8);

        iface.write_data16(0xABCD).unwrap();

        let (bus, mut dc, mut wr, _) = iface.release();
        assert_eq!(bus.writes(), vec![0xAB, 0xCD]);
        dc.done();
        wr.done();
    }

    #[test]
    fn test_block_on_16bit_bus_is_one_strobe_per_word() {
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let wr = PinMock::new(&strobes(3));
        let mut iface = ParallelInterface::new(MockPinGroup::new(), dc, wr, BusWidth::Bits16);

        iface.write_block(&[0xF800, 0x07E0, 0x001F]).unwrap();

        let (bus, mut dc, mut wr, _) = iface.release();
        assert_eq!(bus.writes(), vec![0xF800, 0x07E0, 0x001F]);
        dc.done();
        wr.done();
    }

    #[test]
    fn test_read_without_rd_is_unsupported() {
        let dc = PinMock::new(&[]);
        let wr = PinMock::new(&[]);
        let mut iface = ParallelInterface::new(MockPinGroup::new(), dc, wr, BusWidth::Bits8);

        let mut buffer = [0u8; 2];
        assert_eq!(
            iface.read_data(&mut buffer),
            Err(DisplayError::Unsupported)
        );

        let (_, mut dc, mut wr, _) = iface.release();
        dc.done();
        wr.done();
    }

    #[test]
    fn test_read_on_16bit_bus_is_unsupported() {
        let mut bus = MockPinGroup::new();
        bus.queue_reads(&[0xF800, 0xFC00, 0x0000]);
        let dc = PinMock::new(&[]);
        let wr = PinMock::new(&[]);
        let rd = PinMock::new(&[]);
        let mut iface = ParallelInterface::with_read(bus, dc, wr, rd, BusWidth::Bits16);

        let mut buffer = [0u8; 3];
        assert_eq!(
            iface.read_data(&mut buffer),
            Err(DisplayError::Unsupported)
        );
        assert_eq!(buffer, [0; 3]);

        let (bus, mut dc, mut wr, mut rd) = iface.release();
        assert!(!bus.is_input());
        dc.done();
        wr.done();
        rd.done();
    }

    #[test]
    fn test_read_pulses_rd() {
        let mut bus = MockPinGroup::new();
        bus.queue_reads(&[0x11, 0x22]);
        let dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
        let wr = PinMock::new(&[]);
        let rd = PinMock::new(&strobes(2));
        let mut iface = ParallelInterface::with_read(bus, dc, wr, rd, BusWidth::Bits8);

        let mut buffer = [0u8; 2];
        iface.read_data(&mut buffer).unwrap();
        assert_eq!(buffer, [0x11, 0x22]);

        let (bus, mut dc, mut wr, mut rd) = iface.release();
        assert!(!bus.is_input());
        dc.done();
        wr.done();
        rd.done();
    }
}
