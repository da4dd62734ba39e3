//! Mock implementations for testing
//!
//! [`MockBus`] is a [`DisplayInterface`] that records every transfer into an
//! ordered event log. The reset pin and delay handed out by the bus write to
//! the same log, so tests can assert on the exact interleaving of reset
//! pulses, waits, commands and data.

#![cfg(any(test, feature = "std"))]

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::collections::VecDeque;
use std::rc::Rc;
use std::vec::Vec;

use crate::*;

/// One recorded interaction with the mock bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// Command byte (DC low)
    Command(u8),
    /// Data byte (DC high)
    Data(u8),
    /// 16-bit data word (DC high)
    Data16(u16),
    /// Millisecond delay
    Delay(u32),
    /// Sub-millisecond delay in nanoseconds
    DelayNs(u32),
    /// Reset line driven
    Reset(PinState),
    /// Read of the given number of bytes
    Read(usize),
}

#[derive(Debug, Default)]
struct BusState {
    events: Vec<BusEvent>,
    reads: VecDeque<u8>,
    fail_writes: bool,
}

/// Recording display interface.
#[derive(Debug, Clone)]
pub struct MockBus {
    state: Rc<RefCell<BusState>>,
    width: BusWidth,
}

impl MockBus {
    /// New byte-wide mock bus with an empty log.
    pub fn new() -> Self {
        Self::with_width(BusWidth::Bits8)
    }

    /// New mock bus reporting the given data path width.
    pub fn with_width(width: BusWidth) -> Self {
        Self {
            state: Rc::new(RefCell::new(BusState::default())),
            width,
        }
    }

    /// Delay source that records into this bus's log.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            state: Rc::clone(&self.state),
        }
    }

    /// Reset pin that records into this bus's log.
    pub fn reset_pin(&self) -> MockResetPin {
        MockResetPin {
            state: Rc::clone(&self.state),
        }
    }

    /// Snapshot of the event log.
    pub fn events(&self) -> Vec<BusEvent> {
        self.state.borrow().events.clone()
    }

    /// Command bytes in the order they were sent.
    pub fn commands(&self) -> Vec<u8> {
        self.state
            .borrow()
            .events
            .iter()
            .filter_map(|event| match event {
                BusEvent::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Data bytes in order, with 16-bit words split high byte first.
    pub fn data_bytes(&self) -> Vec<u8> {
        self.state
            .borrow()
            .events
            .iter()
            .flat_map(|event| match event {
                BusEvent::Data(b) => vec![*b],
                BusEvent::Data16(w) => w.to_be_bytes().to_vec(),
                _ => vec![],
            })
            .collect()
    }

    /// Forget all recorded events.
    pub fn clear(&self) {
        self.state.borrow_mut().events.clear();
    }

    /// Bytes returned by subsequent reads, in order. Reads past the queue
    /// return zero.
    pub fn queue_read(&self, bytes: &[u8]) {
        self.state.borrow_mut().reads.extend(bytes.iter().copied());
    }

    /// Make every following write fail with [`DisplayError::Communication`].
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    fn record(&self, event: BusEvent) -> Result<(), DisplayError> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(DisplayError::Communication);
        }
        state.events.push(event);
        Ok(())
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayInterface for MockBus {
    fn bus_width(&self) -> BusWidth {
        self.width
    }

    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.record(BusEvent::Command(command))
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        for byte in data {
            self.record(BusEvent::Data(*byte))?;
        }
        Ok(())
    }

    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        self.record(BusEvent::Data16(word))
    }

    fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), DisplayError> {
        self.record(BusEvent::Read(buffer.len()))?;
        let mut state = self.state.borrow_mut();
        for slot in buffer.iter_mut() {
            *slot = state.reads.pop_front().unwrap_or(0);
        }
        Ok(())
    }
}

/// Delay that records instead of sleeping.
#[derive(Debug, Clone)]
pub struct MockDelay {
    state: Rc<RefCell<BusState>>,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().events.push(BusEvent::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.state.borrow_mut().events.push(BusEvent::Delay(ms));
    }
}

/// Reset pin that records its level changes.
#[derive(Debug, Clone)]
pub struct MockResetPin {
    state: Rc<RefCell<BusState>>,
}

impl embedded_hal::digital::ErrorType for MockResetPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for MockResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .events
            .push(BusEvent::Reset(PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .events
            .push(BusEvent::Reset(PinState::High));
        Ok(())
    }
}

/// Parallel data-line group that records written values.
#[derive(Debug, Default)]
pub struct MockPinGroup {
    writes: Vec<u32>,
    reads: RefCell<VecDeque<u32>>,
    input: Cell<bool>,
}

impl MockPinGroup {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values written so far.
    pub fn writes(&self) -> Vec<u32> {
        self.writes.clone()
    }

    /// Values returned by subsequent reads.
    pub fn queue_reads(&mut self, values: &[u32]) {
        self.reads.borrow_mut().extend(values.iter().copied());
    }

    /// Whether the group is currently switched to inputs.
    pub fn is_input(&self) -> bool {
        self.input.get()
    }
}

impl PinGroup for MockPinGroup {
    type Error = Infallible;

    fn read(&self) -> Result<u32, Self::Error> {
        Ok(self.reads.borrow_mut().pop_front().unwrap_or(0))
    }

    fn write(&mut self, value: u32) -> Result<(), Self::Error> {
        self.writes.push(value);
        Ok(())
    }

    fn set_input(&mut self) -> Result<(), Self::Error> {
        self.input.set(true);
        Ok(())
    }

    fn set_output(&mut self) -> Result<(), Self::Error> {
        self.input.set(false);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;
    use embedded_hal::digital::OutputPin;

    #[test]
    fn test_shared_log_preserves_order() {
        let mut bus = MockBus::new();
        let mut delay = bus.delay();
        let mut rst = bus.reset_pin();

        rst.set_low().unwrap();
        delay.delay_ms(10);
        rst.set_high().unwrap();
        bus.write_command(0x01).unwrap();
        bus.write_data(&[0xAA]).unwrap();
        bus.write_data16(0x1234).unwrap();

        assert_eq!(
            bus.events(),
            vec![
                BusEvent::Reset(PinState::Low),
                BusEvent::Delay(10),
                BusEvent::Reset(PinState::High),
                BusEvent::Command(0x01),
                BusEvent::Data(0xAA),
                BusEvent::Data16(0x1234),
            ]
        );
        assert_eq!(bus.commands(), vec![0x01]);
        assert_eq!(bus.data_bytes(), vec![0xAA, 0x12, 0x34]);
    }

    #[test]
    fn test_queued_reads() {
        let mut bus = MockBus::new();
        bus.queue_read(&[1, 2]);
        let mut buffer = [0xFFu8; 3];
        bus.read_data(&mut buffer).unwrap();
        assert_eq!(buffer, [1, 2, 0]);
        assert_eq!(bus.events(), vec![BusEvent::Read(3)]);
    }

    #[test]
    fn test_failing_writes() {
        let mut bus = MockBus::new();
        bus.fail_writes(true);
        assert_eq!(bus.write_command(0x29), Err(DisplayError::Communication));
        assert!(bus.events().is_empty());
    }
}
