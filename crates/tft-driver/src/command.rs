//! Command model
//!
//! A [`Command`] is one step of a controller conversation: a command byte,
//! a data byte or word, a settle delay, or an end marker. A
//! [`CommandSequence`] is an ordered, fixed-capacity list of them built with
//! infallible builders and checked with [`CommandSequence::validate`] before
//! replay.

use heapless::Vec;

/// Maximum number of entries in one [`CommandSequence`].
///
/// The largest catalog sequence (ST7735 init with both gamma tables) needs
/// fewer than 100 entries.
pub const SEQUENCE_CAPACITY: usize = 192;

/// Kind of a [`Command`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandKind {
    /// Command byte (DC low)
    CommandByte,
    /// Data byte (DC high)
    DataByte,
    /// 16-bit data word (DC high)
    DataWord,
    /// Blocking delay in milliseconds
    Delay,
    /// End of sequence
    End,
}

/// One step of a controller conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Command byte
    Cmd(u8),
    /// Data byte
    Data(u8),
    /// 16-bit data word
    Data16(u16),
    /// Delay in milliseconds
    Delay(u16),
    /// Stop replay here
    End,
}

impl Command {
    /// Command byte.
    pub const fn cmd(value: u8) -> Self {
        Command::Cmd(value)
    }

    /// Data byte.
    pub const fn data(value: u8) -> Self {
        Command::Data(value)
    }

    /// 16-bit data word.
    pub const fn data16(value: u16) -> Self {
        Command::Data16(value)
    }

    /// Delay of `ms` milliseconds.
    pub const fn delay(ms: u16) -> Self {
        Command::Delay(ms)
    }

    /// End marker.
    pub const fn end() -> Self {
        Command::End
    }

    /// Kind of this command.
    pub const fn kind(&self) -> CommandKind {
        match self {
            Command::Cmd(_) => CommandKind::CommandByte,
            Command::Data(_) => CommandKind::DataByte,
            Command::Data16(_) => CommandKind::DataWord,
            Command::Delay(_) => CommandKind::Delay,
            Command::End => CommandKind::End,
        }
    }

    /// Payload widened to 16 bits; zero for [`Command::End`].
    pub const fn value(&self) -> u16 {
        match *self {
            Command::Cmd(v) | Command::Data(v) => v as u16,
            Command::Data16(v) | Command::Delay(v) => v,
            Command::End => 0,
        }
    }
}

/// Ordered list of commands; insertion order is execution order.
///
/// Builders never fail. An append past [`SEQUENCE_CAPACITY`] is dropped and
/// marks the sequence as overflowed, which makes [`validate`](Self::validate)
/// return `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSequence {
    commands: Vec<Command, SEQUENCE_CAPACITY>,
    overflowed: bool,
}

impl CommandSequence {
    /// Empty sequence.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            overflowed: false,
        }
    }

    /// Append any command.
    pub fn push(&mut self, command: Command) -> &mut Self {
        if self.commands.push(command).is_err() {
            self.overflowed = true;
        }
        self
    }

    /// Append a command byte.
    pub fn command(&mut self, value: u8) -> &mut Self {
        self.push(Command::Cmd(value))
    }

    /// Append a data byte.
    pub fn data(&mut self, value: u8) -> &mut Self {
        self.push(Command::Data(value))
    }

    /// Append a 16-bit data word.
    pub fn data16(&mut self, value: u16) -> &mut Self {
        self.push(Command::Data16(value))
    }

    /// Append a delay.
    pub fn delay(&mut self, ms: u16) -> &mut Self {
        self.push(Command::Delay(ms))
    }

    /// Append a run of data bytes.
    pub fn data_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        for byte in bytes {
            self.data(*byte);
        }
        self
    }

    /// Append a command byte followed by its data bytes.
    pub fn command_with_data(&mut self, command: u8, bytes: &[u8]) -> &mut Self {
        self.command(command).data_bytes(bytes)
    }

    /// Append an end marker.
    pub fn end(&mut self) -> &mut Self {
        self.push(Command::End)
    }

    /// Append every entry of `other`.
    pub fn append(&mut self, other: &CommandSequence) -> &mut Self {
        for command in other.iter() {
            self.push(*command);
        }
        if other.overflowed {
            self.overflowed = true;
        }
        self
    }

    /// Remove every entry and clear the overflow mark.
    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self.overflowed = false;
        self
    }

    /// Whether the sequence may be replayed: at least one command byte and
    /// no dropped appends.
    pub fn validate(&self) -> bool {
        !self.overflowed
            && self
                .commands
                .iter()
                .any(|c| c.kind() == CommandKind::CommandByte)
    }

    /// Whether an append was dropped for lack of capacity.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> core::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl core::ops::Deref for CommandSequence {
    type Target = [Command];

    fn deref(&self) -> &[Command] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a CommandSequence {
    type Item = &'a Command;
    type IntoIter = core::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Command> for CommandSequence {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        let mut sequence = Self::new();
        for command in iter {
            sequence.push(command);
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]
    use super::*;

    #[test]
    fn test_kind_and_value() {
        assert_eq!(Command::cmd(0x2A).kind(), CommandKind::CommandByte);
        assert_eq!(Command::cmd(0x2A).value(), 0x2A);
        assert_eq!(Command::data16(0xF800).value(), 0xF800);
        assert_eq!(Command::delay(150).kind(), CommandKind::Delay);
        assert_eq!(Command::end().value(), 0);
    }

    #[test]
    fn test_builders_keep_insertion_order() {
        let mut seq = CommandSequence::new();
        seq.command_with_data(0x36, &[0x48]).delay(10).data16(0x1234).end();

        assert_eq!(
            seq.as_slice(),
            &[
                Command::Cmd(0x36),
                Command::Data(0x48),
                Command::Delay(10),
                Command::Data16(0x1234),
                Command::End,
            ]
        );
    }

    #[test]
    fn test_validate_requires_a_command_byte() {
        let mut seq = CommandSequence::new();
        assert!(!seq.validate(), "empty sequence must not validate");

        seq.delay(100).data(0x01);
        assert!(!seq.validate(), "no command byte");

        seq.command(0x29);
        assert!(seq.validate());

        seq.clear();
        assert!(seq.is_empty());
        assert!(!seq.validate());
    }

    #[test]
    fn test_overflow_invalidates() {
        let mut seq = CommandSequence::new();
        seq.command(0x2C);
        for _ in 0..SEQUENCE_CAPACITY {
            seq.data(0x00);
        }
        assert_eq!(seq.len(), SEQUENCE_CAPACITY);
        assert!(seq.overflowed());
        assert!(!seq.validate());

        seq.clear();
        seq.command(0x2C);
        assert!(seq.validate());
    }

    #[test]
    fn test_append_carries_entries_and_overflow() {
        let mut head = CommandSequence::new();
        head.command(0x11).delay(120);
        let mut tail = CommandSequence::new();
        tail.command(0x29);

        head.append(&tail);
        assert_eq!(head.len(), 3);
        assert_eq!(head[2], Command::Cmd(0x29));

        let full: CommandSequence = (0..=SEQUENCE_CAPACITY).map(|_| Command::cmd(0)).collect();
        assert!(full.overflowed());
        head.append(&full);
        assert!(!head.validate());
    }
}
