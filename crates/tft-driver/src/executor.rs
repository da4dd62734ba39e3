//! Command replay
//!
//! [`CommandExecutor`] is the capability every driver offers: four bus
//! primitives plus default dispatch of single commands and whole sequences.

use platform::DisplayError;

use crate::Command;

/// Something that can replay [`Command`]s.
pub trait CommandExecutor {
    /// Send one command byte.
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send one data byte.
    fn write_data(&mut self, data: u8) -> Result<(), DisplayError>;

    /// Send one 16-bit data word.
    ///
    /// Chips that take wider pixels on the current bus expand the word
    /// before it reaches the wire.
    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError>;

    /// Block for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u32);

    /// Dispatch one command to the matching primitive. [`Command::End`] is a
    /// no-op.
    fn execute_command(&mut self, command: Command) -> Result<(), DisplayError> {
        match command {
            Command::Cmd(c) => self.write_command(c),
            Command::Data(d) => self.write_data(d),
            Command::Data16(w) => self.write_data16(w),
            Command::Delay(ms) => {
                self.delay_ms(u32::from(ms));
                Ok(())
            }
            Command::End => Ok(()),
        }
    }

    /// Replay `commands` in order, stopping right after the first
    /// [`Command::End`].
    fn execute_sequence(&mut self, commands: &[Command]) -> Result<(), DisplayError> {
        for command in commands {
            self.execute_command(*command)?;
            if *command == Command::End {
                break;
            }
        }
        Ok(())
    }
}
