//! Property-based tests for command sequences.
//! Validity and End truncation must hold for ALL sequences, not just the
//! catalog ones.

#![allow(clippy::indexing_slicing, clippy::unwrap_used)]

use proptest::prelude::*;
use tft_driver::{Command, CommandExecutor, CommandKind, CommandSequence, DisplayError};

/// Executor that records primitive calls as commands, plus every entry
/// handed to `execute_command`.
#[derive(Default)]
struct Recorder {
    calls: Vec<Command>,
    dispatched: Vec<Command>,
}

impl CommandExecutor for Recorder {
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.calls.push(Command::Cmd(command));
        Ok(())
    }

    fn write_data(&mut self, data: u8) -> Result<(), DisplayError> {
        self.calls.push(Command::Data(data));
        Ok(())
    }

    fn write_data16(&mut self, word: u16) -> Result<(), DisplayError> {
        self.calls.push(Command::Data16(word));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls
            .push(Command::Delay(u16::try_from(ms).unwrap_or(u16::MAX)));
    }

    fn execute_command(&mut self, command: Command) -> Result<(), DisplayError> {
        self.dispatched.push(command);
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
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        any::<u8>().prop_map(Command::cmd),
        any::<u8>().prop_map(Command::data),
        any::<u16>().prop_map(Command::data16),
        (0u16..500).prop_map(Command::delay),
        Just(Command::end()),
    ]
}

proptest! {
    /// A sequence validates exactly when it holds a command byte and
    /// nothing was dropped.
    #[test]
    fn validity_matches_content(commands in prop::collection::vec(command(), 0..300)) {
        let seq: CommandSequence = commands.iter().copied().collect();
        let fits = commands.len() <= tft_driver::SEQUENCE_CAPACITY;
        let kept = &commands[..commands.len().min(tft_driver::SEQUENCE_CAPACITY)];
        let has_cmd = kept.iter().any(|c| c.kind() == CommandKind::CommandByte);

        prop_assert_eq!(seq.overflowed(), !fits);
        prop_assert_eq!(seq.validate(), fits && has_cmd);
        prop_assert_eq!(seq.as_slice(), kept);
    }

    /// Replay emits every primitive before the first End, in order, and
    /// nothing after it. The End entry itself is dispatched.
    #[test]
    fn replay_stops_at_first_end(commands in prop::collection::vec(command(), 0..150)) {
        let seq: CommandSequence = commands.iter().copied().collect();
        let mut exec = Recorder::default();
        exec.execute_sequence(&seq).unwrap();

        let expected: Vec<Command> = commands
            .iter()
            .copied()
            .take_while(|c| *c != Command::End)
            .collect();
        prop_assert_eq!(&exec.calls, &expected);

        match commands.iter().position(|c| *c == Command::End) {
            Some(k) => {
                prop_assert_eq!(exec.dispatched.len(), k + 1);
                prop_assert_eq!(exec.dispatched.last(), Some(&Command::End));
            }
            None => {
                prop_assert_eq!(exec.dispatched.len(), commands.len());
            }
        }
        prop_assert_eq!(&exec.dispatched[..expected.len()], expected.as_slice());
    }

    /// Entries after the first End are never dispatched.
    #[test]
    fn end_is_dispatched_once(prefix in prop::collection::vec(command(), 0..40),
                              suffix in prop::collection::vec(command(), 0..40)) {
        let prefix: Vec<Command> = prefix.into_iter().filter(|c| *c != Command::End).collect();
        let mut commands = prefix.clone();
        commands.push(Command::end());
        commands.extend(suffix);

        let mut exec = Recorder::default();
        exec.execute_sequence(&commands).unwrap();

        prop_assert_eq!(exec.dispatched.len(), prefix.len() + 1);
        prop_assert_eq!(
            exec.dispatched.iter().filter(|c| **c == Command::End).count(),
            1
        );
    }
}
