use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use tracing::warn;

use crate::{
    error::{DungeonError, Result},
    session::navigation::MoveCommand,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(MoveCommand),
    Reset,
    Map,
    Dump,
    Quit,
}

impl FromStr for Command {
    type Err = DungeonError;

    fn from_str(line: &str) -> Result<Self> {
        match line.trim() {
            "reset" => Ok(Command::Reset),
            "map" => Ok(Command::Map),
            "dump" => Ok(Command::Dump),
            "quit" => Ok(Command::Quit),
            other => other.parse::<MoveCommand>().map(Command::Move),
        }
    }
}

/// A canned play-through, one command per line.
pub struct ScriptedInput {
    script_commands: Vec<Command>,
    current_command_index: usize,
}

impl ScriptedInput {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut script_commands = Vec::new();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }
            match trimmed_line.parse::<Command>() {
                Ok(command) => script_commands.push(command),
                Err(err) => warn!(line = line_no + 1, %err, "skipping script line"),
            }
        }

        Ok(Self {
            script_commands,
            current_command_index: 0,
        })
    }

    pub fn next_command(&mut self) -> Option<Command> {
        let command = self.script_commands.get(self.current_command_index).copied();
        if command.is_some() {
            self.current_command_index += 1;
        }
        command
    }
}
