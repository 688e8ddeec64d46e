//! Line commands read from stdin

use crate::error::{CliError, Result};
use cadence_playback::{ShuffleScope, TrackId, UserIntent};
use std::str::FromStr;

pub const HELP: &str = "\
commands:
  play | pause | toggle        transport
  next | prev                  navigation
  seek <0-100>                 jump to a position in the track
  repeat | album-repeat        cycle repeat mode
  shuffle | album-shuffle      shuffle playlist or album
  album <name> | album-clear   scope playback to an album
  select <id>                  play a catalog track
  volume <0-100> | mute        output level
  status | list | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forwarded to the controller as-is
    Intent(UserIntent),
    Album(String),
    AlbumClear,
    Status,
    List,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "play" => Command::Intent(UserIntent::Play),
            "pause" => Command::Intent(UserIntent::Pause),
            "toggle" | "space" => Command::Intent(UserIntent::TogglePlayback),
            "next" | "n" => Command::Intent(UserIntent::Next),
            "prev" | "previous" | "p" => Command::Intent(UserIntent::Previous),
            "seek" => Command::Intent(UserIntent::Seek(parse_arg("seek", rest)?)),
            "repeat" => Command::Intent(UserIntent::ToggleRepeat),
            "album-repeat" => Command::Intent(UserIntent::ToggleAlbumRepeat),
            "shuffle" => Command::Intent(UserIntent::Shuffle(ShuffleScope::Playlist)),
            "album-shuffle" => Command::Intent(UserIntent::Shuffle(ShuffleScope::Album)),
            "volume" | "vol" => Command::Intent(UserIntent::SetVolume(parse_volume(rest)?)),
            "mute" => Command::Intent(UserIntent::ToggleMute),
            "select" => Command::Intent(UserIntent::SelectTrack(TrackId(parse_arg(
                "select", rest,
            )?))),
            "album" if rest.is_empty() => {
                return Err(CliError::InvalidArgument {
                    command: "album",
                    reason: "missing album name".to_string(),
                })
            }
            "album" => Command::Album(rest.to_string()),
            "album-clear" => Command::AlbumClear,
            "status" | "s" => Command::Status,
            "list" | "ls" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            // Empty lines still count as a gesture
            "" => Command::Intent(UserIntent::Gesture),
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

fn parse_arg<T: FromStr>(command: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| CliError::InvalidArgument {
        command,
        reason: format!("cannot parse {:?}", value),
    })
}

fn parse_volume(value: &str) -> Result<u8> {
    let level: u8 = parse_arg("volume", value)?;
    if level > 100 {
        return Err(CliError::InvalidArgument {
            command: "volume",
            reason: format!("{} is above 100", level),
        });
    }
    Ok(level)
}
