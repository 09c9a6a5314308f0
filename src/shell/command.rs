use thiserror::Error;

const CD_USAGE: &str = "cd <path>";
const LS_USAGE: &str = "ls [path]";
const WHOAMI_USAGE: &str = "whoami";
const REV_USAGE: &str = "rev <text>";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Cd(&'a str),
    Ls(Option<&'a str>),
    Whoami,
    /// Everything after `rev `, inner spacing kept.
    Rev(&'a str),
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl<'a> Command<'a> {
    /// Parses one line of input. A blank line gives `Ok(None)`.
    pub fn parse(line: &'a str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&'a str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("cd", &[path]) => Command::Cd(path),
            ("cd", _) => return Err(CommandError::Usage(CD_USAGE)),
            ("ls", []) => Command::Ls(None),
            ("ls", &[path]) => Command::Ls(Some(path)),
            ("ls", _) => return Err(CommandError::Usage(LS_USAGE)),
            ("whoami", []) => Command::Whoami,
            ("whoami", _) => return Err(CommandError::Usage(WHOAMI_USAGE)),
            ("rev", []) => return Err(CommandError::Usage(REV_USAGE)),
            ("rev", _) => {
                let rest = &line[name.len()..];
                Command::Rev(rest.strip_prefix(char::is_whitespace).unwrap_or(rest))
            }
            ("exit", _) => Command::Exit,
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}
