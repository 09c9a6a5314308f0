//! A tiny interactive shell over [`ArchiveFS`].
//!
//! Supported commands: `cd <path>`, `ls [path]`, `whoami`, `rev <text>`, `exit`.

mod command;

use std::fs::File;
use std::io::{self, BufRead, Read, Seek, Write};

use tracing::{debug, warn};

pub use command::{Command, CommandError};

use crate::archive::Archive;
use crate::config::ShellConfig;
use crate::core::FsBackend;
use crate::error::ArchiveError;
use crate::vfs::{ArchiveFS, Node};

/// Printed when the shell stops.
pub const FAREWELL: &str = "Bye!";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R = File> {
    config: ShellConfig,
    fs: ArchiveFS,
    archive: Option<Archive<R>>,
}

impl Shell {
    /// Creates a shell without an archive: `rev` only reverses text.
    pub fn new(config: ShellConfig, fs: ArchiveFS) -> Self {
        Self {
            config,
            fs,
            archive: None,
        }
    }

    /// Opens the archive named by `config` and builds the file system from it.
    pub fn open(config: ShellConfig) -> Result<Self, ArchiveError> {
        let mut archive = Archive::open(&config.filesystem_path)?;
        let fs = archive.load_fs()?;
        Ok(Self::new(config, fs).with_archive(archive))
    }
}

impl<R> Shell<R> {
    /// Attaches an archive used by `rev` to read file contents.
    pub fn with_archive<S: Read + Seek>(self, archive: Archive<S>) -> Shell<S> {
        Shell {
            config: self.config,
            fs: self.fs,
            archive: Some(archive),
        }
    }

    pub fn fs(&self) -> &ArchiveFS {
        &self.fs
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}@{}:{}$ ",
            self.config.username,
            self.config.hostname,
            self.fs.cwd()
        )
    }

    pub fn whoami(&self) -> &str {
        &self.config.username
    }
}

impl<R: Read + Seek> Shell<R> {
    /// Reverses `text`.
    ///
    /// If `text` names a file of the file system and an archive is attached, the file
    /// is read from the archive instead and every line of it is reversed.
    pub fn rev(&mut self, text: &str) -> Result<String, ArchiveError> {
        let entry = self
            .fs
            .resolve(text)
            .and_then(Node::archive_entry)
            .map(str::to_string);
        match (entry, self.archive.as_mut()) {
            (Some(entry), Some(archive)) => {
                let content = archive.read_entry(&entry)?;
                Ok(String::from_utf8_lossy(&content)
                    .lines()
                    .map(reverse)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            _ => Ok(reverse(text)),
        }
    }

    /// Executes one command, writing its output to `out`.
    pub fn execute<W: Write>(&mut self, command: Command<'_>, out: &mut W) -> io::Result<Flow> {
        debug!(?command, cwd = self.fs.cwd(), "executing command");
        match command {
            Command::Cd(path) => {
                if let Err(e) = self.fs.cd(path) {
                    writeln!(out, "cd: {e}")?;
                }
            }
            Command::Ls(path) => match self.fs.ls(path.unwrap_or(".")) {
                Ok(children) => {
                    for name in children.keys() {
                        writeln!(out, "{name}")?;
                    }
                }
                Err(e) => writeln!(out, "ls: {e}")?,
            },
            Command::Whoami => writeln!(out, "{}", self.whoami())?,
            Command::Rev(text) => match self.rev(text) {
                Ok(reversed) => writeln!(out, "{reversed}")?,
                Err(e) => {
                    warn!(error = %e, "rev failed");
                    writeln!(out, "rev: {e}")?
                }
            },
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Reads commands from `input` until `exit` or end of input.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, mut out: W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.prompt())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if self.execute(command, &mut out)? == Flow::Exit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        writeln!(out, "{FAREWELL}")?;
        out.flush()
    }
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}
