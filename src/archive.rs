//! Access to the zip archive that backs the virtual file system.

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tracing::{debug, info};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::ArchiveError;
use crate::vfs::{ArchiveFS, RightsTable, TreeBuilder};

/// Side entry with `name rights` pairs. It is not part of the file system.
pub const RIGHTS_ENTRY: &str = "access_rights.txt";

/// A zip archive opened for reading.
pub struct Archive<R = File> {
    zip: ZipArchive<R>,
}

impl Archive<File> {
    /// Opens the archive at host `path`.
    /// Any failure to open or parse the container is reported as `Unreadable`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let path = path.as_ref();
        let unreadable = |source| ArchiveError::Unreadable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(|e| unreadable(ZipError::Io(e)))?;
        let zip = ZipArchive::new(file).map_err(unreadable)?;
        info!(path = %path.display(), entries = zip.len(), "opened archive");
        Ok(Self { zip })
    }
}

impl<R: Read + Seek> Archive<R> {
    pub fn from_reader(reader: R) -> Result<Self, ArchiveError> {
        Ok(Self {
            zip: ZipArchive::new(reader)?,
        })
    }

    /// Entry names in archive order, without the rights entry.
    pub fn entry_names(&self) -> Vec<String> {
        self.zip
            .file_names()
            .filter(|name| *name != RIGHTS_ENTRY)
            .map(str::to_string)
            .collect()
    }

    /// Reads the rights table. `None` if the archive has no rights entry.
    pub fn rights_table(&mut self) -> Result<Option<RightsTable>, ArchiveError> {
        match self.read_entry(RIGHTS_ENTRY) {
            Ok(bytes) => Ok(Some(RightsTable::parse(&String::from_utf8_lossy(&bytes)))),
            Err(ArchiveError::MissingEntry(_)) => {
                debug!("archive has no {RIGHTS_ENTRY}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Reads the whole content of entry `key`.
    pub fn read_entry(&mut self, key: &str) -> Result<Vec<u8>, ArchiveError> {
        let mut file = match self.zip.by_name(key) {
            Ok(file) => file,
            Err(ZipError::FileNotFound) => return Err(ArchiveError::MissingEntry(key.to_string())),
            Err(e) => return Err(e.into()),
        };
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Builds the directory tree from the archive listing (and rights table, if any).
    pub fn load_fs(&mut self) -> Result<ArchiveFS, ArchiveError> {
        let mut builder = TreeBuilder::new();
        if let Some(table) = self.rights_table()? {
            builder = builder.with_rights(table);
        }
        for name in self.entry_names() {
            builder.add(&name);
        }
        if !builder.conflicts().is_empty() {
            info!(count = builder.conflicts().len(), "some archive entries were ignored");
        }
        let tree = builder.build();
        info!(nodes = tree.len(), "built file system tree");
        Ok(ArchiveFS::new(tree))
    }
}
