use std::io::Write;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Writes the sample archive: `test.txt`, empty `subdir/` and a rights table.
pub fn write_sample_zip(dir: &Path) -> PathBuf {
    let path = dir.join("test_files.zip");
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer.start_file("access_rights.txt", options).unwrap();
    writer.write_all(b"test.txt r\nsubdir rw\n").unwrap();
    writer.start_file("test.txt", options).unwrap();
    writer.write_all(b"Hello World!\n").unwrap();
    writer.add_directory("subdir", options).unwrap();
    writer.start_file("docs/guide/intro.md", options).unwrap();
    writer.write_all(b"first line\nsecond line\n").unwrap();
    writer.finish().unwrap();

    path
}

/// Writes an INI config pointing at `archive`.
pub fn write_config(dir: &Path, archive: &Path) -> PathBuf {
    let path = dir.join("config.ini");
    std::fs::write(
        &path,
        format!(
            "[DEFAULT]\nusername = testuser\nhostname = testhost\nfilesystem_path = {}\n",
            archive.display()
        ),
    )
    .unwrap();
    path
}
