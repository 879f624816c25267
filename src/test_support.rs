//! Fixture archives shared by the unit tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A trimmed-down browscap CSV: version rows, the header, defaults, four usable patterns and
/// a handful of rows that normalization rejects.
pub const BROWSCAP_CSV: &str = r#""GJK_Browscap_Version","GJK_Browscap_Version"
"6001008","Thu, 06 Jun 2024 09:00:00 +0000"
"PropertyName","MasterParent","LiteMode","Parent","Comment","Browser","Platform"
"DefaultProperties","true","true","","DefaultProperties","DefaultProperties","unknown"
"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36","false","true","Chrome 120.0","Chrome 120.0","Chrome","Win10"
"Mozilla/5.0 (Linux; Android 13*; Pixel 7*) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0*Mobile Safari/537.36","false","true","Chrome 120.0","Chrome 120.0","Chrome","Android"
"Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1","false","true","Safari 17.0","Safari 17.0","Safari","iOS"
"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15*) Gecko/20100101 Firefox/121.0","false","true","Firefox 121.0","Firefox 121.0","Firefox","macOS"
"Mozilla/5.0 (Windows NT 6.1; WOW64) Firefox/*","false","true","Firefox Generic","","Firefox","Win7"
"Opera/9.80 (Windows NT 6.1; U; en) Presto/2.2.15 Version/10.00","false","true","Opera 10.00","","Opera","Win7"
"*","false","true","DefaultProperties","","Default Browser","unknown"
"","false","true","","","",""
"Mozilla/5.0 (*) Gecko/20100101 Firefox/45.0","false","true","Firefox 45.0","","Firefox","unknown"
"#;

/// Number of records in [`BROWSCAP_CSV`].
pub const BROWSCAP_RECORDS: usize = 13;

/// Candidates produced from [`BROWSCAP_CSV`] with the default rules, in row order.
pub const BROWSCAP_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0Mobile Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15) Gecko/20100101 Firefox/121.0",
];

/// An entry to place in a fixture archive. Names ending in `/` become directories.
pub type Entry<'a> = (&'a str, &'a [u8]);

/// Build an in-memory ZIP archive holding `entries` in the given order.
pub fn archive_bytes(entries: &[Entry<'_>]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (name, contents) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(contents).unwrap();
        }
    }

    writer.finish().unwrap().into_inner()
}

/// Write a fixture archive named `name` into `dir` and return its path.
pub fn write_archive(dir: &Utf8Path, name: &str, entries: &[Entry<'_>]) -> Utf8PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, archive_bytes(entries)).unwrap();
    path
}

/// A temporary directory with a UTF-8 path.
pub fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}
