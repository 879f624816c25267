//! Fixture archives shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset of the helpers")]

use camino::{Utf8Path, Utf8PathBuf};
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const ARCHIVE_NAME: &str = "browscap-6001008.zip";

/// Browscap-shaped CSV with a version preamble, the header row and a mix of usable and
/// unusable patterns.
pub const FIXTURE_CSV: &str = r#""GJK_Browscap_Version","GJK_Browscap_Version"
"6001008","Thu, 06 Jun 2024 09:00:00 +0000"
"PropertyName","MasterParent","LiteMode","Parent","Comment","Browser","Platform"
"DefaultProperties","true","true","","DefaultProperties","DefaultProperties","unknown"
"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36","false","true","Chrome 120.0","","Chrome","Win10"
"Mozilla/5.0 (Linux; Android 14; SM-S918B*) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Mobile Safari/537.36","false","true","Chrome 121.0","","Chrome","Android"
"Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1","false","true","Safari 17.2","","Safari","iPadOS"
"Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0","false","true","Firefox 122.0","","Firefox","Linux"
"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0","false","true","Edge 120.0","","Edge","Win10"
"Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; *Trident/5.0*)","false","true","IE 9.0","","IE","Win7"
"Mozilla/5.0 (*Windows NT*)*Gecko*Firefox/*","false","true","Firefox Generic","","Firefox","Win"
"Googlebot/2.1 (+http://www.google.com/bot.html)","false","true","Googlebot","","Googlebot","unknown"
"*","false","true","DefaultProperties","","Default Browser","unknown"
"","false","true","","","",""
"#;

/// Candidates produced from [`FIXTURE_CSV`], in row order.
pub const FIXTURE_AGENTS: [&str; 6] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14; SM-S918B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Mobile Safari/537.36",
    "Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:122.0) Gecko/20100101 Firefox/122.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
    "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)",
];

/// Build an in-memory ZIP archive. Names ending in `/` become directories.
pub fn archive_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
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
pub fn write_archive(dir: &Utf8Path, name: &str, entries: &[(&str, &[u8])]) -> Utf8PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, archive_bytes(entries)).unwrap();
    path
}

/// Write the standard fixture archive into `dir`.
pub fn write_fixture(dir: &Utf8Path) -> Utf8PathBuf {
    write_archive(dir, ARCHIVE_NAME, &[("browscap/", "".as_bytes()), ("browscap/browscap.csv", FIXTURE_CSV.as_bytes())])
}

/// A temporary directory with a UTF-8 path.
pub fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

/// Assert the properties every generated User-Agent must have.
pub fn assert_well_formed(agent: &str) {
    assert!(agent.starts_with("Mozilla"), "{agent}");
    assert!(agent.chars().count() >= 30, "{agent}");
    assert!(!agent.contains('*') && !agent.contains('?'), "{agent}");

    for residue in ["**", "??", " /", "/ ", "()"] {
        assert!(!agent.contains(residue), "{agent} contains {residue:?}");
    }
    assert!(!agent.ends_with('/'), "{agent}");
}
