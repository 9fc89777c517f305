//! On-disk corpus fixture shared by the integration tests.
#![allow(dead_code)]

use image::{GrayImage, Luma};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const LLOCS_00003: &str = "e\t60.7\t0\nr\t77.8\t0\nl\t91.8\t0\ni\t107.3\t0\nn\t121.3\t0\n.\t143.1\t0\n";
pub const LLOCS_00004: &str = "e\t60.7\t0.2\nr\t77.8\t0.9\nl\t91.8\t4e-06\ni\t107.3\t0.1\nn\t121.3\t0.1\n.\t143.1\t0.1\n";

/// A temporary corpus laid out like:
///
/// ```text
/// lines/00001.{gt.txt,txt,llocs,nrm.png}
/// lines/00002.{gt.txt,txt,llocs,bin.png,png,nrm.png}
/// lines/00003.{gt.txt,txt,llocs,dew.png,png}
/// lines/00004.{gt.txt,txt,llocs,png}
/// lines/00006.gt.txt/  00006.png/   (directories, never files)
/// lines/00007.{txt,png}             (png is not a valid image)
/// lines/sub/00008.{gt.txt,bin.png}
/// ```
pub struct Corpus {
    _dir: TempDir,
    pub lines: PathBuf,
}

impl Corpus {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let lines = dir.path().join("lines");
        fs::create_dir_all(lines.join("sub")).unwrap();

        write(&lines, "00001.gt.txt", "Fritſch, ein unverheyratheter Mann von hoͤchſt ein—\n");
        write(&lines, "00001.txt", "Fritſch, ein unverheyratheter Mann von hochſt ein⸗\n");
        write(&lines, "00001.llocs", "F\t10\nr\t20\n");
        png(&lines, "00001.nrm.png");

        write(&lines, "00002.gt.txt", "nr in e ein r i ch.\n");
        write(&lines, "00002.txt", "nr in e ein r i ch.\n");
        write(&lines, "00002.llocs", "n\t10\t0.5\n \t12\t0.5\nr\t20\t0.5\n");
        png(&lines, "00002.bin.png");
        png(&lines, "00002.png");
        png(&lines, "00002.nrm.png");

        write(&lines, "00003.gt.txt", "erlin.\n");
        write(&lines, "00003.txt", "erlin.\n");
        write(&lines, "00003.llocs", LLOCS_00003);
        png(&lines, "00003.dew.png");
        png(&lines, "00003.png");

        write(&lines, "00004.gt.txt", "erlin.\n");
        write(&lines, "00004.txt", "erlin.\n");
        write(&lines, "00004.llocs", LLOCS_00004);
        png(&lines, "00004.png");

        fs::create_dir(lines.join("00006.gt.txt")).unwrap();
        fs::create_dir(lines.join("00006.png")).unwrap();

        write(&lines, "00007.txt", "only text\n");
        write(&lines, "00007.png", "not a png");

        write(&lines.join("sub"), "00008.gt.txt", "nested\n");
        png(&lines.join("sub"), "00008.bin.png");

        Self { _dir: dir, lines }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.lines.join(name)
    }
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn png(dir: &Path, name: &str) {
    GrayImage::from_pixel(8, 2, Luma([0u8])).save(dir.join(name)).unwrap();
}
