mod common;

use common::Corpus;
use ocropy_corpus::paths::{
    gt_from_stripped, image_from_stripped, is_file, llocs_from_stripped, path_for, strip,
    txt_from_stripped, ArtifactSet, PathResolver,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn test_image_priority() {
    let corpus = Corpus::new();
    let cases = [
        ("00001", "00001.nrm.png"),
        ("00002", "00002.bin.png"),
        ("00003", "00003.dew.png"),
        ("00004", "00004.png"),
    ];

    for (base, want) in cases {
        let (path, found) = image_from_stripped(corpus.path(base));
        assert!(found, "no image for {}", base);
        assert_eq!(path, corpus.path(want));
    }
}

#[test]
fn test_image_missing_or_directory() {
    let corpus = Corpus::new();
    for base in ["00005", "00006"] {
        assert_eq!(image_from_stripped(corpus.path(base)), (PathBuf::new(), false));
    }
}

#[test]
fn test_image_from_unstripped_path() {
    let corpus = Corpus::new();
    let (path, found) = image_from_stripped(corpus.path("00002.gt.txt"));
    assert!(found);
    assert_eq!(path, corpus.path("00002.bin.png"));
}

#[test]
fn test_custom_image_priority() {
    let corpus = Corpus::new();
    let resolver = PathResolver::new().with_image_extensions([".nrm.png", ".png"]);

    assert_eq!(resolver.image(corpus.path("00002")), (corpus.path("00002.nrm.png"), true));
    assert_eq!(resolver.image(corpus.path("00003")), (corpus.path("00003.png"), true));
}

#[test]
fn test_checked_resolution() {
    let corpus = Corpus::new();
    type Resolve = fn(PathBuf, bool) -> (PathBuf, bool);
    let kinds: [(&str, Resolve); 3] = [
        (".gt.txt", |p, c| gt_from_stripped(p, c)),
        (".txt", |p, c| txt_from_stripped(p, c)),
        (".llocs", |p, c| llocs_from_stripped(p, c)),
    ];

    for (ext, resolve) in kinds {
        for base in ["00001", "00002", "00003", "00004"] {
            let want = corpus.path(&format!("{}{}", base, ext));
            assert_eq!(resolve(corpus.path(base), true), (want.clone(), true));
            // Without a check the flag is always false
            assert_eq!(resolve(corpus.path(base), false), (want, false));
        }
        for base in ["00005", "00006"] {
            let want = corpus.path(&format!("{}{}", base, ext));
            assert_eq!(resolve(corpus.path(base), true), (want.clone(), false));
            assert_eq!(resolve(corpus.path(base), false), (want, false));
        }
    }
}

#[test]
fn test_split_api() {
    let corpus = Corpus::new();
    let gt = path_for(corpus.path("00001.nrm.png"), ".gt.txt");
    assert_eq!(gt, corpus.path("00001.gt.txt"));
    assert!(is_file(&gt));
    assert!(!is_file(corpus.path("00006.gt.txt")));
    assert!(!is_file(corpus.path("00005.gt.txt")));
}

#[test]
fn test_resolve_partial_set() {
    let corpus = Corpus::new();
    let set = PathResolver::new().resolve(corpus.path("sub/00008.bin.png"));
    assert_eq!(
        set,
        ArtifactSet {
            gt: corpus.path("sub/00008.gt.txt"),
            image: corpus.path("sub/00008.bin.png"),
            txt: PathBuf::new(),
            llocs: PathBuf::new(),
        }
    );
}

#[test]
fn test_strip_corpus_paths() {
    let corpus = Corpus::new();
    assert_eq!(strip(corpus.path("00001.gt.txt")), corpus.path("00001"));
    assert_eq!(strip(corpus.path("00001")), corpus.path("00001"));
}
