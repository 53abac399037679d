//! End-to-end tests loading language resources from a directory

use compsplit_core::{Config, Error, ForceSplit, Segmentation, Splitter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const GERMAN_LEXICON: &str = "\
kranken\t50
haus\t80
arbeit\t40
zeit\t90
aber\t900
wach\t10
stube\t10
wachs\t10
tube\t10
";

fn german_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "de.lexicon.tsv", GERMAN_LEXICON);
    write(dir.path(), "de.stopwords.txt", "aber\n");
    write(dir.path(), "de.suffixes.txt", "ung\nlich\n");
    write(dir.path(), "de.prefixes.txt", "ver\n");
    dir
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn german(dir: &TempDir) -> Splitter {
    Splitter::from_dir(dir.path(), Config::default()).unwrap()
}

#[test]
fn test_simple_compound() {
    let dir = german_dir();
    let splitter = german(&dir);

    let best = splitter.split("Krankenhaus");
    assert_eq!(best, Segmentation::new(["kranken", "haus"]));
    assert_eq!(splitter.format(&best), "kranken+haus");
}

#[test]
fn test_binding_morpheme_is_marked() {
    let dir = german_dir();
    let splitter = german(&dir);
    assert_eq!(splitter.split_formatted("Arbeitszeit"), "arbeit|s+zeit");
}

#[test]
fn test_unknown_word_is_returned_lowercased() {
    let dir = german_dir();
    let splitter = german(&dir);
    assert_eq!(splitter.split_formatted("Xylophon"), "xylophon");
}

#[test]
fn test_atomic_word_is_idempotent() {
    let dir = german_dir();
    let splitter = german(&dir);

    let first = splitter.split("haus");
    assert_eq!(first.parts(), ["haus"]);
    assert_eq!(splitter.split(&first.joined()), first);
}

#[test]
fn test_splitting_is_deterministic() {
    let dir = german_dir();
    let splitter = german(&dir);
    let words = ["wachstube", "krankenhaus", "arbeitszeit", "zeithaus"];

    let once: Vec<Segmentation> = words.iter().map(|w| splitter.split(w)).collect();
    let again: Vec<Segmentation> = words.iter().map(|w| splitter.split(w)).collect();
    assert_eq!(once, again);
    assert_eq!(splitter.split_batch(&words[..]), once);
}

#[test]
fn test_suffix_list_rejects_candidate() {
    let dir = german_dir();
    let splitter = german(&dir);
    let split_form = Segmentation::new(["haus", "ung"]);

    assert!(!splitter.candidates("hausung").contains(&split_form));
    assert_eq!(splitter.split_formatted("hausung"), "hausung");

    let config = Config::builder().stopwords(false).build().unwrap();
    let unfiltered = Splitter::from_dir(dir.path(), config).unwrap();
    assert!(unfiltered.candidates("hausung").contains(&split_form));
}

#[test]
fn test_stopwords_are_not_lexicon_words() {
    let dir = german_dir();
    let splitter = german(&dir);
    assert!(!splitter.store().contains("aber"));

    let config = Config::builder().stopwords(false).build().unwrap();
    let unfiltered = Splitter::from_dir(dir.path(), config).unwrap();
    assert!(unfiltered.store().contains("aber"));
}

#[test]
fn test_similarity_space_decides_frequency_tie() {
    let dir = german_dir();

    let without = german(&dir);
    assert!(!without.has_oracle());
    assert_eq!(without.split_formatted("wachstube"), "wachs+tube");

    write(
        dir.path(),
        "de.vectors.txt",
        "4 2\nwach 1 0\nstube 1 0\nwachs 1 0\ntube 0 1\n",
    );
    let with = german(&dir);
    assert!(with.has_oracle());
    assert_eq!(with.split_formatted("wachstube"), "wach+stube");
}

#[test]
fn test_similarity_space_only_read_when_ranked_on() {
    let dir = german_dir();
    write(dir.path(), "de.vectors.txt", "not a vector file\n");

    let config = Config::builder()
        .ranking(["avg_frequency", "shortest"])
        .build()
        .unwrap();
    let splitter = Splitter::from_dir(dir.path(), config).unwrap();
    assert!(!splitter.has_oracle());

    let err = Splitter::from_dir(dir.path(), Config::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn test_force_split_modes() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "de.lexicon.tsv", "kranken\t5\nhaus\t8\nkrankenhaus\t1000\n");

    let build = |mode: ForceSplit| {
        let config = Config::builder()
            .stopwords(false)
            .force_split(mode)
            .build()
            .unwrap();
        Splitter::from_dir(dir.path(), config).unwrap()
    };

    assert_eq!(build(ForceSplit::Off).split_formatted("krankenhaus"), "krankenhaus");
    assert_eq!(
        build(ForceSplit::Penalize).split_formatted("krankenhaus"),
        "kranken+haus"
    );
    assert_eq!(
        build(ForceSplit::Exclude).split_formatted("krankenhaus"),
        "kranken+haus"
    );
    assert_eq!(build(ForceSplit::Exclude).split_formatted("haus"), "haus");
}

#[test]
fn test_lexicon_limit() {
    let dir = german_dir();
    let config = Config::builder().limit(Some(2)).build().unwrap();
    let splitter = Splitter::from_dir(dir.path(), config).unwrap();

    assert!(splitter.store().contains("haus"));
    assert!(!splitter.store().contains("zeit"));
    assert_eq!(splitter.split_formatted("krankenhaus"), "kranken+haus");
    assert_eq!(splitter.split_formatted("arbeitszeit"), "arbeitszeit");
}

#[test]
fn test_swedish_profile() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "sv.lexicon.tsv", "kväll\t30\ntidning\t70\n");

    let config = Config::builder()
        .language("sv")
        .stopwords(false)
        .build()
        .unwrap();
    let splitter = Splitter::from_dir(dir.path(), config).unwrap();
    assert_eq!(splitter.split_formatted("Kvällstidning"), "kväll|s+tidning");
}

#[test]
fn test_missing_affix_file_is_resource_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "de.lexicon.tsv", GERMAN_LEXICON);

    let err = Splitter::from_dir(dir.path(), Config::default()).unwrap_err();
    assert!(matches!(err, Error::Resource { .. }));
    assert!(err.to_string().contains("de.stopwords.txt"));
}
