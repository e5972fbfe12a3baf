//! Filesystem behavior of the batch driver: write policy, exclusions and
//! per-file failure isolation

use std::fs;
use std::path::{Path, PathBuf};

use annotation_engine::{AllowList, FilterMode};
use corpus_core::{
    count_directory, discover_files, process_markdown, scan_markdown, BatchOptions,
    DiscoveryOptions,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn knowledge_base() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "team.md", "王小明(CEO)負責營運\n李小華(Store Manager)管理門市\n".as_bytes());
    write(root, "tools.md", "表單放在(Google Drive)\n".as_bytes());
    write(root, "plain.md", "沒有任何標注的段落\n".as_bytes());
    write(root, "contracts/ceo.md", "# 合約(CEO Service Agreement)\n\n職稱(CEO)\n".as_bytes());
    write(root, ".git/notes.md", "(CEO)\n".as_bytes());
    write(root, "notes.txt", "(CEO)\n".as_bytes());
    dir
}

#[test]
fn discovery_skips_markers_and_other_extensions() {
    let dir = knowledge_base();
    let files = discover_files(dir.path(), &DiscoveryOptions::markdown()).unwrap();
    let relative: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
        .collect();

    assert_eq!(
        relative,
        vec![
            Path::new("contracts").join("ceo.md").display().to_string(),
            "plain.md".to_string(),
            "team.md".to_string(),
            "tools.md".to_string(),
        ]
    );
}

#[test]
fn scan_never_touches_files() {
    let dir = knowledge_base();
    let team = dir.path().join("team.md");
    let before = fs::read(&team).unwrap();
    let mtime_before = fs::metadata(&team).unwrap().modified().unwrap();

    let outcome = scan_markdown(dir.path(), &DiscoveryOptions::markdown()).unwrap();

    assert_eq!(fs::read(&team).unwrap(), before);
    assert_eq!(fs::metadata(&team).unwrap().modified().unwrap(), mtime_before);

    let summary = outcome.summary;
    assert_eq!(summary.files.len(), 3);
    assert_eq!(summary.total_annotations, 5);
    assert_eq!(summary.unique_annotations.len(), 4);
    assert_eq!(summary.file_count("(CEO)"), 2);
    // Descending by count; ties keep traversal order
    assert_eq!(summary.files[0].total_count, 2);
    assert_eq!(summary.files[2].path, "tools.md");
}

#[test]
fn preserve_layout_rewrites_only_changed_files() {
    let dir = knowledge_base();
    let plain = dir.path().join("plain.md");
    let mtime_before = fs::metadata(&plain).unwrap().modified().unwrap();

    let outcome = process_markdown(
        dir.path(),
        &DiscoveryOptions::markdown(),
        &FilterMode::PreserveLayout,
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.modified.len(), 3);
    assert_eq!(outcome.unchanged, 1);
    assert_eq!(outcome.removed, 5);
    assert!(outcome.failures.is_empty());

    assert_eq!(
        fs::read_to_string(dir.path().join("team.md")).unwrap(),
        "王小明負責營運\n李小華管理門市\n"
    );
    assert_eq!(fs::metadata(&plain).unwrap().modified().unwrap(), mtime_before);
    // Excluded paths are left alone
    assert_eq!(
        fs::read_to_string(dir.path().join(".git/notes.md")).unwrap(),
        "(CEO)\n"
    );
}

#[test]
fn selective_mode_keeps_allow_listed_terms() {
    let dir = knowledge_base();
    let outcome = process_markdown(
        dir.path(),
        &DiscoveryOptions::markdown(),
        &FilterMode::SelectiveRemove(AllowList::knowledge_base()),
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.kept, 2);
    assert_eq!(
        fs::read_to_string(dir.path().join("tools.md")).unwrap(),
        "表單放在(Google Drive)\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("contracts/ceo.md")).unwrap(),
        "# 合約(CEO Service Agreement)\n\n職稱\n"
    );
}

#[test]
fn dry_run_reports_without_writing() {
    let dir = knowledge_base();
    let team = dir.path().join("team.md");
    let before = fs::read(&team).unwrap();

    let outcome = process_markdown(
        dir.path(),
        &DiscoveryOptions::markdown(),
        &FilterMode::RemoveAll,
        BatchOptions { dry_run: true },
    )
    .unwrap();

    assert!(outcome.dry_run);
    // Whitespace collapse rewrites even annotation-free files
    assert_eq!(outcome.modified.len(), 4);
    assert_eq!(fs::read(&team).unwrap(), before);
}

#[test]
fn one_bad_file_does_not_abort_the_batch() {
    let dir = knowledge_base();
    write(dir.path(), "broken.md", &[0xff, 0xfe, b'(', b'C', b'E', b'O', b')']);

    let outcome = process_markdown(
        dir.path(),
        &DiscoveryOptions::markdown(),
        &FilterMode::RemoveAll,
        BatchOptions::default(),
    )
    .unwrap();

    assert_eq!(outcome.failures.len(), 1);
    assert!(outcome.failures[0].path.ends_with("broken.md"));
    assert_eq!(outcome.modified.len(), 4);
    assert_eq!(
        fs::read_to_string(dir.path().join("team.md")).unwrap(),
        "王小明負責營運 李小華管理門市 "
    );
}

#[test]
fn scan_only_mode_is_rejected_by_the_rewriter() {
    let dir = knowledge_base();
    let result = process_markdown(
        dir.path(),
        &DiscoveryOptions::markdown(),
        &FilterMode::ScanOnly,
        BatchOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn count_groups_by_folder() {
    let dir = knowledge_base();
    let outcome = count_directory(dir.path(), &DiscoveryOptions::word_count()).unwrap();
    let summary = outcome.summary;

    assert_eq!(summary.file_count(), 4);
    assert_eq!(summary.folders.len(), 2);
    // Root folder holds more CJK text than contracts/
    assert_eq!(summary.folders[0].folder, ".");
    assert_eq!(summary.folders[0].files, 3);
    assert_eq!(summary.folders[1].folder, "contracts");
    assert_eq!(
        summary.totals.cjk_chars,
        summary.folders.iter().map(|f| f.stats.cjk_chars).sum::<usize>()
    );
    assert_eq!(summary.top_files(1)[0].path, "team.md");
}
