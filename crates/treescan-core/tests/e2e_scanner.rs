/// End-to-end scanner tests.
///
/// These run the real `scanner::scan` pipeline against temporary trees and
/// check the JSON-facing contract through `serde_json::Value`, so field
/// presence is tested exactly as a consumer of the report would see it.
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tempfile::TempDir;
use treescan_core::scanner::{scan, ScanOptions};
use treescan_core::ScanError;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// ```text
/// root/
///   .git/
///     config
///   docs/
///     Guide.MD   (10 bytes)
///   Makefile     (3 bytes)
///   visible.txt  (5 bytes)
/// ```
fn build_test_tree(root: &Path) {
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    write_bytes(&root.join(".git/config"), 1);
    write_bytes(&root.join("docs/Guide.MD"), 10);
    write_bytes(&root.join("Makefile"), 3);
    write_bytes(&root.join("visible.txt"), 5);
}

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![b'x'; n]).unwrap();
}

fn scan_items(root: &Path, include_hidden: bool) -> Vec<Value> {
    let envelope = scan(root, ScanOptions { include_hidden }).expect("scan failed");
    let value = serde_json::to_value(&envelope).unwrap();
    value["items"].as_array().unwrap().clone()
}

fn find<'a>(items: &'a [Value], path: &str) -> &'a Value {
    items
        .iter()
        .find(|item| item["path"] == path)
        .unwrap_or_else(|| panic!("no record for {path}"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn root_record_is_first_and_unique() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let items = scan_items(tmp.path(), true);
    assert_eq!(items[0]["path"], ".");
    assert_eq!(items[0]["type"], "folder");
    assert_eq!(items.iter().filter(|i| i["path"] == ".").count(), 1);
}

#[test]
fn optional_fields_follow_type() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    for item in scan_items(tmp.path(), true) {
        let obj = item.as_object().unwrap();
        match item["type"].as_str().unwrap() {
            "file" => {
                assert!(obj["size_bytes"].as_u64().is_some());
                match &obj["extension"] {
                    Value::Null => {}
                    Value::String(ext) => {
                        assert!(!ext.starts_with('.'));
                        assert_eq!(ext, &ext.to_lowercase());
                    }
                    other => panic!("bad extension {other}"),
                }
                assert!(!obj.contains_key("symlink_target"));
            }
            "symlink" => {
                assert!(obj.contains_key("symlink_target"));
                assert!(!obj.contains_key("size_bytes"));
            }
            _ => {
                assert!(!obj.contains_key("size_bytes"));
                assert!(!obj.contains_key("extension"));
                assert!(!obj.contains_key("symlink_target"));
            }
        }
        assert_eq!(obj["permissions"].as_str().unwrap().chars().count(), 10);
    }
}

#[test]
fn file_sizes_and_extensions() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let items = scan_items(tmp.path(), false);
    let guide = find(&items, "docs/Guide.MD");
    assert_eq!(guide["size_bytes"], 10);
    assert_eq!(guide["extension"], "md");

    let makefile = find(&items, "Makefile");
    assert_eq!(makefile["size_bytes"], 3);
    assert_eq!(makefile["extension"], Value::Null);
}

#[test]
fn hidden_entries_are_suppressed_by_default() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let hidden_off = scan_items(tmp.path(), false);
    assert!(hidden_off
        .iter()
        .all(|i| !i["path"].as_str().unwrap().starts_with(".git")));
    find(&hidden_off, "visible.txt");

    let hidden_on = scan_items(tmp.path(), true);
    find(&hidden_on, ".git");
    find(&hidden_on, ".git/config");
}

#[test]
fn modified_time_round_trips_to_the_second() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("stamp.txt");
    write_bytes(&file, 1);

    // 2021-03-04T05:06:07Z plus a fraction that must be truncated.
    let mtime = UNIX_EPOCH + Duration::from_millis(1_614_834_367_750);
    fs::File::options()
        .write(true)
        .open(&file)
        .unwrap()
        .set_modified(mtime)
        .unwrap();

    let items = scan_items(tmp.path(), false);
    assert_eq!(find(&items, "stamp.txt")["modified_utc"], "2021-03-04T05:06:07Z");
}

#[test]
fn repeated_scans_have_identical_items() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let first = scan(tmp.path(), ScanOptions::default()).unwrap();
    let second = scan(tmp.path(), ScanOptions::default()).unwrap();

    let strip_atime = |items: &[treescan_core::model::EntryRecord]| {
        items
            .iter()
            .map(|r| {
                let mut r = r.clone();
                // Reading directories can bump access times on some mounts.
                r.accessed_utc = None;
                r
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(strip_atime(&first.items), strip_atime(&second.items));
    assert_eq!(first.scanned_path, second.scanned_path);
}

#[test]
fn envelope_metadata() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());

    let envelope = scan(tmp.path(), ScanOptions::default()).unwrap();
    assert_eq!(envelope.scanner_version, "1.0");
    assert_eq!(
        Path::new(&envelope.scanned_path),
        fs::canonicalize(tmp.path()).unwrap()
    );
    assert!(envelope.timestamp_utc.ends_with('Z'));
    assert_eq!(envelope.items[0].path, ".");
    assert_eq!(envelope.file_count(), 3);
    assert_eq!(envelope.total_file_bytes(), 18);

    let before = SystemTime::now() - Duration::from_secs(60);
    let stamp = chrono::DateTime::parse_from_rfc3339(&envelope.timestamp_utc).unwrap();
    assert!(stamp.timestamp() >= before.duration_since(UNIX_EPOCH).unwrap().as_secs() as i64);
}

#[test]
fn missing_root_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = scan(&tmp.path().join("nope"), ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::NotFound(_)));
}

#[test]
fn file_root_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("plain.txt");
    write_bytes(&file, 1);
    let err = scan(&file, ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[cfg(unix)]
#[test]
fn root_symlink_to_directory_is_scanned() {
    let tmp = TempDir::new().unwrap();
    let real = tmp.path().join("real");
    fs::create_dir(&real).unwrap();
    write_bytes(&real.join("inside.txt"), 2);
    let link = tmp.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let envelope = scan(&link, ScanOptions::default()).unwrap();
    assert_eq!(
        Path::new(&envelope.scanned_path),
        fs::canonicalize(&real).unwrap()
    );
    assert!(envelope.items.iter().any(|r| r.path == "inside.txt"));
}

#[cfg(unix)]
#[test]
fn symlinks_are_reported_not_followed() {
    let tmp = TempDir::new().unwrap();
    build_test_tree(tmp.path());
    std::os::unix::fs::symlink("docs", tmp.path().join("docs-link")).unwrap();
    std::os::unix::fs::symlink("missing.txt", tmp.path().join("dangling")).unwrap();

    let items = scan_items(tmp.path(), false);
    let link = find(&items, "docs-link");
    assert_eq!(link["type"], "symlink");
    assert_eq!(link["symlink_target"], "docs");
    assert!(link["permissions"].as_str().unwrap().starts_with('l'));
    assert!(items
        .iter()
        .all(|i| !i["path"].as_str().unwrap().starts_with("docs-link/")));

    assert_eq!(find(&items, "dangling")["symlink_target"], "missing.txt");
}

#[cfg(unix)]
#[test]
fn special_files_are_unknown() {
    use std::os::unix::net::UnixListener;

    let tmp = TempDir::new().unwrap();
    let _listener = UnixListener::bind(tmp.path().join("sock")).unwrap();

    let items = scan_items(tmp.path(), false);
    let sock = find(&items, "sock");
    assert_eq!(sock["type"], "unknown");
    assert!(sock["permissions"].as_str().unwrap().starts_with('s'));
}
