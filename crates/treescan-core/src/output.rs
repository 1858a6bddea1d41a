/// Output targets and report writers.
///
/// Every tool writes exactly one artifact, either to standard output or to a
/// file. A write failure is fatal and surfaces as [`ScanError::Write`] or
/// [`ScanError::Stdout`].
use crate::error::ScanError;
use crate::model::ScanEnvelope;
use crate::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix for the scanner's default output file.
pub const JSON_SUFFIX: &str = ".json";
/// Suffix for the tree printers' default output file.
pub const TREE_SUFFIX: &str = "_tree.md";

/// Where a report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Pick the target from an optional `-o` argument. `-` means stdout; no
    /// argument means `<root name><suffix>` in the current directory.
    pub fn from_arg(arg: Option<&Path>, root: &Path, suffix: &str) -> Self {
        match arg {
            Some(path) if path == Path::new("-") => Self::Stdout,
            Some(path) => Self::File(path.to_path_buf()),
            None => Self::File(default_output_path(root, suffix)),
        }
    }

    /// Human-readable destination for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::Stdout => "<stdout>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// `<root name><suffix>`, relative to the current directory.
///
/// When `root` has no final component (`.`, `..`, `/`), the name of its
/// resolved form is used instead, and `root` as a last resort.
pub fn default_output_path(root: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{suffix}", root_name(root)))
}

/// Display name of a root directory.
pub fn root_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    root.canonicalize()
        .ok()
        .and_then(|resolved| resolved.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "root".to_string())
}

/// Serialise `envelope` with lexicographically sorted keys and two-space
/// indentation, followed by a newline.
pub fn write_json(envelope: &ScanEnvelope, target: &OutputTarget) -> Result<()> {
    // `Value`'s map is a BTreeMap, which is what sorts the keys.
    let value = serde_json::to_value(envelope)?;
    write_with(target, |writer| {
        serde_json::to_writer_pretty(&mut *writer, &value).map_err(io::Error::from)?;
        writer.write_all(b"\n")
    })
}

/// Write pre-rendered text as-is.
pub fn write_text(content: &str, target: &OutputTarget) -> Result<()> {
    write_with(target, |writer| writer.write_all(content.as_bytes()))
}

fn write_with<F>(target: &OutputTarget, body: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            body(&mut lock)
                .and_then(|()| lock.flush())
                .map_err(ScanError::Stdout)
        }
        OutputTarget::File(path) => {
            let wrap = |source| ScanError::Write {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(wrap)?;
            let mut writer = BufWriter::new(file);
            if let Err(source) = body(&mut writer).and_then(|()| writer.flush()) {
                // Never leave a truncated report behind.
                drop(writer);
                let _ = fs::remove_file(path);
                return Err(wrap(source));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryKind, EntryRecord};

    fn sample_envelope() -> ScanEnvelope {
        ScanEnvelope::new(
            "/tmp/project".to_string(),
            "2024-05-06T07:08:09Z".to_string(),
            vec![EntryRecord {
                path: ".".to_string(),
                permissions: "drwxr-xr-x".to_string(),
                modified_utc: None,
                accessed_utc: None,
                metadata_changed_utc: None,
                created_utc: None,
                kind: EntryKind::Folder,
            }],
        )
    }

    #[test]
    fn from_arg_variants() {
        let root = Path::new("/data/photos");
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("-")), root, JSON_SUFFIX),
            OutputTarget::Stdout
        );
        assert_eq!(
            OutputTarget::from_arg(Some(Path::new("out.json")), root, JSON_SUFFIX),
            OutputTarget::File(PathBuf::from("out.json"))
        );
        assert_eq!(
            OutputTarget::from_arg(None, root, JSON_SUFFIX),
            OutputTarget::File(PathBuf::from("photos.json"))
        );
        assert_eq!(
            OutputTarget::from_arg(None, root, TREE_SUFFIX),
            OutputTarget::File(PathBuf::from("photos_tree.md"))
        );
    }

    #[test]
    fn json_is_sorted_and_two_space_indented() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("report.json");
        write_json(&sample_envelope(), &OutputTarget::File(out.clone())).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"items\": ["));

        let items = text.find("\"items\"").unwrap();
        let scanned = text.find("\"scanned_path\"").unwrap();
        let version = text.find("\"scanner_version\"").unwrap();
        let stamp = text.find("\"timestamp_utc\"").unwrap();
        assert!(items < scanned && scanned < version && version < stamp);
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("no/such/dir/report.json");
        let err = write_text("x", &OutputTarget::File(out)).unwrap_err();
        assert!(matches!(err, ScanError::Write { .. }));
    }

    #[test]
    fn failed_write_removes_partial_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("report.json");
        let err = write_with(&OutputTarget::File(out.clone()), |writer| {
            writer.write_all(b"partial")?;
            Err(io::Error::other("disk full"))
        })
        .unwrap_err();

        assert!(matches!(err, ScanError::Write { .. }));
        assert!(!out.exists());
    }
}
