use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically replace `path` with `data` via a sibling temp file and rename.
///
/// The temp file inherits the permissions of the file being replaced. On any
/// error before the rename the original file is left as it was and the temp
/// file is removed when dropped.
///
/// # Errors
///
/// Returns the underlying I/O error from creating, writing, syncing or
/// renaming the temp file.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions())?;
    }

    tmp.persist(path).map_err(|e| e.error)?;

    // Make the rename durable on Unix.
    #[cfg(unix)]
    {
        if let Ok(dir) = fs::File::open(parent)
            && let Err(e) = dir.sync_all()
        {
            log::debug!("failed to sync directory {}: {e}", parent.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_contents_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Chart.yaml");
        fs::write(&target, "version: 1.0.0\n").unwrap();

        atomic_write(&target, b"version: 2.0.0\n").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "version: 2.0.0\n");
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn keeps_original_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("Chart.yaml");
        fs::write(&target, "version: 1.0.0\n").unwrap();
        fs::set_permissions(&target, fs::Permissions::from_mode(0o644)).unwrap();

        atomic_write(&target, b"version: 2.0.0\n").unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("absent").join("Chart.yaml");
        assert!(atomic_write(&target, b"x").is_err());
        assert!(!target.exists());
    }
}
