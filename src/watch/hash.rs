// src/watch/hash.rs

use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use blake3::Hasher;
use tracing::debug;

use crate::errors::{UnitError, UnitResult};
use crate::fs;
use crate::paths::SitePaths;
use crate::units::UnitKind;

/// Compute a deterministic aggregate hash over a unit's source files.
///
/// The watch runtime compares this against the hash recorded at the unit's
/// last successful build to drop triggers whose sources haven't actually
/// changed (editor double-writes, duplicate notify events, touched
/// timestamps). Relative ordering is stable: the file list is sorted and
/// each path is mixed into the hash alongside its contents, so renames
/// change the result too.
pub fn compute_unit_hash(paths: &SitePaths, unit: UnitKind) -> UnitResult<String> {
    let files = unit_source_files(paths, unit)?;

    let mut hasher = Hasher::new();
    for path in files {
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(&[0]);
        if path.is_file() {
            let mut file = File::open(&path).map_err(|e| UnitError::io(&path, e))?;
            let mut buf = [0u8; 8192];
            loop {
                let n = file.read(&mut buf).map_err(|e| UnitError::io(&path, e))?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
            }
        }
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(unit = %unit, hash = %hash, "computed aggregate source hash");
    Ok(hash)
}

/// The files feeding one unit, sorted.
///
/// The html unit spans all HTML under `src/` because partials outside the
/// views directory feed the expanded output.
fn unit_source_files(paths: &SitePaths, unit: UnitKind) -> UnitResult<Vec<PathBuf>> {
    let files = match unit {
        UnitKind::Styles => fs::collect_files(&paths.styles_dir())?,
        UnitKind::Scripts => fs::collect_files(&paths.scripts_dir())?,
        UnitKind::Images => fs::collect_files(&paths.images_dir())?,
        UnitKind::Fonts => fs::collect_files(&paths.fonts_dir())?,
        UnitKind::Html => fs::collect_files(&paths.src_dir())?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "html"))
            .collect(),
        UnitKind::Clean => Vec::new(),
    };
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_changes_when_a_source_changes() {
        let dir = tempfile::tempdir().unwrap();
        let styles = dir.path().join("src").join("styles");
        std::fs::create_dir_all(&styles).unwrap();
        std::fs::write(styles.join("main.scss"), "body { color: red; }").unwrap();

        let paths = SitePaths::new(dir.path());
        let before = compute_unit_hash(&paths, UnitKind::Styles).unwrap();

        std::fs::write(styles.join("main.scss"), "body { color: blue; }").unwrap();
        let after = compute_unit_hash(&paths, UnitKind::Styles).unwrap();

        assert_ne!(before, after);
    }

    #[test]
    fn hash_is_stable_for_unchanged_sources() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = dir.path().join("src").join("scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(scripts.join("a.js"), "const a = 1;").unwrap();
        std::fs::write(scripts.join("b.js"), "const b = 2;").unwrap();

        let paths = SitePaths::new(dir.path());
        let first = compute_unit_hash(&paths, UnitKind::Scripts).unwrap();
        let second = compute_unit_hash(&paths, UnitKind::Scripts).unwrap();

        assert_eq!(first, second);
    }
}
