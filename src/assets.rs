//! Portrait lookup for selected operators. Portraits ship as
//! `半身像_<name>_<tier>.png`; elite 2 operators have a dedicated portrait
//! that may be missing from a partial asset dump, in which case the elite 1
//! art is used. `None` means the caller renders a text placeholder.

use std::path::{Path, PathBuf};

/// Candidate portrait file names, most specific first.
pub fn portrait_candidates(name: &str, elite: u8) -> Vec<String> {
    let mut candidates = Vec::with_capacity(2);
    if elite == 2 {
        candidates.push(format!("半身像_{name}_2.png"));
    }
    candidates.push(format!("半身像_{name}_1.png"));
    candidates
}

/// First candidate that exists under `asset_dir`, if any.
pub fn resolve_portrait(asset_dir: &Path, name: &str, elite: u8) -> Option<PathBuf> {
    portrait_candidates(name, elite)
        .into_iter()
        .map(|candidate| asset_dir.join(candidate))
        .find(|path| path.is_file())
}
