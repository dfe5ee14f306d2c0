pub mod synthetic_image;

use std::path::PathBuf;

/// Fresh scratch directory under the system temp dir, unique per test.
pub fn scratch_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("matsim-netgen-{label}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}
