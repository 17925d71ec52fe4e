use std::{
    fs,
    ops::Deref,
    path::{Path, PathBuf},
};

/// Per-test directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("pt-launch-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }
}

impl Deref for ScratchDir {
    type Target = Path;

    fn deref(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_removed_on_drop() {
        let dir = ScratchDir::new("drop");
        fs::write(dir.join("pathtracer.in"), "spp=1").unwrap();
        let path = dir.to_path_buf();
        assert!(path.is_dir());

        drop(dir);
        assert!(!path.exists());
    }
}
