use std::path::{Path, PathBuf};

use crate::app::config::DEFAULT_FILE_NAME;

pub const GUI_LOG_FILE_NAME: &str = "signup-gui.log";

#[derive(Clone, Debug, PartialEq)]
pub struct SignupDirectory(PathBuf);

impl SignupDirectory {
    pub fn new(p: PathBuf) -> Self {
        SignupDirectory(p)
    }
    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(SignupDirectory::new)
    }
}

impl SignupDirectory {
    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        create_directory(self.0.as_path())
    }
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
    pub fn config_path(&self) -> PathBuf {
        self.0.join(DEFAULT_FILE_NAME)
    }
    pub fn log_path(&self) -> PathBuf {
        self.0.join(GUI_LOG_FILE_NAME)
    }
}

// Get the absolute path to the signup data folder.
///
/// This is `~/.signup` on Linux and a "Signup" directory in the configuration directory of
/// every other OS.
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".signup");

        #[cfg(not(target_os = "linux"))]
        path.push("Signup");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

fn create_directory(datadir_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(unix)]
    return {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700).recursive(true).create(datadir_path)?;
        Ok(())
    };

    #[cfg(not(unix))]
    return {
        std::fs::create_dir_all(datadir_path)?;
        Ok(())
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = SignupDirectory::new(tmp.path().join("a").join("b"));
        assert!(!dir.exists());
        dir.init().unwrap();
        assert!(dir.exists());
        // Creating an existing directory is fine.
        dir.init().unwrap();
    }

    #[test]
    fn file_paths_live_in_datadir() {
        let dir = SignupDirectory::new(PathBuf::from("/tmp/signup"));
        assert_eq!(dir.config_path(), PathBuf::from("/tmp/signup/gui.toml"));
        assert_eq!(dir.log_path(), PathBuf::from("/tmp/signup/signup-gui.log"));
    }
}
