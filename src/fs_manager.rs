use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolves the portable directory layout.
///
/// The root comes from the configured data directory override when one is
/// set (tests, packaged deployments); otherwise the directory next to the
/// executable, falling back to the working directory.
pub struct PortablePathManager {
    root: PathBuf,
}

impl PortablePathManager {
    pub fn new(root_override: Option<PathBuf>) -> Self {
        let root = root_override.unwrap_or_else(Self::exe_dir);
        Self { root }
    }

    fn exe_dir() -> PathBuf {
        match std::env::current_exe() {
            Ok(mut path) => {
                path.pop(); // drop the executable name
                path
            }
            Err(e) => {
                warn!(
                    "Failed to get current exe path: {}. Falling back to current_dir.",
                    e
                );
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            }
        }
    }

    /// The application root directory.
    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    /// The main data directory (./data).
    pub fn data_dir(&self) -> PathBuf {
        self.root.join("data")
    }

    /// The log directory (./data/logs).
    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// The persisted profile file (./data/profile.json).
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Creates the data and log directories if they do not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        let data_path = self.data_dir();
        let logs_path = self.logs_dir();

        if !data_path.exists() {
            info!("Creating data directory: {:?}", data_path);
            fs::create_dir_all(&data_path)?;
        }

        if !logs_path.exists() {
            info!("Creating logs directory: {:?}", logs_path);
            fs::create_dir_all(&logs_path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_shapes_all_paths() {
        let paths = PortablePathManager::new(Some(PathBuf::from("/opt/uniconnect")));

        assert_eq!(paths.root_dir(), Path::new("/opt/uniconnect"));
        assert_eq!(paths.data_dir(), PathBuf::from("/opt/uniconnect/data"));
        assert_eq!(
            paths.profile_path(),
            PathBuf::from("/opt/uniconnect/data/profile.json")
        );
        assert_eq!(paths.logs_dir(), PathBuf::from("/opt/uniconnect/data/logs"));
    }

    #[test]
    fn test_init_creates_directories() {
        let dir = TempDir::new().unwrap();
        let paths = PortablePathManager::new(Some(dir.path().to_path_buf()));

        paths.init().unwrap();

        assert!(paths.data_dir().is_dir());
        assert!(paths.logs_dir().is_dir());
    }

    #[test]
    fn test_without_override_root_is_resolved() {
        let paths = PortablePathManager::new(None);
        assert!(paths.data_dir().ends_with("data"));
    }
}
