//! Mock authentication and profile persistence.
//!
//! No real credential check happens here: login fabricates a profile from
//! the email address, signup takes the fields at face value. The profile is
//! round-tripped through a JSON file in the portable data directory so the
//! session survives restarts, and that file is the only persistence in the
//! crate.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, warn};
use url::Url;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::models::{ProfileUpdate, UserProfile};

const LOGIN_LATENCY_MS: u64 = 1000;

const STOCK_AVATAR: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop&crop=face";

/// Profile store backed by a JSON file.
#[derive(Debug)]
pub struct ProfileStore {
    path: PathBuf,
    current: Option<UserProfile>,
    latency: Duration,
}

impl ProfileStore {
    /// Opens the store, loading a previously persisted profile if one exists.
    pub fn open(path: PathBuf) -> Result<Self, AppError> {
        Self::open_with_latency(path, Duration::from_millis(LOGIN_LATENCY_MS))
    }

    /// Opens the store with a custom simulated latency. Tests pass zero.
    pub fn open_with_latency(path: PathBuf, latency: Duration) -> Result<Self, AppError> {
        let current = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => {
                    info!(username = %profile.username, "restored persisted profile");
                    Some(profile)
                }
                Err(e) => {
                    // A corrupt file means a fresh signed-out session, not a crash.
                    warn!("ignoring unreadable profile file: {}", e);
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(AppError::Io(e)),
        };

        Ok(Self {
            path,
            current,
            latency,
        })
    }

    /// The signed-in profile, if any.
    pub fn current(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Signs in with an email address. The password is accepted but never
    /// checked; the username is the local part of the email.
    #[instrument(skip(self, _password))]
    pub async fn login(&mut self, email: &str, _password: &str) -> Result<UserProfile, AppError> {
        sleep(self.latency).await;

        let username = email.split('@').next().unwrap_or(email).to_string();
        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            username,
            email: email.to_string(),
            profile_picture: Url::parse(STOCK_AVATAR).ok(),
            theme: Default::default(),
        };
        profile.validate()?;

        self.persist(&profile)?;
        self.current = Some(profile.clone());
        info!(username = %profile.username, "user signed in");
        Ok(profile)
    }

    /// Creates an account. Exactly as fake as `login`, but keeps the chosen
    /// username.
    #[instrument(skip(self, _password))]
    pub async fn signup(
        &mut self,
        username: &str,
        email: &str,
        _password: &str,
    ) -> Result<UserProfile, AppError> {
        sleep(self.latency).await;

        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            username: username.to_string(),
            email: email.to_string(),
            profile_picture: Url::parse(STOCK_AVATAR).ok(),
            theme: Default::default(),
        };
        profile.validate()?;

        self.persist(&profile)?;
        self.current = Some(profile.clone());
        info!(username = %profile.username, "account created");
        Ok(profile)
    }

    /// Signs out and removes the persisted profile file.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<(), AppError> {
        self.current = None;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Applies a partial profile edit and persists the result.
    #[instrument(skip(self, update))]
    pub fn update(&mut self, update: ProfileUpdate) -> Result<UserProfile, AppError> {
        update.validate()?;

        let profile = self
            .current
            .as_mut()
            .ok_or_else(|| AppError::Validation("No user is signed in".to_string()))?;

        if let Some(username) = update.username {
            profile.username = username;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
        if let Some(picture) = update.profile_picture {
            profile.profile_picture = Some(picture);
        }
        if let Some(theme) = update.theme {
            profile.theme = theme;
        }

        let updated = profile.clone();
        self.persist(&updated)?;
        Ok(updated)
    }

    fn persist(&self, profile: &UserProfile) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> ProfileStore {
        ProfileStore::open_with_latency(dir.path().join("profile.json"), Duration::ZERO).unwrap()
    }

    #[tokio::test]
    async fn test_login_derives_username_from_email() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let profile = store.login("sarah@company.com", "hunter2").await.unwrap();

        assert_eq!(profile.username, "sarah");
        assert_eq!(profile.email, "sarah@company.com");
        assert!(profile.profile_picture.is_some());
        assert_eq!(store.current().unwrap().id, profile.id);
    }

    #[tokio::test]
    async fn test_login_rejects_malformed_email() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let err = store.login("not-an-email", "pw").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.current().is_none());
    }

    #[tokio::test]
    async fn test_profile_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");

        {
            let mut store =
                ProfileStore::open_with_latency(path.clone(), Duration::ZERO).unwrap();
            store.signup("alex", "alex@company.com", "pw").await.unwrap();
        }

        let reopened = ProfileStore::open_with_latency(path, Duration::ZERO).unwrap();
        assert_eq!(reopened.current().unwrap().username, "alex");
    }

    #[tokio::test]
    async fn test_logout_removes_persisted_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        let mut store = ProfileStore::open_with_latency(path.clone(), Duration::ZERO).unwrap();

        store.login("sarah@company.com", "pw").await.unwrap();
        assert!(path.exists());

        store.logout().unwrap();
        assert!(store.current().is_none());
        assert!(!path.exists());

        // Logging out twice is fine.
        store.logout().unwrap();
    }

    #[tokio::test]
    async fn test_update_applies_partial_edit() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        store.login("sarah@company.com", "pw").await.unwrap();

        let updated = store
            .update(ProfileUpdate {
                username: Some("Sarah J.".to_string()),
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.username, "Sarah J.");
        assert_eq!(updated.theme, Theme::Dark);
        assert_eq!(updated.email, "sarah@company.com");
    }

    #[test]
    fn test_update_requires_signed_in_user() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);

        let err = store.update(ProfileUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_corrupt_profile_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{not json").unwrap();

        let store = ProfileStore::open_with_latency(path, Duration::ZERO).unwrap();
        assert!(store.current().is_none());
    }
}
