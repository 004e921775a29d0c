use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AuthError;
use crate::token::Token;

/// Storage abstraction for the persisted token record.
///
/// `save` fully replaces whatever was stored before; nothing is ever
/// written unless a flow reached a successful outcome.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<Token>, AuthError>;
    fn save(&self, token: &Token) -> Result<(), AuthError>;
    fn clear(&self) -> Result<(), AuthError>;
}

/// File-backed token store writing a single flat JSON object.
///
/// Writes go through a temp file and rename so a crash mid-write never
/// leaves a partial token file behind. On unix the file is restricted to
/// `0o600`; the record contains the client secret.
///
/// # Example
/// ```no_run
/// use devauth::{FileTokenStore, Token, TokenStore};
///
/// let store = FileTokenStore::new("/tmp/tokens.json");
/// let token = Token {
///     access_token: "access".to_string(),
///     refresh_token: None,
///     token_type: "Bearer".to_string(),
///     expires_in: 3600,
///     client_id: "client".to_string(),
///     client_secret: "secret".to_string(),
/// };
/// store.save(&token)?;
/// # Ok::<(), devauth::AuthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<Token>, AuthError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AuthError::Io(err.to_string())),
        };
        let token: Token = serde_json::from_str(&raw)?;
        Ok(Some(token))
    }

    fn save(&self, token: &Token) -> Result<(), AuthError> {
        let serialized = serde_json::to_vec_pretty(token)?;
        atomic_write(&self.path, &serialized)?;
        tracing::debug!(path = %self.path.display(), "token record saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err.to_string())),
        }
    }
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file_name = path.file_name().ok_or_else(|| {
        AuthError::Io(format!("token path {} has no file name", path.display()))
    })?;

    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let temp_name = format!(
        ".{}.tmp-{}-{nonce}",
        file_name.to_string_lossy(),
        std::process::id()
    );
    let temp_path = path.with_file_name(temp_name);

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    options.mode(0o600);

    let write_result = (|| -> std::io::Result<()> {
        let mut temp_file = options.open(&temp_path)?;
        temp_file.write_all(data)?;
        temp_file.sync_all()?;
        Ok(())
    })();

    if let Err(err) = write_result {
        let _ = fs::remove_file(&temp_path);
        return Err(AuthError::Io(err.to_string()));
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(AuthError::Io(err.to_string()));
    }

    #[cfg(unix)]
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;

    Ok(())
}
