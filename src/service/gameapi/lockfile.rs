use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use super::error::LcuError;

/// Lockfile layout is `name:pid:port:secret:protocol`.
pub const LOCKFILE_MIN_FIELDS: usize = 5;

const PORT_FIELD: usize = 2;
const SECRET_FIELD: usize = 3;
const SCHEME_FIELD: usize = 4;

#[cfg(target_os = "macos")]
const DEFAULT_LOCKFILE_PATH: &str = "/Applications/League of Legends.app/Contents/LoL/lockfile";
#[cfg(not(target_os = "macos"))]
const DEFAULT_LOCKFILE_PATH: &str = r"C:\Riot Games\League of Legends\lockfile";

/// Connection parameters of the running client's local API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    port: String,
    secret: String,
    scheme: String,
}

impl Credentials {
    /// Reads and parses the lockfile at `path`, or at the platform default if no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, LcuError> {
        let path = resolve_lockfile_path(path);
        tracing::debug!(path = %path.display(), "reading lockfile");

        let content = fs::read(&path).map_err(|source| LcuError::NotFound {
            path: path.clone(),
            source,
        })?;
        String::from_utf8_lossy(&content).parse()
    }

    pub fn port(&self) -> &str {
        &self.port
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl FromStr for Credentials {
    type Err = LcuError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let info = content.trim().split(':').collect::<Vec<_>>();
        if info.len() < LOCKFILE_MIN_FIELDS {
            return Err(LcuError::MalformedCredentials { fields: info.len() });
        }

        Ok(Credentials {
            port: info[PORT_FIELD].to_string(),
            secret: info[SECRET_FIELD].to_string(),
            scheme: info[SCHEME_FIELD].to_string(),
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("port", &self.port)
            .field("secret", &"<redacted>")
            .field("scheme", &self.scheme)
            .finish()
    }
}

pub fn default_lockfile_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOCKFILE_PATH)
}

/// Explicit path if non-empty, platform default otherwise.
pub fn resolve_lockfile_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => default_lockfile_path(),
    }
}
