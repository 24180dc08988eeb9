use std::{path::PathBuf, time::Duration};

pub const DEFAULT_MATCH_COUNT: u32 = 20;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone)]
pub struct Config {
    /// Lockfile location, platform default when unset.
    pub lockfile_path: Option<PathBuf>,
    pub count: u32,
    /// Upper bound for a whole request, connect included.
    pub timeout: Duration,
    /// Replay the stored response from `data_dir` instead of asking the client.
    pub load_local: bool,
    /// Dump every raw response into `data_dir`.
    pub store_responses: bool,
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lockfile_path: None,
            count: DEFAULT_MATCH_COUNT,
            timeout: DEFAULT_TIMEOUT,
            load_local: false,
            store_responses: false,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}
