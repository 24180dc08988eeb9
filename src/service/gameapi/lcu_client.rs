use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use reqwest::{blocking::Client, header, tls};

use crate::service::config::Config;

use super::{error::LcuError, lockfile::Credentials, session::LcuSession};

pub const MATCH_HISTORY_PATH: &str = "/lol-match-history/v1/products/lol/current-summoner/matches";
const MATCH_HISTORY_FILE: &str = "MatchHistory.json";

pub fn match_history_path(count: u32) -> String {
    format!("{}?begIndex=0&endIndex={}", MATCH_HISTORY_PATH, count.saturating_sub(1))
}

/// Blocking client for the game client's loopback API.
pub struct LcuClient {
    client: Client,
    session: LcuSession,
    lockfile_path: Option<PathBuf>,
    load_local: bool,
    store_responses: bool,
    data_dir: PathBuf,
}

impl LcuClient {
    /// Creates the client and tries to derive a session from the lockfile.
    ///
    /// A missing or broken lockfile is not fatal here, the session just stays
    /// unready and the next fetch retries the lockfile.
    pub fn new(config: &Config) -> Result<Self, LcuError> {
        let mut lcu_client = LcuClient::with_session(LcuSession::default(), config)?;
        if !config.load_local {
            if let Err(error) = lcu_client.refresh() {
                tracing::warn!(%error, "lockfile not usable yet, session stays unready");
            }
        }
        Ok(lcu_client)
    }

    pub fn with_session(session: LcuSession, config: &Config) -> Result<Self, LcuError> {
        Ok(Self {
            client: LcuClient::setup_client(config)?,
            session,
            lockfile_path: config.lockfile_path.clone(),
            load_local: config.load_local,
            store_responses: config.store_responses,
            data_dir: config.data_dir.clone(),
        })
    }

    // The client API serves a self-signed certificate on 127.0.0.1 only. Certificate
    // validation is switched off for this client and it must never be pointed elsewhere.
    fn setup_client(config: &Config) -> Result<Client, LcuError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .min_tls_version(tls::Version::TLS_1_2)
            .timeout(config.timeout)
            .build()?;
        Ok(client)
    }

    pub fn session(&self) -> &LcuSession {
        &self.session
    }

    /// Re-reads the lockfile and replaces the session.
    pub fn refresh(&mut self) -> Result<(), LcuError> {
        let credentials = Credentials::load(self.lockfile_path.as_deref())?;
        self.session = LcuSession::derive(&credentials);
        tracing::debug!(base_url = self.session.base_url(), "session derived from lockfile");
        Ok(())
    }

    /// Requests the `count` most recent games of the logged in summoner and
    /// returns the raw response body. A count of 0 returns an empty body
    /// without touching the network.
    pub fn fetch_match_history(&mut self, count: u32) -> Result<Vec<u8>, LcuError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        if self.load_local {
            let path = self.local_file_path();
            tracing::debug!(path = %path.display(), "loading match history from local file");
            return fs::read(&path).map_err(|source| LcuError::NotFound { path, source });
        }

        if !self.session.is_ready() {
            self.refresh().map_err(|error| LcuError::NotReady(Box::new(error)))?;
        }

        let auth_value = self
            .session
            .auth_header_value()
            .map_err(|err| LcuError::Parse(format!("invalid authorization header: {}", err)))?;

        // Send request
        let url = self.session.url(&match_history_path(count));
        tracing::debug!(%url, "requesting match history");
        let response = self
            .client
            .get(url)
            .header(header::AUTHORIZATION, auth_value)
            .header(header::ACCEPT, "application/json")
            .send()?
            .error_for_status()?;

        let body = response.bytes()?.to_vec();
        tracing::debug!(bytes = body.len(), "match history received");

        if self.store_responses {
            if let Err(error) = self.store_response(&body) {
                tracing::warn!(%error, "failed to store match history response");
            }
        }

        Ok(body)
    }

    fn local_file_path(&self) -> PathBuf {
        self.data_dir.join(MATCH_HISTORY_FILE)
    }

    fn store_response(&self, body: &[u8]) -> std::io::Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        let mut file = File::create(self.local_file_path())?;
        file.write_all(body)
    }
}
