use std::{
    sync::{mpsc, Arc, Mutex, PoisonError},
    thread,
};

use crate::{model::game::MatchSummary, ui::async_data::AsyncData};

use super::{
    config::Config,
    gameapi::{error::LcuError, lcu_client::LcuClient, parsing::match_history::parse_match_history},
};

pub type DataRetrievalResult<T> = Result<T, LcuError>;

/// Runs the fetch and decode steps. Nothing is cached, every call asks the client again.
pub struct DataManager {
    lcu_client: Arc<Mutex<LcuClient>>,
}

impl DataManager {
    pub fn new(config: &Config) -> DataRetrievalResult<Self> {
        Ok(DataManager::from_client(LcuClient::new(config)?))
    }

    pub fn from_client(client: LcuClient) -> Self {
        Self {
            lcu_client: Arc::new(Mutex::new(client)),
        }
    }

    pub fn get_match_history(&self, count: u32) -> DataRetrievalResult<Vec<MatchSummary>> {
        DataManager::retrieve_match_history(&self.lcu_client, count)
    }

    /// Same as [`DataManager::get_match_history`], but on a worker thread.
    pub fn get_match_history_async(&self, count: u32) -> AsyncData<Vec<MatchSummary>> {
        let client = Arc::clone(&self.lcu_client);
        self.async_wrapper(move || DataManager::retrieve_match_history(&client, count))
    }

    pub fn refresh(&self) -> DataRetrievalResult<()> {
        self.lcu_client.lock().unwrap_or_else(PoisonError::into_inner).refresh()
    }

    // Generic async wrapper that executes fetch in a thread
    fn async_wrapper<T, F>(&self, fetch_fn: F) -> AsyncData<T>
    where
        T: Send + 'static,
        F: FnOnce() -> DataRetrievalResult<T> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = fetch_fn();
            tx.send(result).ok();
        });

        AsyncData::new(rx)
    }

    fn retrieve_match_history(
        client: &Mutex<LcuClient>,
        count: u32,
    ) -> DataRetrievalResult<Vec<MatchSummary>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let raw = client
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fetch_match_history(count)?;
        let games = parse_match_history(&raw)?;
        tracing::info!(requested = count, decoded = games.len(), "match history loaded");
        Ok(games)
    }
}
