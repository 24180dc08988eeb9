use std::sync::mpsc::{Receiver, RecvError, TryRecvError};

use crate::service::gameapi::error::{ErrorKind, LcuError};

const DISCONNECTED_MESSAGE: &str = "Data fetch failed: channel disconnected";

pub enum DataState<T> {
    Loading,
    Loaded(T),
    Error {
        /// `None` when the worker went away without reporting anything.
        kind: Option<ErrorKind>,
        message: String,
    },
}

/// Result of a fetch running on a worker thread, polled by the caller.
pub struct AsyncData<T> {
    state: DataState<T>,
    receiver: Option<Receiver<Result<T, LcuError>>>,
}

impl<T> AsyncData<T> {
    pub fn new(receiver: Receiver<Result<T, LcuError>>) -> Self {
        Self {
            state: DataState::Loading,
            receiver: Some(receiver),
        }
    }

    /// Picks up the result if the worker is done, never blocks.
    pub fn try_update(&mut self) {
        if let Some(rx) = &self.receiver {
            match rx.try_recv() {
                Ok(result) => {
                    self.state = Self::state_from(Ok(result));
                    self.receiver = None; // Done receiving
                }
                Err(TryRecvError::Empty) => {
                    // Still loading, do nothing
                }
                Err(TryRecvError::Disconnected) => {
                    self.state = Self::state_from(Err(RecvError));
                    self.receiver = None;
                }
            }
        }
    }

    /// Blocks until the worker reports back.
    pub fn wait(&mut self) {
        if let Some(rx) = self.receiver.take() {
            self.state = Self::state_from(rx.recv());
        }
    }

    fn state_from(received: Result<Result<T, LcuError>, RecvError>) -> DataState<T> {
        match received {
            Ok(Ok(data)) => DataState::Loaded(data),
            Ok(Err(e)) => DataState::Error {
                kind: Some(e.kind()),
                message: e.to_string(),
            },
            Err(RecvError) => DataState::Error {
                kind: None,
                message: DISCONNECTED_MESSAGE.to_string(),
            },
        }
    }

    pub fn get_data(&self) -> Option<&T> {
        match &self.state {
            DataState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, DataState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            DataState::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match &self.state {
            DataState::Error { kind, .. } => *kind,
            _ => None,
        }
    }
}
