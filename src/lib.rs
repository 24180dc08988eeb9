//! Reads the match history of the summoner logged into the running League
//! client through its local API.
//!
//! The pipeline is lockfile -> session -> one blocking request -> decoded
//! [`model::game::MatchSummary`] list. [`service::data_manager::DataManager`]
//! ties the steps together.

pub mod model;
pub mod service;
pub mod ui;

pub use model::game::{MatchDetail, MatchOutcome, MatchSummary, QueueCategory};
pub use service::{
    config::Config,
    data_manager::DataManager,
    gameapi::error::{ErrorKind, LcuError},
};
