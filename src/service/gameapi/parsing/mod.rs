pub mod match_history;
pub mod queues;
