pub mod error;
pub mod lcu_client;
pub mod lockfile;
pub mod parsing;
pub mod session;
