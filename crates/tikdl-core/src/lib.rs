pub mod config;
pub mod error;
pub mod logging;

pub mod archive;
pub mod fetch;
pub mod link;
pub mod pipeline;
pub mod storage;
