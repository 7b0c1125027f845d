// Library for tests to access modules

pub mod classifier;
pub mod config;
pub mod models;
pub mod pipeline;
pub mod prom_repo;
pub mod report;
pub mod version;
