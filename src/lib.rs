// Library for tests to access modules

pub mod client;
pub mod config;
pub mod format;
pub mod mock;
pub mod models;
pub mod version;
