pub mod cli;
pub mod config;
pub mod extractor;
pub mod logging;
pub mod metrics;
pub mod reflection;
pub mod tag;
pub mod validator;
