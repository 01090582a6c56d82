//! Command implementations for the cb CLI

pub mod add;
pub mod commit;
pub mod completions;
pub mod config;
pub mod create;
pub mod demo;
pub mod helpers;
pub mod init;
pub mod parse;
pub mod remove;
pub mod version;
