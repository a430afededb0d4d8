#![allow(dead_code)]

pub mod book_paths;
pub mod config;
pub mod context;
pub mod ledger;
pub mod logging;
