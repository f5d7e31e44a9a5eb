extern crate clap;
extern crate dirls_core;
extern crate env_logger;
extern crate log;

pub mod cli;
pub mod error;
pub mod listing;
pub mod utils;
