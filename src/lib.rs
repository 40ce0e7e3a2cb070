pub mod app;
pub mod args;
pub mod collection;
pub mod command;
pub mod config;
pub mod config_file;
pub mod copying;
pub mod data_stream;
pub mod errors;
pub mod file_name;
pub mod interrupt;
pub mod logging;
pub mod open;
pub mod picker;
pub mod shell;
pub mod util;
