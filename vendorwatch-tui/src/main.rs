mod app;
mod data;
mod error;
mod pages;
mod route;
mod shell;
mod theme;
mod widgets;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;

fn main() {
    let log_file = File::create("vendorwatch-tui.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = App::new().run() {
        eprintln!("Error: {e}");
    }
}
