use std::env;
use std::path::PathBuf;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use log::warn;
use soundpicker::app::App;
use soundpicker::args::Action;
use soundpicker::args::Opts;
use soundpicker::config_file::ConfigFile;
use soundpicker::interrupt::Interrupt;
use soundpicker::logging::get_log_level;
use soundpicker::logging::init_logging;
use soundpicker::shell::ask_cancel_confirmation;
use soundpicker::shell::report_copy;
use soundpicker::shell::Shell;

fn main() -> Result<()> {
    let args = Opts::parse();
    let config_file = ConfigFile::read(args.config.as_deref())?;
    init_logging(get_log_level(args.verbose, &config_file.log_level)?)?;
    let interrupt = Interrupt::default();
    interrupt.set_ctrl_handler()?;
    let app = App::new(&config_file, config_file.open_after && !args.no_open, interrupt);
    run_soundpicker(app, args.action())
}

fn run_soundpicker(app: App, action: Action) -> Result<()> {
    match action {
        Action::Interactive { files } => {
            let mut app = app;
            if !files.is_empty() && app.add_sounds(&files) == 0 {
                warn!("None of the given files could be added");
            }
            Shell::new(app).run()
        }
        Action::Export { files, output } => {
            let mut app = app.resolve_from(&working_dir()?);
            add_files(&mut app, &files)?;
            app.export_json(&output)?
                .ok_or_else(|| anyhow!("Cannot write to {}", output))?;
            Ok(())
        }
        Action::Copy { files, destination } => {
            let mut app = app.resolve_from(&working_dir()?);
            add_files(&mut app, &files)?;
            let outcome = app
                .copy_sound_files(&destination, ask_cancel_confirmation)?
                .ok_or_else(|| anyhow!("Not a directory: {}", destination))?;
            report_copy(Some(outcome));
            Ok(())
        }
    }
}

fn add_files(app: &mut App, files: &[String]) -> Result<()> {
    if app.add_sounds(files) == 0 {
        return Err(anyhow!("No sound files found!"));
    }
    Ok(())
}

fn working_dir() -> Result<PathBuf> {
    env::current_dir().context("While looking up the working directory")
}
