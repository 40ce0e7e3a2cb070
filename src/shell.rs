use std::io::Write;
use std::io::{self};

use anyhow::anyhow;
use anyhow::Result;
use itertools::Itertools;
use log::error;
use text_io::try_read;

use crate::app::App;
use crate::collection::Sound;
use crate::command::Command;
use crate::command::HELP;
use crate::copying::CopyOutcome;

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    let _ = io::stdout().flush();
    let line: Result<String, _> = try_read!("{}\n");
    line.ok().map(|line| line.trim_end_matches('\r').to_owned())
}

pub fn ask_cancel_confirmation() -> bool {
    prompt("Really cancel copying? [y/N] ")
        .map(|answer| matches!(answer.trim(), "y" | "Y" | "yes"))
        .unwrap_or(false)
}

pub fn print_sounds(app: &App) {
    if app.sounds.is_empty() {
        println!("No sounds yet. Add some with: add <file|dir>...");
    } else {
        println!("{}", app.sounds.iter().join("\n"));
    }
}

/// A line based stand-in for the sound list window.
pub struct Shell {
    app: App,
}

impl Shell {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    pub fn run(mut self) -> Result<()> {
        println!("Type help for a list of commands.");
        while let Some(line) = prompt("> ") {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    if let Err(e) = self.execute(command) {
                        error!("{:#}", e);
                    }
                }
                Err(e) => error!("{:#}", e),
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        let sounds = &mut self.app.sounds;
        match command {
            Command::Help => println!("{}", HELP),
            Command::List => print_sounds(&self.app),
            Command::Add(inputs) => {
                let num_added = self.app.add_sounds(&inputs);
                println!("Added {} sounds.", num_added);
            }
            Command::Remove(number) => {
                let id = sounds.get(number).map(Sound::id).ok_or_else(|| no_sound(number))?;
                sounds.remove(id);
            }
            Command::Up(number) => {
                let id = sounds.get(number).map(Sound::id).ok_or_else(|| no_sound(number))?;
                sounds.move_up(id);
            }
            Command::Down(number) => {
                let id = sounds.get(number).map(Sound::id).ok_or_else(|| no_sound(number))?;
                sounds.move_down(id);
            }
            Command::Swap(a, b) => {
                if a == 0 || b == 0 {
                    return Err(anyhow!("Sound numbers start at 1"));
                }
                sounds.swap(a - 1, b - 1);
            }
            Command::Name(number, name) => {
                let sound = sounds.get_mut(number).ok_or_else(|| no_sound(number))?;
                sound.set_name(&name)?;
            }
            Command::Random(number, allow_random) => {
                let sound = sounds.get_mut(number).ok_or_else(|| no_sound(number))?;
                match allow_random {
                    Some(allow_random) => sound.set_allow_random(allow_random),
                    None => sound.toggle_allow_random(),
                }
            }
            Command::Play(number) => self.app.play(number)?,
            Command::Export(input) => {
                if let Some(path) = self.app.export_json(&input)? {
                    println!("Wrote {:?}", path);
                }
            }
            Command::Copy(input) => {
                report_copy(self.app.copy_sound_files(&input, ask_cancel_confirmation)?)
            }
            Command::Quit => {}
        }
        Ok(())
    }
}

fn no_sound(number: usize) -> anyhow::Error {
    anyhow!("No sound with number {}", number)
}

pub fn report_copy(outcome: Option<CopyOutcome>) {
    match outcome {
        Some(CopyOutcome::Completed { copied }) => println!("Copied {} sounds.", copied),
        Some(CopyOutcome::Cancelled { copied }) => {
            println!("Cancelled. {} sounds were copied.", copied)
        }
        None => {}
    }
}
