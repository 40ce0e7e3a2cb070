use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;

pub static HELP: &str = "\
add <file|dir>...     add sound files
list                  show the sound list
remove <n>            remove sound n
up <n> / down <n>     move sound n up or down
swap <n> <m>          exchange sounds n and m
name <n> <name>       rename sound n (1 to 16 characters)
random <n> [on|off]   toggle whether sound n may be played randomly
play <n>              open sound n with the default application
export <file>         write the sound list as JSON
copy <dir>            copy the sounds as 0001.mp3, 0002.mp3, ... into dir
help                  show this text
quit                  exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Add(Vec<String>),
    Remove(usize),
    Up(usize),
    Down(usize),
    Swap(usize, usize),
    Name(usize, String),
    Random(usize, Option<bool>),
    Play(usize),
    Export(String),
    Copy(String),
    Quit,
}

/// Split at whitespace, keeping double quoted parts together.
pub fn split_arguments(line: &str) -> Result<Vec<String>> {
    let mut arguments = vec![];
    let mut current: Option<String> = None;
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.get_or_insert_with(String::new);
            }
            c if c.is_whitespace() && !in_quotes => {
                if let Some(argument) = current.take() {
                    arguments.push(argument);
                }
            }
            c => current.get_or_insert_with(String::new).push(c),
        }
    }
    if in_quotes {
        return Err(anyhow!("Missing closing quote"));
    }
    arguments.extend(current);
    Ok(arguments)
}

fn parse_number(word: Option<&str>) -> Result<usize> {
    let word = word.ok_or_else(|| anyhow!("Missing sound number"))?;
    word.parse::<usize>()
        .context(format!("Not a sound number: {}", word))
}

fn parse_switch(word: &str) -> Result<bool> {
    match word {
        "on" | "yes" | "1" => Ok(true),
        "off" | "no" | "0" => Ok(false),
        _ => Err(anyhow!("Expected on or off, got {}", word)),
    }
}

fn single_argument(rest: &str, what: &str) -> Result<String> {
    let mut arguments = split_arguments(rest)?;
    match arguments.len() {
        1 => Ok(arguments.remove(0)),
        0 => Err(anyhow!("Missing {}", what)),
        _ => Err(anyhow!("Expected a single {}", what)),
    }
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let mut words = rest.split_whitespace();
        Ok(match word {
            "help" | "?" => Command::Help,
            "list" | "ls" => Command::List,
            "add" => Command::Add(split_arguments(rest)?),
            "remove" | "rm" => Command::Remove(parse_number(words.next())?),
            "up" => Command::Up(parse_number(words.next())?),
            "down" => Command::Down(parse_number(words.next())?),
            "swap" => Command::Swap(parse_number(words.next())?, parse_number(words.next())?),
            "name" => {
                let rest = rest.trim_start();
                let (number, name) = rest
                    .split_once(char::is_whitespace)
                    .unwrap_or((rest, ""));
                Command::Name(parse_number(Some(number))?, name.trim_start().to_owned())
            }
            "random" => Command::Random(
                parse_number(words.next())?,
                words.next().map(parse_switch).transpose()?,
            ),
            "play" => Command::Play(parse_number(words.next())?),
            "export" => Command::Export(single_argument(rest, "file")?),
            "copy" => Command::Copy(single_argument(rest, "directory")?),
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(anyhow!("Unknown command: {} (try help)", word)),
        })
    }
}
