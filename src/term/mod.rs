extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::{parse_with_limits, Error, ErrorKind};
use crate::mach::{Limits, Program};
use ansi_term::{Colour, Style};
use linefeed::{Interface, ReadResult};
use log::{info, warn};
use options::Options;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use structopt::StructOpt;

mod options;

const EXIT_OK: i32 = 0;
const EXIT_EXPRESSION: i32 = 1;
const EXIT_PROGRAM_ERROR: i32 = 2;
const EXIT_IO: i32 = 3;

pub fn main() {
    let options = Options::from_args();
    let mut builder = env_logger::builder();
    builder
        .format_timestamp(None)
        .filter_level(options.filter_level());
    if builder.try_init().is_err() {
        eprintln!("Logger already installed");
    }
    let session = Session::new(&options);
    let status = match (&options.expression, &options.file) {
        (Some(expression), _) => session.one_shot(expression),
        (None, Some(path)) => session.batch(path),
        (None, None) => session.interactive(),
    };
    let status = match status {
        Ok(status) => status,
        Err(error) => {
            eprintln!("{}", error);
            EXIT_IO
        }
    };
    std::process::exit(status);
}

struct Session<'a> {
    options: &'a Options,
    limits: Limits,
}

impl<'a> Session<'a> {
    fn new(options: &'a Options) -> Session<'a> {
        Session {
            options,
            limits: options.limits(),
        }
    }

    fn compile(&self, text: &str) -> Result<Program, Error> {
        parse_with_limits(text, &self.options.x_name, &self.options.y_name, &self.limits)
    }

    /// Result text for one expression, with the listing first when asked.
    fn run(&self, text: &str) -> Result<String, Error> {
        let program = self.compile(text)?;
        let value = program.evaluate(self.options.x, self.options.y)?;
        let value = match self.options.precision {
            Some(digits) => format!("{:.*}", digits, value),
            None => value.to_string(),
        };
        if self.options.listing {
            Ok(format!("{}\n{}", program, value))
        } else {
            Ok(value)
        }
    }

    fn one_shot(&self, text: &str) -> std::io::Result<i32> {
        match self.run(text) {
            Ok(result) => {
                println!("{}", result);
                Ok(EXIT_OK)
            }
            Err(error) => {
                eprintln!("{}", decorate_error(&error));
                Ok(exit_status(&error))
            }
        }
    }

    fn batch(&self, path: &std::path::Path) -> std::io::Result<i32> {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        if let Err(error) = ctrlc::set_handler(move || {
            int_moved.store(true, Ordering::SeqCst);
        }) {
            warn!("Ctrl-C handler not installed: {}", error);
        }
        let reader = BufReader::new(File::open(path)?);
        let mut status = EXIT_OK;
        let mut evaluated = 0;
        for (index, line) in reader.lines().enumerate() {
            if interrupted.load(Ordering::SeqCst) {
                eprintln!("INTERRUPTED AFTER {} LINES", evaluated);
                break;
            }
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            evaluated += 1;
            match self.run(&line) {
                Ok(result) => println!("{}", result),
                Err(error) => {
                    eprintln!("{}: {}", index + 1, decorate_error(&error));
                    status = status.max(exit_status(&error));
                }
            }
        }
        info!("{} lines evaluated", evaluated);
        Ok(status)
    }

    fn interactive(&self) -> std::io::Result<i32> {
        let command = Interface::new("parseval")?;
        command.set_prompt("> ")?;
        loop {
            let string = match command.read_line()? {
                ReadResult::Input(string) => string,
                ReadResult::Signal(_) | ReadResult::Eof => break,
            };
            if string.trim().is_empty() {
                continue;
            }
            match self.run(&string) {
                Ok(result) => command.write_fmt(format_args!("{}\n", result))?,
                Err(error) => command.write_fmt(format_args!("{}\n", decorate_error(&error)))?,
            }
            command.add_history_unique(string);
        }
        Ok(EXIT_OK)
    }
}

fn exit_status(error: &Error) -> i32 {
    match error.kind() {
        ErrorKind::Internal => EXIT_PROGRAM_ERROR,
        _ => EXIT_EXPRESSION,
    }
}

fn decorate_error(error: &Error) -> String {
    match error.kind() {
        ErrorKind::Internal => Colour::Red
            .bold()
            .paint(format!("PROGRAM ERROR: {}", error))
            .to_string(),
        _ => Style::new().bold().paint(error.to_string()).to_string(),
    }
}
