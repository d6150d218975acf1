extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use apcsp::mach::{Config, InputProvider, Interpreter, Output, OutputKind, Status, StatusObserver};
use ansi_term::{Colour, Style};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::fs;

const USAGE: &str = "usage: apcsp [--seed N] [--steps N] <program>";

pub fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            std::process::exit(2);
        }
    };
    let source = match fs::read_to_string(&args.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}: {}", args.path, error);
            std::process::exit(2);
        }
    };
    match run(&source, args.config) {
        Ok(Status::Finished) => {}
        Ok(_) => std::process::exit(1),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn run(source: &str, config: Config) -> std::io::Result<Status> {
    let mut interpreter = Interpreter::new(config);
    let stop = interpreter.stop_handle();
    if let Err(error) = ctrlc::set_handler(move || stop.stop()) {
        eprintln!("Error setting Ctrl-C handler: {}", error);
    }
    let mut console = Console::new()?;
    let outcome = interpreter.run(source, &mut console);
    Ok(outcome.status)
}

#[derive(Debug)]
struct Args {
    config: Config,
    path: String,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Args, String> {
    let mut config = Config::default();
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => config.seed = Some(number(&arg, args.next())?),
            "--steps" => config.step_limit = number(&arg, args.next())?,
            _ if arg.starts_with("--") => return Err(format!("unknown option {}", arg)),
            _ if path.is_none() => path = Some(arg),
            _ => return Err(format!("unexpected argument {}", arg)),
        }
    }
    match path {
        Some(path) => Ok(Args { config, path }),
        None => Err("missing program path".to_string()),
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    match value.as_deref().map(str::parse) {
        Some(Ok(n)) => Ok(n),
        _ => Err(format!("{} needs a number", flag)),
    }
}

struct Console {
    interface: Interface<DefaultTerminal>,
}

impl Console {
    fn new() -> std::io::Result<Console> {
        let interface = Interface::new("apcsp")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console { interface })
    }
}

impl Output for Console {
    fn emit(&mut self, line: &str, kind: OutputKind) {
        let result = match kind {
            OutputKind::Normal => self.interface.write_fmt(format_args!("{}\n", line)),
            OutputKind::System => self
                .interface
                .write_fmt(format_args!("{}\n", Style::new().dimmed().paint(line))),
            OutputKind::Error => self
                .interface
                .write_fmt(format_args!("{}\n", Colour::Red.bold().paint(line))),
        };
        if let Err(error) = result {
            eprintln!("{}", error);
        }
    }
}

impl InputProvider for Console {
    fn request_input(&mut self, prompt: Option<&str>) -> Option<String> {
        let prompt = format!("{} ", prompt.unwrap_or("Input").trim_end());
        if let Err(error) = self.interface.set_prompt(&prompt) {
            eprintln!("{}", error);
            return None;
        }
        match self.interface.read_line() {
            Ok(ReadResult::Input(string)) => {
                self.interface.add_history_unique(string.clone());
                Some(string)
            }
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => None,
            Err(error) => {
                eprintln!("{}", error);
                None
            }
        }
    }
}

impl StatusObserver for Console {}
