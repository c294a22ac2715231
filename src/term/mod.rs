extern crate ansi_term;
extern crate linefeed;
use ansi_term::Style;
use basecalc::lang::Error;
use basecalc::mach::Runtime;
use linefeed::{Interface, ReadResult};
use std::path::Path;

pub fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}

/// Runs a script file. Whatever printed before a failure is still shown.
pub fn run_file(runtime: &mut Runtime, path: &Path) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!(
                "{}",
                Style::new()
                    .bold()
                    .paint(format!("{}: {}", path.display(), error))
            );
            return 1;
        }
    };
    let result = runtime.run(&source);
    if !runtime.printable().is_empty() {
        println!("{}", runtime.printable());
    }
    match result {
        Ok(()) => 0,
        Err(error) => {
            report(&error);
            1
        }
    }
}

pub fn main(runtime: Runtime) -> i32 {
    match main_loop(runtime) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    }
}

fn main_loop(mut runtime: Runtime) -> std::io::Result<()> {
    let interface = Interface::new("basecalc")?;
    interface.set_prompt("> ")?;
    let mut listing: Vec<String> = vec![];
    interface.write_fmt(format_args!("READY.\n"))?;

    loop {
        let input = match interface.read_line()? {
            ReadResult::Input(input) => input,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if !input.trim().is_empty() {
            interface.add_history_unique(input.clone());
        }
        match input.trim().to_ascii_uppercase().as_str() {
            "RUN" => {
                runtime.clear_output();
                let result = runtime.run(&listing.join("\n"));
                if !runtime.printable().is_empty() {
                    interface.write_fmt(format_args!("{}\n", runtime.printable()))?;
                }
                if let Err(error) = result {
                    interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                }
                interface.write_fmt(format_args!("READY.\n"))?;
            }
            "CLEAR" => runtime.clear_output(),
            "LIST" => {
                for (index, line) in listing.iter().enumerate() {
                    interface.write_fmt(format_args!("{:>4} {}\n", index + 1, line))?;
                }
            }
            "NEW" => listing.clear(),
            _ => listing.push(input),
        }
    }
    Ok(())
}
