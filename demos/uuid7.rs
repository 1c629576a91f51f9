//! Simple command that prints one or '-n count' UUIDv7 strings, or inspects '-i uuid' strings

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::EnvFilter;
use uuid7_codec::{parse_with, variant_of, HyphenPolicy, Version};

enum Command {
    Generate(usize),
    Inspect(Vec<String>, HyphenPolicy),
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let command = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] | [--strict] -i uuid...",
                    program.as_deref().unwrap_or("uuid7")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match command {
        Command::Generate(count) => {
            for _ in 0..count {
                match uuid7_codec::uuid7() {
                    Ok(uuid) => writeln!(buf, "{}", uuid)?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
        Command::Inspect(inputs, policy) => {
            let mut status = ExitCode::SUCCESS;
            for input in inputs {
                match parse_with(&input, policy) {
                    Ok(bytes) => writeln!(
                        buf,
                        "{}\tversion={}\tvariant={:?}",
                        uuid7_codec::format(&bytes, uuid7_codec::Case::Lower),
                        Version::of(&bytes),
                        variant_of(&bytes)
                    )?,
                    Err(err) => {
                        writeln!(buf, "{}\terror: {}", input, err)?;
                        status = ExitCode::FAILURE;
                    }
                }
            }
            return Ok(status);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut count = None;
    let mut inputs = Vec::new();
    let mut policy = HyphenPolicy::Anywhere;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            "-i" => {
                let Some(i_arg) = args.next() else {
                    return Err("argument to option 'i' missing".to_owned());
                };
                inputs.push(i_arg);
            }
            "--strict" => policy = HyphenPolicy::Canonical,
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    match (count, inputs.is_empty()) {
        (Some(_), false) => Err("options 'n' and 'i' are mutually exclusive".to_owned()),
        (count, true) => Ok(Command::Generate(count.unwrap_or(1))),
        (None, false) => Ok(Command::Inspect(inputs, policy)),
    }
}
