use std::{env, fs::read_to_string, path::PathBuf, process::exit, sync::Arc, time::Instant};

use frontend::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use log::{debug, info};

/// What the driver prints once the file parses.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Emit {
    Ast,
    Source,
    Tokens,
}

#[derive(Debug)]
struct Options {
    path: PathBuf,
    emit: Emit,
}

const USAGE: &str = "usage: frontend <file> [--emit=ast|source|tokens]";

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut path = None;
    let mut emit = Emit::Source;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--emit=") {
            emit = match value {
                "ast" => Emit::Ast,
                "source" => Emit::Source,
                "tokens" => Emit::Tokens,
                _ => return Err(format!("unknown emit kind `{}`", value)),
            };
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{}`", arg));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(String::from("expected a single input file"));
        }
    }

    match path {
        Some(path) => Ok(Options { path, emit }),
        None => Err(String::from("missing input file")),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}\n{}", message, USAGE);
            exit(2);
        }
    };

    let file_path = options.path.to_string_lossy().to_string();
    let file_name = match options.path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => file_path.clone(),
    };

    let file_contents = match read_to_string(&options.path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("failed to read {}: {}", file_path, error);
            exit(1);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(file_contents.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &file_contents);
            exit(1);
        }
    };

    info!("Tokenized in {:?}", start.elapsed());
    debug!("{} tokens", tokens.len());

    if options.emit == Emit::Tokens {
        for token in &tokens {
            println!("{}", token.debug());
        }
        return;
    }

    let parse_start = Instant::now();
    let program = match parse(tokens, Arc::new(file_name)) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &file_contents);
            exit(1);
        }
    };

    info!("Parsed in {:?}", parse_start.elapsed());
    debug!("{} items", program.items.len());
    info!("Total time: {:?}", start.elapsed());

    match options.emit {
        Emit::Ast => println!("{:#?}", program),
        Emit::Source => print!("{}", program),
        Emit::Tokens => {}
    }
}
