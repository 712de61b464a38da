use std::env;
use std::path::Path;

use crate::engine::{select_squad, Rng, SelectionConfig};
use crate::export::{build_plan, default_export_filename, generation_timestamp, write_plan};
use crate::roster::load_roster_file;
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Select,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("select") => Some(Command::Select),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Select) => handle_select(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: randops <select|validate|serve>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("RANDOPS_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_select(args: &[String]) -> i32 {
    let Some(path) = args.get(2).filter(|arg| !arg.starts_with("--")) else {
        eprintln!(
            "usage: randops select <roster.json> [--weighted] [--ignore-unleveled] [--seed N] [--out PATH | --save]"
        );
        return 2;
    };

    let config = SelectionConfig {
        use_level_weighting: args.iter().any(|arg| arg == "--weighted"),
        ignore_unleveled_base: args.iter().any(|arg| arg == "--ignore-unleveled"),
    };

    let roster = match load_roster_file(path) {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("load failed: {err}");
            return 1;
        }
    };
    for diagnostic in &roster.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let seed = parse_seed_arg(args).unwrap_or_else(|| Rng::from_entropy().next_u64());
    let mut rng = Rng::new(seed);

    let selection = match select_squad(&roster.operators, config, &mut rng) {
        Ok(selection) => selection,
        Err(err) => {
            eprintln!("selection failed: {err}");
            return 1;
        }
    };
    eprintln!(
        "selected {} operators from {} (seed {seed})",
        selection.len(),
        roster.operators.len()
    );

    let plan = build_plan(&selection, &generation_timestamp());

    let out_path = flag_value(args, "--out").map(String::from).or_else(|| {
        args.iter()
            .any(|arg| arg == "--save")
            .then(default_export_filename)
    });
    match out_path {
        Some(out) => match write_plan(Path::new(&out), &plan) {
            Ok(()) => {
                println!("plan written to {out}");
                0
            }
            Err(err) => {
                eprintln!("export failed: {err}");
                1
            }
        },
        None => match serde_json::to_string_pretty(&plan) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize plan: {err}");
                1
            }
        },
    }
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: randops validate <roster.json>");
        return 2;
    };

    match load_roster_file(path) {
        Ok(roster) => {
            println!(
                "validation passed: {} operator(s), {} entries dropped",
                roster.operators.len(),
                roster.dropped_entries()
            );
            for diagnostic in &roster.diagnostics {
                eprintln!("- {diagnostic}");
            }
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

fn parse_seed_arg(args: &[String]) -> Option<u64> {
    let raw = flag_value(args, "--seed")?;
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            eprintln!("invalid seed '{raw}', using an entropy seed");
            None
        }
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let position = args.iter().position(|arg| arg == flag)?;
    args.get(position + 1).map(String::as_str)
}
