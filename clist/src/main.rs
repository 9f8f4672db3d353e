use std::process::ExitCode;

use clap::Parser;
use slist::{LinkedList, ListError};

/// Build a singly-linked list from VALUES and run the requested operations
/// on it, printing the list after every step.
#[derive(Parser, Debug)]
#[command(name = "clist", version, about, allow_negative_numbers = true)]
struct Args {
    /// Initial values, appended in order
    values: Vec<i64>,

    /// Use the recursive variant of every operation that has one
    #[arg(short, long)]
    recursive: bool,

    /// Build the list with push_front instead of push_back
    #[arg(long)]
    front: bool,

    /// Reverse the list
    #[arg(long)]
    reverse: bool,

    /// Delete the first occurrence of a value (repeatable)
    #[arg(short, long = "delete", value_name = "N")]
    deletes: Vec<i64>,

    /// Look up a value
    #[arg(short, long, value_name = "N")]
    find: Option<i64>,

    /// Multiply every value by K
    #[arg(short, long, value_name = "K")]
    scale: Option<i64>,

    /// Pop this many values off the front
    #[arg(short, long, value_name = "COUNT", default_value_t = 0)]
    pop: usize,
}

/// Runs every requested step, pushing one line per step onto `out`. Lines
/// from steps that completed stay in `out` when a later step fails.
fn run(args: &Args, out: &mut Vec<String>) -> Result<(), ListError> {
    let mut list = LinkedList::new();

    for &value in &args.values {
        match (args.front, args.recursive) {
            (true, _) => list.push_front(value),
            (false, true) => list.push_back_recursive(value),
            (false, false) => list.push_back(value),
        }
    }
    out.push(format!("built: {}", list));

    if args.reverse {
        if args.recursive {
            list.reverse_recursive();
        } else {
            list.reverse();
        }
        out.push(format!("reversed: {}", list));
    }

    for value in &args.deletes {
        let removed = if args.recursive {
            list.delete_recursive(value)
        } else {
            list.delete(value)
        };
        out.push(format!("delete {} -> {}: {}", value, removed, list));
    }

    if let Some(value) = args.find {
        let node = if args.recursive {
            list.find_recursive(&value)
        } else {
            list.find(&value)
        };
        match node {
            Some(node) => out.push(format!("find {} -> {:?}", value, node)),
            None => out.push(format!("find {} -> not found", value)),
        }
    }

    if let Some(k) = args.scale {
        let scale = |x: &i64| x.saturating_mul(k);
        if args.recursive {
            list.apply_recursive(scale);
        } else {
            list.apply(scale);
        }
        out.push(format!("scaled by {}: {}", k, list));
    }

    for _ in 0..args.pop {
        let value = list.pop_front()?;
        out.push(format!("popped {}: {}", value, list));
    }

    let length = if args.recursive {
        list.length_recursive()
    } else {
        list.length()
    };
    out.push(format!("length: {}", length));

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut lines = Vec::new();
    let result = run(&args, &mut lines);
    for line in &lines {
        println!("{line}");
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("clist: {err}");
            ExitCode::FAILURE
        }
    }
}
