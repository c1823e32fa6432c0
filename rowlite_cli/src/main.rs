use std::io::{self, Write};

use anyhow::Result;
use rowlite_core::{Database, RowList};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./rowlite.db".to_string());
    let mut db = Database::open(path);
    info!(path = %db.path().display(), "database opened");

    println!("rowlite_cli (type 'help' or 'exit')");

    loop {
        print!("db> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            println!("Failed to read input");
            continue;
        }
        if line.is_empty() {
            break; // EOF
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        if input.eq_ignore_ascii_case("help") {
            print_help();
            continue;
        }

        if input.eq_ignore_ascii_case("tables") {
            let mut names = db.store().tables();
            names.sort_unstable();
            for name in names {
                println!("{name}");
            }
            continue;
        }

        if input.eq_ignore_ascii_case("save") {
            match db.save() {
                Ok(()) => println!("saved to {}", db.path().display()),
                Err(err) => eprintln!("Save error: {err}"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("create ") {
            let mut words = rest.split_whitespace();
            let Some(table) = words.next() else {
                println!("usage: create <table> <col>...");
                continue;
            };
            let columns: Vec<&str> = words.collect();
            match db.store_mut().create_table(table, &columns) {
                Ok(()) => println!("created table {table}"),
                Err(err) => eprintln!("{err}"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("insert ") {
            let mut words = rest.split_whitespace();
            let Some(table) = words.next() else {
                println!("usage: insert <table> col=value...");
                continue;
            };
            let mut values = Vec::new();
            let mut bad = false;
            for pair in words {
                match pair.split_once('=') {
                    Some((column, value)) => values.push((column, value)),
                    None => {
                        println!("expected col=value, got '{pair}'");
                        bad = true;
                        break;
                    }
                }
            }
            if bad {
                continue;
            }
            match db.store_mut().insert(table, &values) {
                Ok(id) => println!("inserted row {id} into {table}"),
                Err(err) => eprintln!("{err}"),
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("rows ") {
            let mut words = rest.split_whitespace();
            let Some(table) = words.next() else {
                println!("usage: rows <table> [locale]");
                continue;
            };
            let locale = words.next();
            let mut list = RowList::of_rows();
            list.load(&db, table, locale, 0);
            for row in &list {
                println!("{row}");
            }
            println!("({} rows)", list.len());
            continue;
        }

        println!("Unknown command, try 'help'");
    }

    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  tables                      -> list tables");
    println!("  create <table> <col>...     -> create a table");
    println!("  insert <table> col=value... -> insert one row");
    println!("  rows <table> [locale]       -> load and print rows");
    println!("  save                        -> write the snapshot");
    println!("  exit|quit                   -> quit");
}
