use std::env;
use std::io::{self, Write};
use std::process;

use lumbung::executor::error::ExecuteError;
use lumbung::executor::{execute_statement, StatementResult};
use lumbung::planner::parser::StatementParser;
use lumbung::repl::{print_constants, print_tree, MetaCommand};
use lumbung::storage::table::Table;
use lumbung::types::error::DatabaseError;

fn fatal(error: DatabaseError) -> ! {
    eprintln!("{}", error);
    process::exit(1);
}

fn print_prompt() {
    print!("db > ");
    let _ = io::stdout().flush();
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(filename) = args.get(1) else {
        eprintln!("Must supply a database filename.");
        process::exit(1);
    };

    let mut table = Table::open(filename).unwrap_or_else(|e| fatal(e));
    let parser = StatementParser::new();
    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print_prompt();
        input.clear();
        let bytes_read = match stdin.read_line(&mut input) {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error reading input.");
                process::exit(1);
            }
        };
        if bytes_read == 0 {
            // stdin closed without `.exit`
            eprintln!("Error reading input.");
            process::exit(1);
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('.') {
            match line.parse::<MetaCommand>() {
                Ok(MetaCommand::Exit) => {
                    if let Err(e) = table.close() {
                        fatal(e);
                    }
                    process::exit(0);
                }
                Ok(MetaCommand::Btree) => {
                    if let Err(e) = print_tree(&mut table) {
                        fatal(e);
                    }
                }
                Ok(MetaCommand::Constants) => print_constants(),
                Err(e) => println!("{}", e),
            }
            continue;
        }

        let statement = match parser.parse(line) {
            Ok(statement) => statement,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match execute_statement(statement, &mut table) {
            Ok(StatementResult::Success) => println!("Executed."),
            Ok(StatementResult::Rows(rows)) => {
                for row in rows {
                    println!("{}", row);
                }
                println!("Executed.");
            }
            Err(ExecuteError::Database(e)) => fatal(e),
            Err(e) => println!("{}", e),
        }
    }
}
