/**
 * Stache Compiler CLI - stachec
 *
 * Reads a template from a file or stdin and prints its tree (or tokens) as JSON
 */
use env_logger::Env;
use stache_compiler_cli::{command, run};
use std::process;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let matches = command().get_matches();
    match run(&matches) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
