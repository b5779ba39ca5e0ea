use std::io::{IsTerminal, stdout};
use std::process;

use maze::config::Config;
use viewer::Session;

fn main() {
    ctrlc::set_handler(move || {
        println!("Viewer forced to shut down.");
        std::process::exit(0);
    })
    .expect("error setting Ctrl-C handler");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to read configuration.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: Failed to generate maze.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    // Piped output gets a single rendering instead of the interactive view.
    if !stdout().is_terminal() {
        println!("{}", session.summary());
        println!("{}", session.body());
        if session.config.show_iterations {
            println!("{}", session.maze.trace.log());
        }
        return;
    }

    if let Err(e) = viewer::run::run_viewer(&mut session) {
        eprintln!("Error: Viewer stopped unexpectedly.");
        eprintln!("Details: {}.", e);
        process::exit(1);
    }

    println!("{}", session.summary());
}
