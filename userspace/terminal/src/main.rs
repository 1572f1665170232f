//! The windowed command terminal.
//!
//! Creates a window, paints a prompt, and evaluates each entered line
//! against a small built-in command table.

#![no_std]
#![no_main]

use liblynx::console::{Console, ConsoleConfig};
use liblynx::window::{Colour, Window, WindowSpec};
use liblynx::{format, String};

const PROMPT: &str = "lynx $ ";

fn evaluate(line: &str) -> Option<String> {
    match line {
        "" => None,
        "hello" => Some(String::from("Hello there")),
        "doom" => Some(String::from("Doom runs on lynx!")),
        "pid" => {
            let pid = liblynx::process::id(&liblynx::KernelGateway);
            Some(format!("pid {}", pid))
        }
        _ => Some(format!("Unknown command: {}", line)),
    }
}

liblynx::main! {
    liblynx::logger::init(log::LevelFilter::Info);

    let gateway = liblynx::KernelGateway;
    let spec = WindowSpec {
        x: 100,
        y: 100,
        width: 500,
        height: 350,
        name: "Terminal",
        colour: Colour::new(0x363636),
    };
    let window = match Window::create(&gateway, &spec, false) {
        Ok(window) => window,
        Err(err) => {
            log::error!("terminal: window creation failed: {}", err);
            liblynx::process::exit(&gateway);
        }
    };

    let mut console = match Console::new(window, PROMPT, ConsoleConfig::default()) {
        Ok(console) => console,
        Err(err) => {
            log::error!("terminal: initial paint failed: {}", err);
            liblynx::process::exit(&gateway);
        }
    };

    if let Err(err) = console.run(evaluate) {
        log::error!("terminal: event loop failed: {}", err);
    }
}
