use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use vicarkit::utils::logger::Logger;
use vicarkit::commands::{CommandFactory, VicarkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("VicarKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert VICAR planetary images to greyscale PNG")
        .arg(
            Arg::new("input")
                .help("Input VICAR file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output PNG file (default: input name without its last two extensions, plus .png)")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output and a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("List the label and image geometry instead of converting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy-height")
                .long("legacy-height")
                .help("Compute the output height as N1*N3 as older VICAR converters do")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Operations log file")
                .value_name("FILE")
                .default_value("vicarkit.log"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    let log_file = matches
        .get_one::<String>("log-file")
        .map(String::as_str)
        .unwrap_or("vicarkit.log");

    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("vicarkit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let input = matches.get_one::<String>("input").cloned().unwrap_or_default();
    let factory = VicarkitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error for {}: {}", input, e);
                eprintln!("Error: {}: {}", input, e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
