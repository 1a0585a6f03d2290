use clap::Parser;
use hashcheck_cli::cli::{Cli, handle_parse_error};
use hashcheck_cli::error::ExitCode;
use hashcheck_cli::terminal;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => std::process::exit(handle_parse_error(error).code()),
    };

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("hashcheck_core", log::LevelFilter::Debug)
            .filter_module("hashcheck_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = hashcheck_cli::load_config(&cli);
    let color_enabled = hashcheck_cli::color_enabled(&cli, config.as_ref().ok());
    colored::control::set_override(terminal::should_use_color(color_enabled));

    let result = config.and_then(|config| hashcheck_cli::check(&cli, &config));
    let exit_code = match result {
        Ok(report) => {
            println!("{report}");
            ExitCode::Success
        }
        Err(error) => {
            log::debug!("Check failed: {error}");
            eprint!("{}", error.format_for_user(cli.debug));
            error.exit_code()
        }
    };

    std::process::exit(exit_code.code());
}
