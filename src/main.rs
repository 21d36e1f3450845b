use clap::Parser;
use grid_search::cli::dispatcher::Dispatcher;
use grid_search::cli::main_types::Cli;
use grid_search::error::AppError;
use grid_search::storage::config::Config;
use grid_search::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config_dir.as_deref().map(Config::path_in);
    if let Some(path) = &config_path {
        log::debug!("Using config file {}", path.to_string_lossy());
    }

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => exit_with(AppError::from(err)),
    };

    let mut dispatcher = Dispatcher::new(config, config_path);
    match dispatcher.dispatch(cli.command) {
        Ok(output) => println!("{}", output),
        Err(err) => exit_with(err),
    }
}

fn exit_with(err: AppError) -> ! {
    eprintln!("{} Error: {}", err.severity().emoji(), err.display_friendly());
    if let Some(hint) = err.troubleshooting_hint() {
        eprintln!("💡 {}", hint);
    }
    std::process::exit(1);
}
