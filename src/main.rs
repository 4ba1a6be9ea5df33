use clap::Parser;
use std::io;
use std::process::ExitCode;
use toolbox::domain::ToolboxError;
use toolbox::{Action, App, OptionSet, load_config, output};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let options = match OptionSet::try_parse() {
        Ok(options) => options,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(ToolboxError::Options(err.into()).exit_code());
        }
    };

    init_tracing(options.verbose);

    let result = load_config(&options.project_dir)
        .map_err(ToolboxError::Options)
        .and_then(|config| App::new(config).run(&options, &mut io::stdout().lock()));

    match result {
        Ok(()) => {
            if !options.actions().contains(&Action::ShowHelp) {
                output::success("Concluído");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::failure(&err.to_string());
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
