//! sc-fileaccess - Entry Point
//!
//! Prints where the file access service places private and temporary files.

use log::{error, info};
use std::process::ExitCode;
use std::sync::Arc;

use sc_fileaccess::error::handlers::{error_to_exit_code, handle_error};
use sc_fileaccess::utils::logging::setup_logging;
use sc_fileaccess::{FileAccessConfig, FileAccessError, FileAccessService};

const USAGE: &str = "usage: sc-fileaccess <home | file NAME | dir SEGMENT... | temp-file | temp-dir>";

fn run(service: &FileAccessService, args: &[String]) -> Option<Result<String, FileAccessError>> {
    let display = |path: std::path::PathBuf| path.to_string_lossy().to_string();

    let result = match args {
        [cmd] if cmd == "home" => service.resolve_home_path(),
        [cmd, name] if cmd == "file" => service
            .get_private_persistent_file(name)
            .map(|handle| display(handle.into_path())),
        [cmd, segments @ ..] if cmd == "dir" && !segments.is_empty() => service
            .get_private_persistent_directory_from_segments(segments)
            .map(|handle| display(handle.into_path())),
        [cmd] if cmd == "temp-file" => service.get_temporary_file().map(display),
        [cmd] if cmd == "temp-dir" => service.get_temporary_directory().map(display),
        _ => return None,
    };
    Some(result)
}

fn main() -> ExitCode {
    setup_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let service = FileAccessService::new();
    match FileAccessConfig::load() {
        Ok(config) => {
            info!(
                "Home directory location {}, name {}",
                config.home_dir_location, config.home_dir_name
            );
            service.set_configuration_service(Arc::new(config));
        }
        // Temp commands still work without configuration.
        Err(e) => error!("Failed to load configuration: {}", e),
    }

    match run(&service, &args) {
        Some(Ok(path)) => {
            println!("{}", path);
            ExitCode::SUCCESS
        }
        Some(Err(e)) => {
            handle_error(&e);
            ExitCode::from(error_to_exit_code(&e) as u8)
        }
        None => {
            eprintln!("{}", USAGE);
            ExitCode::from(64)
        }
    }
}
