//! Convert command handler

use crate::cli::config::CliConfig;
use crate::cli::error::CliError;
use crate::convert::{ConversionError, transform};
use crate::export::{ExportResult, JSONExporter};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Input source for conversion
#[derive(Debug, Clone)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    String(String),
}

impl InputSource {
    /// `-` means stdin, anything else is a file path
    pub fn from_arg(input: &str) -> Self {
        if input == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(input))
        }
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    pub input: InputSource,
    /// Write to this file instead of stdout
    pub output: Option<PathBuf>,
    pub force: bool,
    pub pretty: bool,
}

impl ConvertArgs {
    /// Build arguments from command-line flags and the loaded configuration.
    ///
    /// `--compact` always wins; otherwise `[output] pretty` decides.
    pub fn from_flags(
        input: &str,
        output: Option<PathBuf>,
        force: bool,
        compact: bool,
        config: &CliConfig,
    ) -> Self {
        Self {
            input: InputSource::from_arg(input),
            output,
            force,
            pretty: config.output.pretty && !compact,
        }
    }
}

/// Load input content from InputSource
pub fn load_input(input: &InputSource) -> Result<String, CliError> {
    match input {
        InputSource::File(path) => std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.clone(), e.to_string())),
        InputSource::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
            Ok(buffer)
        }
        InputSource::String(content) => Ok(content.clone()),
    }
}

/// Check if file exists and handle overwrite
pub fn check_file_overwrite(output_path: &Path, force: bool) -> Result<(), CliError> {
    if output_path.exists() && !force {
        return Err(CliError::InvalidArgument(format!(
            "Output file exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }
    Ok(())
}

/// Write output to file, creating parent directories if needed
pub fn write_output(output_path: &Path, content: &str) -> Result<(), CliError> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::FileWriteError(
                output_path.to_path_buf(),
                format!("Failed to create directory: {}", e),
            )
        })?;
    }

    std::fs::write(output_path, content)
        .map_err(|e| CliError::FileWriteError(output_path.to_path_buf(), e.to_string()))
}

/// Run the conversion and return the exported document.
pub fn run_convert(args: &ConvertArgs) -> Result<ExportResult, CliError> {
    let xml = load_input(&args.input)?;

    export_config(&xml, args.pretty).map_err(|e| {
        error!("Conversion failed: {}", e);
        CliError::ConversionFailed(e)
    })
}

fn export_config(xml: &str, pretty: bool) -> Result<ExportResult, ConversionError> {
    let config = transform(xml)?;
    Ok(JSONExporter { pretty }.export(&config)?)
}

/// Handle the convert command
pub fn handle_convert(args: &ConvertArgs) -> Result<(), CliError> {
    if let Some(output) = &args.output {
        check_file_overwrite(output, args.force)?;
    }

    let result = run_convert(args)?;

    match &args.output {
        Some(output) => {
            write_output(output, &result.content)?;
            info!(
                "Wrote {} emulator configuration to {}",
                result.format,
                output.display()
            );
        }
        None => println!("{}", result.content),
    }

    Ok(())
}
