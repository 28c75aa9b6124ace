//! Parameters-file loading and default-file writing.

use crate::error::ParamsError;
use crate::types::Params;
use std::path::{Path, PathBuf};

/// The literal file name the parameters are resolved from.
pub const PARAMS_FILE_NAME: &str = "default.parameters";

/// Loads `<dir>/default.parameters` and parses it into a [`Params`] value.
pub fn load_params(dir: &Path) -> Result<Params, ParamsError> {
    let path = dir.join(PARAMS_FILE_NAME);
    let content = std::fs::read_to_string(&path)?;
    load_params_from_str(&content)
}

/// Parses a parameters file from a string.
///
/// Useful for testing without filesystem dependencies. Unknown keys are
/// ignored so older binaries keep working against newer files.
pub fn load_params_from_str(content: &str) -> Result<Params, ParamsError> {
    toml::from_str(content).map_err(|e| ParamsError::Parse(e.to_string()))
}

/// Writes a fresh `default.parameters` with default values into `dir`.
///
/// Overwrites any existing file. Returns the path that was written.
pub fn write_default_params(dir: &Path) -> Result<PathBuf, ParamsError> {
    let path = dir.join(PARAMS_FILE_NAME);
    let content = toml::to_string_pretty(&Params::default())
        .map_err(|e| ParamsError::Serialize(e.to_string()))?;
    std::fs::write(&path, content)?;
    Ok(path)
}
