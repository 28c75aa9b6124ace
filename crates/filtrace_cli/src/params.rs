//! Implementation of the `filtrace params` subcommands.

use std::io::Write;
use std::path::Path;

use filtrace_diagnostics::Diagnostics;
use filtrace_params::{load_params, write_default_params, PARAMS_FILE_NAME};

/// Runs `filtrace params init`.
///
/// Writes a defaults file into `dir`, refusing to overwrite an existing one
/// unless `force` is set. Returns the process exit code.
pub fn init<W: Write>(dir: &Path, force: bool, diag: &mut Diagnostics<W>) -> i32 {
    if dir.join(PARAMS_FILE_NAME).exists() && !force {
        return diag
            .error(format_args!(
                "{PARAMS_FILE_NAME} already exists in {}; pass --force to overwrite\n",
                dir.display()
            ))
            .code();
    }

    match write_default_params(dir) {
        Ok(path) => {
            filtrace_diagnostics::progress!(diag, "wrote default parameters to {}\n", path.display());
            0
        }
        Err(e) => diag
            .error(format_args!("could not write {PARAMS_FILE_NAME}: {e}\n"))
            .code(),
    }
}

/// Runs `filtrace params show`.
///
/// Loads the parameters file from `dir` and prints the resolved values.
/// Returns the process exit code.
pub fn show<W: Write>(dir: &Path, diag: &mut Diagnostics<W>) -> i32 {
    let params = match load_params(dir) {
        Ok(params) => params,
        Err(e) => {
            return diag
                .error(format_args!(
                    "could not load {PARAMS_FILE_NAME} from {}: {e}\n",
                    dir.display()
                ))
                .code();
        }
    };

    match toml::to_string_pretty(&params) {
        Ok(text) => {
            print!("{text}");
            0
        }
        Err(e) => diag
            .error(format_args!("could not render parameters: {e}\n"))
            .code(),
    }
}
