//! Standard input checks.
//!
//! The tool only reads from a pipe (`go mod graph | modv`); running it with
//! a terminal or a redirected file on stdin is refused.

use std::io;

/// Errors raised while inspecting standard input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Standard input could not be inspected.
    #[error("Failed to stat standard input: {0}")]
    Stat(#[from] io::Error),

    /// Standard input is not a pipe.
    #[error("command is intended to work with pipes")]
    NotAPipe,
}

/// Fails unless standard input is a pipe.
pub fn ensure_piped_stdin() -> Result<(), InputError> {
    if stdin_is_pipe()? {
        Ok(())
    } else {
        Err(InputError::NotAPipe)
    }
}

#[cfg(unix)]
fn stdin_is_pipe() -> Result<bool, InputError> {
    use std::os::fd::AsFd;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    is_fifo(&std::fs::File::from(fd))
}

#[cfg(not(unix))]
fn stdin_is_pipe() -> Result<bool, InputError> {
    use std::io::IsTerminal;

    Ok(!io::stdin().is_terminal())
}

/// Returns true if `file` is a named or anonymous pipe.
#[cfg(unix)]
pub fn is_fifo(file: &std::fs::File) -> Result<bool, InputError> {
    use std::os::unix::fs::FileTypeExt;

    Ok(file.metadata()?.file_type().is_fifo())
}
