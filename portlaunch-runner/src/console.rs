use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

pub const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// Block until the user presses Enter.
///
/// Does nothing when stdin is not a terminal, so piped and scheduled runs
/// never hang.
pub fn pause() -> io::Result<()> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        debug!("stdin is not a terminal, skipping pause");
        return Ok(());
    }
    pause_with(&mut stdin.lock(), &mut io::stdout())
}

pub fn pause_with<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    write!(output, "{}", PAUSE_PROMPT)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Switch the console to the UTF-8 code page. Failures are logged and
/// otherwise ignored.
#[cfg(windows)]
pub fn enable_utf8_console() {
    use std::process::{Command, Stdio};
    use tracing::warn;

    let status = Command::new("cmd")
        .args(["/C", "chcp", "65001"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => debug!("Console code page set to 65001"),
        Ok(status) => warn!(exit_code = ?status.code(), "chcp 65001 failed"),
        Err(e) => warn!(error = %e, "Failed to run chcp"),
    }
}

#[cfg(not(windows))]
pub fn enable_utf8_console() {
    debug!("Console code page is only set on Windows");
}
