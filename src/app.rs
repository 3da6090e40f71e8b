// Top-level routine: load the script, strip excluded regions, publish it and
// print how to fetch it on the computer. Everything arrives as parameters so
// the pipeline can run against a stub transport.

use crate::api::{PasteCode, PasteOptions, PastebinClient, Transport};
use crate::error::Result;
use crate::exclude::strip_excluded;
use crate::source::read_source;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Line printed once the paste exists.
pub fn import_instructions(code: &PasteCode, filename: &Path) -> String {
    format!(
        "Done, to import into the computer run \npastebin get {} {}",
        code,
        filename.display()
    )
}

/// Upload `path` with `dev_key` and write the import instructions to `out`.
/// Nothing is sent if the file cannot be read.
pub fn run<T: Transport>(
    client: &PastebinClient<T>,
    dev_key: &str,
    path: &Path,
    options: &PasteOptions,
    out: &mut impl Write,
) -> anyhow::Result<PasteCode> {
    let program = read_source(path)?;
    let code = strip_excluded(&program);
    tracing::debug!(before = program.len(), after = code.len(), "filtered source");

    tracing::info!(file = %path.display(), "uploading to pastebin");
    let paste = with_spinner("Uploading...", || client.paste(dev_key, &code, options))?;
    tracing::info!(code = %paste, "paste created");

    writeln!(out, "{}", import_instructions(&paste, path))?;
    Ok(paste)
}

/// Run `f` while a spinner is shown on stderr.
fn with_spinner<R>(msg: &'static str, f: impl FnOnce() -> Result<R>) -> Result<R> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = f();
    spinner.finish_and_clear();
    result
}
