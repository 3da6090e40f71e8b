// Library root
// -----------
// The binary (`main.rs`) parses arguments and hands them to `app::run`.
//
// Module responsibilities:
// - `source`: reads the script from disk.
// - `exclude`: strips `-- PASTEBIN EXCLUDE` regions.
// - `api`: the Pastebin client and the `Transport` seam used in tests.
// - `app`: runs the three steps once and prints the import instructions.
// - `error` / `logging`: shared error type and tracing setup.
pub mod api;
pub mod app;
pub mod error;
pub mod exclude;
pub mod logging;
pub mod source;

pub use api::{PasteCode, PasteOptions, PastebinClient};
pub use error::{PasteError, Result};
