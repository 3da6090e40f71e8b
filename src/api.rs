// API client module: a small blocking client for the Pastebin paste API.
// The HTTP call sits behind the `Transport` trait so the request building
// and response parsing can be exercised without network access.

use crate::error::{PasteError, Result};
use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::blocking::Client;
use serde::Serialize;
use std::fmt;

/// Paste creation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://pastebin.com/api/api_post.php";
/// Environment variable that overrides `DEFAULT_ENDPOINT`.
pub const ENDPOINT_ENV: &str = "PASTEBIN_API_URL";
/// Syntax highlighting used for ComputerCraft scripts.
pub const DEFAULT_FORMAT: &str = "lua";
/// Label used when no file name is available.
pub const DEFAULT_NAME: &str = "Untitled";

static PASTE_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/(\w+)$").unwrap());

/// How long Pastebin keeps the paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Expiration {
    #[value(name = "N")]
    Never,
    #[value(name = "10M")]
    TenMinutes,
    #[default]
    #[value(name = "1H")]
    OneHour,
    #[value(name = "1D")]
    OneDay,
    #[value(name = "1W")]
    OneWeek,
    #[value(name = "2W")]
    TwoWeeks,
    #[value(name = "1M")]
    OneMonth,
    #[value(name = "6M")]
    SixMonths,
    #[value(name = "1Y")]
    OneYear,
}

impl Expiration {
    /// Value of the `api_paste_expire_date` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Expiration::Never => "N",
            Expiration::TenMinutes => "10M",
            Expiration::OneHour => "1H",
            Expiration::OneDay => "1D",
            Expiration::OneWeek => "1W",
            Expiration::TwoWeeks => "2W",
            Expiration::OneMonth => "1M",
            Expiration::SixMonths => "6M",
            Expiration::OneYear => "1Y",
        }
    }
}

/// Who can see the paste. Pastebin only accepts `Private` together with a
/// user key, so uploads default to `Unlisted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Visibility {
    Public,
    #[default]
    Unlisted,
    Private,
}

impl Visibility {
    /// Value of the `api_paste_private` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "0",
            Visibility::Unlisted => "1",
            Visibility::Private => "2",
        }
    }
}

/// Settings for a single paste besides its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteOptions {
    pub name: String,
    pub format: String,
    pub expiration: Expiration,
    pub visibility: Visibility,
}

impl Default for PasteOptions {
    fn default() -> Self {
        PasteOptions {
            name: DEFAULT_NAME.into(),
            format: DEFAULT_FORMAT.into(),
            expiration: Expiration::default(),
            visibility: Visibility::default(),
        }
    }
}

/// Form body of a paste request. Field names are the ones Pastebin expects.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PasteRequest {
    pub api_dev_key: String,
    pub api_option: String,
    pub api_paste_code: String,
    pub api_paste_name: String,
    pub api_paste_format: String,
    pub api_paste_expire_date: String,
    pub api_paste_private: String,
}

impl PasteRequest {
    pub fn new(dev_key: &str, code: &str, options: &PasteOptions) -> Self {
        PasteRequest {
            api_dev_key: dev_key.to_string(),
            api_option: "paste".into(),
            api_paste_code: code.to_string(),
            api_paste_name: options.name.clone(),
            api_paste_format: options.format.clone(),
            api_paste_expire_date: options.expiration.as_str().into(),
            api_paste_private: options.visibility.as_str().into(),
        }
    }
}

/// Identifier Pastebin assigns to a new paste.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteCode(String);

impl PasteCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PasteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pull the paste code out of the URL Pastebin returns. Error messages such
/// as `Bad API request, invalid api_dev_key` end in no `/word` and fail.
pub fn extract_paste_code(body: &str) -> Result<PasteCode> {
    PASTE_CODE_RE
        .captures(body.trim_end())
        .and_then(|caps| caps.get(1))
        .map(|m| PasteCode(m.as_str().to_string()))
        .ok_or_else(|| PasteError::Parse {
            body: body.to_string(),
        })
}

/// Sends a form-encoded POST and returns the response body.
pub trait Transport {
    fn post_form(&self, url: &str, form: &PasteRequest) -> Result<String>;
}

/// `Transport` backed by a reqwest blocking client.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, url: &str, form: &PasteRequest) -> Result<String> {
        let res = self.client.post(url).form(form).send()?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().unwrap_or_else(|_| "".into());
            return Err(PasteError::Status { status, body });
        }
        Ok(res.text()?)
    }
}

/// Pastebin client holding the transport and the endpoint it posts to.
#[derive(Clone)]
pub struct PastebinClient<T = HttpTransport> {
    transport: T,
    endpoint: String,
}

impl PastebinClient<HttpTransport> {
    /// Create a client posting to `endpoint` over HTTP.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Ok(PastebinClient::with_transport(HttpTransport::new()?, endpoint))
    }

    /// Create a client configured from `PASTEBIN_API_URL`, falling back to
    /// the public Pastebin endpoint.
    pub fn from_env() -> Result<Self> {
        let endpoint = std::env::var(ENDPOINT_ENV).unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        PastebinClient::new(endpoint)
    }
}

impl<T: Transport> PastebinClient<T> {
    pub fn with_transport(transport: T, endpoint: impl Into<String>) -> Self {
        PastebinClient {
            transport,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a paste holding `code` and return its identifier.
    pub fn paste(&self, dev_key: &str, code: &str, options: &PasteOptions) -> Result<PasteCode> {
        let req = PasteRequest::new(dev_key, code, options);
        tracing::debug!(endpoint = %self.endpoint, name = %options.name, "posting paste");
        let body = self.transport.post_form(&self.endpoint, &req)?;
        extract_paste_code(&body)
    }
}
