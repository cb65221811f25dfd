//! Minimal Google Sheets client for mirroring ranking records.
//!
//! Responsibilities:
//! - Authenticate as a service account (see [`auth`]).
//! - Resolve a spreadsheet by exact title through the Drive files listing,
//!   including shared drives.
//! - Append rows to the spreadsheet's first worksheet.
//!
//! Does NOT handle:
//! - Creating spreadsheets or worksheets. Both must exist and be shared
//!   with the service account.
//! - Retries. The caller stops mirroring on the first failure.

pub mod auth;
pub mod error;
pub mod range;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

pub use auth::ServiceAccountKey;
pub use error::{Result, SheetsError};

use crate::models::RankingRecord;

/// Default root for the Drive v3 API.
pub const DEFAULT_DRIVE_BASE_URL: &str = "https://www.googleapis.com";
/// Default root for the Sheets v4 API.
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for [`SheetsClient`].
pub struct SheetsClientBuilder {
    credentials_path: PathBuf,
    drive_base_url: String,
    sheets_base_url: String,
    timeout: Duration,
}

impl SheetsClientBuilder {
    /// Start a builder for the given service-account key file.
    pub fn new(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: credentials_path.into(),
            drive_base_url: DEFAULT_DRIVE_BASE_URL.to_string(),
            sheets_base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the Drive API root.
    pub fn drive_base_url(mut self, url: String) -> Self {
        self.drive_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Override the Sheets API root.
    pub fn sheets_base_url(mut self, url: String) -> Self {
        self.sheets_base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the key, obtain an access token, and return a ready client.
    pub async fn connect(self) -> Result<SheetsClient> {
        let key = ServiceAccountKey::from_file(&self.credentials_path)?;
        let http = Client::builder().timeout(self.timeout).build()?;
        let access_token = auth::fetch_access_token(&http, &key).await?;

        Ok(SheetsClient {
            http,
            access_token,
            drive_base_url: self.drive_base_url,
            sheets_base_url: self.sheets_base_url,
        })
    }
}

/// Authenticated Google Sheets client.
#[derive(Debug)]
pub struct SheetsClient {
    http: Client,
    access_token: SecretString,
    drive_base_url: String,
    sheets_base_url: String,
}

/// The first worksheet of a spreadsheet, ready for appends.
#[derive(Debug)]
pub struct Worksheet<'a> {
    client: &'a SheetsClient,
    spreadsheet_id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMetadata {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: u32,
}

impl SheetsClient {
    /// Start building a client.
    pub fn builder(credentials_path: impl Into<PathBuf>) -> SheetsClientBuilder {
        SheetsClientBuilder::new(credentials_path)
    }

    /// Open the spreadsheet titled exactly `name` and select its first worksheet.
    pub async fn open(&self, name: &str) -> Result<Worksheet<'_>> {
        let spreadsheet_id = self.find_spreadsheet(name).await?;
        let title = self.first_worksheet_title(&spreadsheet_id).await?;
        debug!(spreadsheet = name, worksheet = %title, "Opened worksheet");
        Ok(Worksheet {
            client: self,
            spreadsheet_id,
            title,
        })
    }

    async fn find_spreadsheet(&self, name: &str) -> Result<String> {
        let url = format!("{}/drive/v3/files", self.drive_base_url);
        let query = format!(
            "name = '{}' and mimeType = '{}' and trashed = false",
            escape_query_literal(name),
            SPREADSHEET_MIME_TYPE
        );
        let builder = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("fields", "files(id,name)"),
                ("supportsAllDrives", "true"),
                ("includeItemsFromAllDrives", "true"),
            ]);

        let list: FileList = parse_json(self.send(builder).await?).await?;
        list.files
            .into_iter()
            .next()
            .map(|file| file.id)
            .ok_or_else(|| SheetsError::SpreadsheetNotFound(name.to_string()))
    }

    async fn first_worksheet_title(&self, spreadsheet_id: &str) -> Result<String> {
        let url = format!(
            "{}/v4/spreadsheets/{}",
            self.sheets_base_url,
            range::encode_range(spreadsheet_id)
        );
        let builder = self
            .http
            .get(&url)
            .query(&[("fields", "sheets.properties")]);

        let metadata: SpreadsheetMetadata = parse_json(self.send(builder).await?).await?;
        metadata
            .sheets
            .into_iter()
            .min_by_key(|sheet| sheet.properties.index)
            .map(|sheet| sheet.properties.title)
            .ok_or_else(|| SheetsError::NoWorksheets(spreadsheet_id.to_string()))
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .bearer_auth(self.access_token.expose_secret())
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(SheetsError::Api {
            status,
            message: api_error_message(&body),
        })
    }
}

impl Worksheet<'_> {
    /// Worksheet title, e.g. `Sheet1`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// ID of the owning spreadsheet.
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Append one row after the last row of the worksheet's data.
    pub async fn append_row(&self, values: Vec<Value>) -> Result<()> {
        let anchor = range::encode_range(&range::append_anchor(&self.title));
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.client.sheets_base_url,
            range::encode_range(&self.spreadsheet_id),
            anchor
        );
        let builder = self
            .client
            .http
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .json(&json!({ "values": [values] }));

        self.client.send(builder).await?;
        Ok(())
    }
}

/// Cell values for a record, in `RECORD_COLUMNS` order.
///
/// Absent rank, url, or search volume become empty cells.
pub fn record_values(record: &RankingRecord) -> Vec<Value> {
    vec![
        Value::from(record.keyword()),
        record.rank().map_or(Value::Null, Value::from),
        record.url().map_or(Value::Null, Value::from),
        record.search_volume().map_or(Value::Null, Value::from),
        Value::from(record.timestamp_rfc3339()),
    ]
}

fn escape_query_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| SheetsError::InvalidResponse(e.to_string()))
}
