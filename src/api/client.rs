//! Blocking HTTP client for the Transgo backend.

use crate::api::{JournalApi, JournalPage, ShiftApi, ShiftFilter, ShiftPage, ShiftPatch};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{JournalEntry, RowId};
use chrono::NaiveDate;
use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body kept in `AppError::Status`.
const MAX_ERROR_BODY: usize = 500;

pub struct HttpClient {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;

        if cfg.api_token.trim().is_empty() {
            return Err(AppError::MissingToken);
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs.max(1)))
            .user_agent(concat!("transgo-admin/", env!("CARGO_PKG_VERSION")));

        // local backends are reached directly, never through HTTP(S)_PROXY
        if is_loopback(cfg.base_url()) {
            builder = builder.no_proxy();
        }

        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: cfg.base_url().to_string(),
            token: cfg.api_token.trim().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn send(&self, req: RequestBuilder) -> AppResult<String> {
        let resp = req.bearer_auth(&self.token).send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "backend rejected request");
            return Err(AppError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        Ok(body)
    }

    fn get_json<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%url, "GET");
        let body = self.send(self.http.get(&url).query(query))?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl ShiftApi for HttpClient {
    fn list_shifts(&self, filter: &ShiftFilter) -> AppResult<ShiftPage> {
        let page: ShiftPage = self.get_json("driver-shifts", filter)?;
        debug!(
            items = page.items.len(),
            total_items = page.meta.total_items,
            "driver shifts fetched"
        );
        Ok(page)
    }

    fn patch_shift(&self, id: RowId, patch: &ShiftPatch) -> AppResult<()> {
        let url = self.url(&format!("driver-shifts/{id}"));
        debug!(%url, "PATCH");
        self.send(self.http.patch(&url).json(patch))?;
        Ok(())
    }
}

impl JournalApi for HttpClient {
    fn list_journal(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<JournalEntry>> {
        let query = [
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
        ];
        let page: JournalPage = self.get_json("jurnal-umum", &query[..])?;
        Ok(page.items)
    }
}

fn is_loopback(url: &str) -> bool {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .is_some_and(|h| matches!(h.as_str(), "localhost" | "127.0.0.1" | "[::1]" | "::1"))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max).collect();
    out.push('…');
    out
}
