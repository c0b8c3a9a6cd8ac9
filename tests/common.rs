#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;
use transgo_admin::api::{
    PageMeta, Pagination, ShiftApi, ShiftFilter, ShiftPage, ShiftPatch,
};
use transgo_admin::errors::{AppError, AppResult};
use transgo_admin::models::{DriverShift, RowId, ShiftType};

pub fn tga() -> Command {
    cargo_bin_cmd!("transgo-admin")
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_transgo_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn shift(id: RowId, shift_type: ShiftType, location_id: i64, notes: &str) -> DriverShift {
    let (start, end) = shift_type.default_times().unwrap_or(("08:00", "17:00"));
    DriverShift {
        id,
        driver_id: Some(100 + id),
        driver_name: Some(format!("Driver {id}")),
        date: Some("2025-10-01".to_string()),
        shift_type: Some(shift_type),
        custom_start_time: Some(format!("{start}:00")),
        custom_end_time: Some(format!("{end}:00")),
        location_id: Some(location_id),
        location_name: Some(format!("Pool {location_id}")),
        notes: Some(notes.to_string()),
    }
}

pub fn filter() -> ShiftFilter {
    ShiftFilter::new(
        chrono::NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        10,
    )
}

/// In-memory backend: serves `rows`, records every call, applies patches.
#[derive(Default)]
pub struct FakeApi {
    pub rows: Mutex<Vec<DriverShift>>,
    pub list_calls: Mutex<Vec<ShiftFilter>>,
    pub patches: Mutex<Vec<(RowId, ShiftPatch)>>,
    pub fail_patch: HashSet<RowId>,
    pub fail_list: Mutex<bool>,
    pub delays: HashMap<String, Duration>,
}

impl FakeApi {
    pub fn with_rows(rows: Vec<DriverShift>) -> Self {
        Self {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn failing_patch(mut self, ids: &[RowId]) -> Self {
        self.fail_patch = ids.iter().copied().collect();
        self
    }

    pub fn delayed(mut self, q: &str, d: Duration) -> Self {
        self.delays.insert(q.to_string(), d);
        self
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub fn patch_count(&self) -> usize {
        self.patches.lock().unwrap().len()
    }

    pub fn list_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.list_calls
            .lock()
            .unwrap()
            .iter()
            .map(|f| f.q.clone())
            .collect()
    }
}

impl ShiftApi for FakeApi {
    fn list_shifts(&self, filter: &ShiftFilter) -> AppResult<ShiftPage> {
        self.list_calls.lock().unwrap().push(filter.clone());

        if let Some(d) = self.delays.get(&filter.q) {
            thread::sleep(*d);
        }

        if *self.fail_list.lock().unwrap() {
            return Err(AppError::Status {
                status: 503,
                body: "unavailable".into(),
            });
        }

        let all: Vec<DriverShift> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                filter.q.is_empty()
                    || r.driver_name
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&filter.q.to_lowercase())
            })
            .cloned()
            .collect();

        let limit = filter.limit.max(1) as usize;
        let total_page = all.len().div_ceil(limit) as u32;
        let items = all
            .iter()
            .skip((filter.page.max(1) as usize - 1) * limit)
            .take(limit)
            .cloned()
            .collect();

        Ok(ShiftPage {
            items,
            meta: PageMeta {
                total_items: all.len() as u64,
            },
            pagination: Pagination { total_page },
        })
    }

    fn patch_shift(&self, id: RowId, patch: &ShiftPatch) -> AppResult<()> {
        self.patches.lock().unwrap().push((id, patch.clone()));

        if self.fail_patch.contains(&id) {
            return Err(AppError::Status {
                status: 500,
                body: format!("cannot update shift {id}"),
            });
        }

        let mut rows = self.rows.lock().unwrap();
        if let Some(r) = rows.iter_mut().find(|r| r.id == id) {
            r.shift_type = Some(patch.shift_type);
            r.location_id = Some(patch.location_id);
            r.custom_start_time = patch.custom_start_time.clone();
            r.custom_end_time = patch.custom_end_time.clone();
            r.notes = Some(patch.notes.clone());
        }
        Ok(())
    }
}

/// A request captured by `serve_once`.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Bind a local port and answer `responses.len()` requests in order with
/// `(status, json body)`. Returns the base URL and a receiver of the
/// captured requests.
pub fn serve(responses: Vec<(u16, String)>) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request line");
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or("").to_string();
            let target = parts.next().unwrap_or("").to_string();

            let mut headers = Vec::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("header line");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    let (k, v) = (k.trim().to_string(), v.trim().to_string());
                    if k.eq_ignore_ascii_case("content-length") {
                        content_length = v.parse().unwrap_or(0);
                    }
                    headers.push((k, v));
                }
            }

            let mut buf = vec![0u8; content_length];
            reader.read_exact(&mut buf).expect("body");

            tx.send(CapturedRequest {
                method,
                target,
                headers,
                body: String::from_utf8_lossy(&buf).to_string(),
            })
            .ok();

            let reason = if status < 400 { "OK" } else { "Error" };
            let response = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).ok();
            stream.flush().ok();
        }
    });

    (format!("http://{addr}"), rx)
}

pub fn page_json(rows: &[DriverShift]) -> String {
    serde_json::json!({
        "items": rows,
        "meta": { "total_items": rows.len() },
        "pagination": { "total_page": 1 }
    })
    .to_string()
}
