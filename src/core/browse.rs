//! Interactive search over driver shifts: inputs are debounced, fetches run
//! in the background and only the latest one may replace the snapshot.

use crate::api::{ShiftApi, ShiftFilter, ShiftPage};
use crate::core::debounce::SearchDebouncer;
use crate::core::snapshot::{FetchApplied, FetchTicket, Snapshot, SnapshotStore};
use crate::errors::{AppError, AppResult};
use std::io::BufRead;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// What the caller gets to render.
pub enum BrowseEvent<'a> {
    Loaded(&'a Snapshot),
    /// A response arrived after a newer search was started.
    Discarded { q: &'a str },
    Failed { q: &'a str, error: &'a AppError },
}

enum Msg {
    Input(String),
    Eof,
    Fetched(FetchTicket, AppResult<ShiftPage>),
}

/// Idle wait when nothing is pending.
const IDLE: Duration = Duration::from_secs(3600);

/// Run until `input` is exhausted and every started fetch has settled.
///
/// Each input line is a new search query. The initial listing uses `base`.
pub fn run_browse<A, R, F>(
    api: Arc<A>,
    base: ShiftFilter,
    mut debouncer: SearchDebouncer,
    input: R,
    mut on_event: F,
) -> SnapshotStore
where
    A: ShiftApi + Send + Sync + 'static,
    R: BufRead + Send + 'static,
    F: FnMut(BrowseEvent<'_>),
{
    let (tx, rx) = mpsc::channel::<Msg>();

    let input_tx = tx.clone();
    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Msg::Input(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Msg::Eof);
    });

    let mut store = SnapshotStore::new();
    let mut in_flight = 0usize;
    let mut eof = false;

    start_fetch(&mut store, &api, base.clone(), &tx);
    in_flight += 1;

    loop {
        if eof && !debouncer.is_pending() && in_flight == 0 {
            break;
        }

        let wait = debouncer.time_until_due(Instant::now()).unwrap_or(IDLE);

        match rx.recv_timeout(wait) {
            Ok(Msg::Input(q)) => debouncer.push(q, Instant::now()),
            Ok(Msg::Eof) => {
                eof = true;
                if let Some(q) = debouncer.flush() {
                    start_fetch(&mut store, &api, base.with_query(&q), &tx);
                    in_flight += 1;
                }
            }
            Ok(Msg::Fetched(ticket, result)) => {
                in_flight -= 1;
                let q = ticket.filter().q.clone();
                match store.complete(ticket, result) {
                    Ok(FetchApplied::Applied) => on_event(BrowseEvent::Loaded(store.snapshot())),
                    Ok(FetchApplied::Stale) => on_event(BrowseEvent::Discarded { q: &q }),
                    Err(e) => {
                        debouncer.forget_last();
                        on_event(BrowseEvent::Failed { q: &q, error: &e })
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if let Some(q) = debouncer.poll(Instant::now()) {
            start_fetch(&mut store, &api, base.with_query(&q), &tx);
            in_flight += 1;
        }
    }

    store
}

fn start_fetch<A>(store: &mut SnapshotStore, api: &Arc<A>, filter: ShiftFilter, tx: &Sender<Msg>)
where
    A: ShiftApi + Send + Sync + 'static,
{
    let ticket = store.begin_fetch(&filter);
    let api = Arc::clone(api);
    let tx = tx.clone();
    debug!(seq = ticket.seq(), q = %filter.q, "background fetch");
    thread::spawn(move || {
        let result = api.list_shifts(&filter);
        let _ = tx.send(Msg::Fetched(ticket, result));
    });
}
