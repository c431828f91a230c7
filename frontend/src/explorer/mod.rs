// frontend/src/explorer/mod.rs
//
// State, HTTP glue, and the async flows behind the three user-facing
// panels. All data transformation lives in tsexplore_shared; this module
// moves bytes and signals around.

macro_rules! log {
    ($($t:tt)*) => {{
        let s = format!($($t)*);
        crate::explorer::log(&s);
    }}
}

pub mod chart_panel;
pub mod ingest_panel;
pub mod search_panel;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use tsexplore_shared::chart::ChartSeries;
use tsexplore_shared::query::{ListResponse, SearchFilter, SeriesSummary};
use tsexplore_shared::similar::{overlay_series, SimilarityResponse, TicketCounter};
use tsexplore_shared::{CreateResponse, ExplorerError, TimeSeries};

use chart_panel::ChartPanel;
use ingest_panel::IngestPanel;
use search_panel::SearchPanel;

const BASE_URL_STORAGE_KEY: &str = "tsx_base_url";

static BASE_URL: GlobalSignal<String> = Signal::global(String::new);

pub fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());

    #[cfg(not(target_arch = "wasm32"))]
    println!("{msg}");
}

// ----------------------------
// Cross-platform persistence
//  - wasm32: localStorage
//  - native: one plain file per key in the app data dir
// ----------------------------
mod persist {
    pub fn get_string(key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::window;
            let w = window()?;
            let ls = w.local_storage().ok()??;
            return ls.get_item(key).ok().flatten();
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            native::get_string(key).ok().flatten()
        }
    }

    pub fn set_string(key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            use web_sys::window;
            if let Some(w) = window() {
                if let Ok(Some(ls)) = w.local_storage() {
                    let _ = ls.set_item(key, value);
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = native::set_string(key, value);
        }
    }

    // The only persisted state is a couple of small strings, so each
    // key is just a file whose contents are the value.
    #[cfg(not(target_arch = "wasm32"))]
    pub(super) mod native {
        use std::io;
        use std::path::PathBuf;

        pub fn value_path(key: &str) -> PathBuf {
            let mut base = dirs::data_local_dir()
                .or_else(dirs::data_dir)
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| ".".into()));
            base.push("tsexplore");
            base.push(key);
            base
        }

        pub fn get_string(key: &str) -> Result<Option<String>, io::Error> {
            match std::fs::read_to_string(value_path(key)) {
                Ok(value) => Ok(Some(value)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e),
            }
        }

        pub fn set_string(key: &str, value: &str) -> Result<(), io::Error> {
            let path = value_path(key);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, value)
        }
    }
}

fn normalize_base_url(mut url: String) -> String {
    if let Some(idx) = url.find('#') {
        url.truncate(idx);
    }
    if let Some(scheme_end) = url.find("://") {
        let rest = &url[scheme_end + 3..];
        if let Some(slash) = rest.find('/') {
            url.truncate(scheme_end + 3 + slash);
        }
    }
    url.trim_end_matches('/').to_string()
}

// ---------- Base URL config ----------
pub struct UrlConfig;

impl UrlConfig {
    pub fn set_base_url_and_persist(url: String) {
        let clean = normalize_base_url(url);
        *BASE_URL.write() = clean.clone();
        persist::set_string(BASE_URL_STORAGE_KEY, &clean);
    }

    pub fn base_http() -> String {
        let base = persist::get_string(BASE_URL_STORAGE_KEY)
            .map(normalize_base_url)
            .unwrap_or_else(|| BASE_URL.read().clone());

        // On the web an empty base means same-origin relative requests.
        #[cfg(not(target_arch = "wasm32"))]
        if base.is_empty() {
            return "http://localhost:8080".to_string();
        }

        base
    }
}

pub fn abs_http(path: &str) -> String {
    let base = UrlConfig::base_http();
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if base.is_empty() {
        path
    } else {
        format!("{base}{path}")
    }
}

// ---------- HTTP helpers ----------
#[cfg(target_arch = "wasm32")]
async fn http_get_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, ExplorerError> {
    use gloo_net::http::Request;

    let url = abs_http(path);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ExplorerError::Request(format!("GET {url}: {e}")))?;
    if !resp.ok() {
        return Err(ExplorerError::Request(format!(
            "GET {url}: HTTP {}",
            resp.status()
        )));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ExplorerError::DataShape(format!("GET {url}: {e}")))
}

#[cfg(not(target_arch = "wasm32"))]
async fn http_get_json<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, ExplorerError> {
    let url = abs_http(path);
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| ExplorerError::Request(format!("GET {url}: {e}")))?;
    if !resp.status().is_success() {
        return Err(ExplorerError::Request(format!(
            "GET {url}: HTTP {}",
            resp.status()
        )));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ExplorerError::DataShape(format!("GET {url}: {e}")))
}

#[cfg(target_arch = "wasm32")]
async fn http_post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    path: &str,
    body: &B,
) -> Result<T, ExplorerError> {
    use gloo_net::http::Request;

    let url = abs_http(path);
    let resp = Request::post(&url)
        .json(body)
        .map_err(|e| ExplorerError::Input(format!("POST {url}: {e}")))?
        .send()
        .await
        .map_err(|e| ExplorerError::Request(format!("POST {url}: {e}")))?;
    if !resp.ok() {
        return Err(ExplorerError::Request(format!(
            "POST {url}: HTTP {}",
            resp.status()
        )));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ExplorerError::DataShape(format!("POST {url}: {e}")))
}

#[cfg(not(target_arch = "wasm32"))]
async fn http_post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    path: &str,
    body: &B,
) -> Result<T, ExplorerError> {
    let url = abs_http(path);
    let resp = reqwest::Client::new()
        .post(&url)
        .json(body)
        .send()
        .await
        .map_err(|e| ExplorerError::Request(format!("POST {url}: {e}")))?;
    if !resp.status().is_success() {
        return Err(ExplorerError::Request(format!(
            "POST {url}: HTTP {}",
            resp.status()
        )));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ExplorerError::DataShape(format!("POST {url}: {e}")))
}

// ----------------------------
// Randomness
// ----------------------------
#[cfg(target_arch = "wasm32")]
pub(crate) fn rand01() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn rand01() -> f64 {
    rand::random::<f64>()
}

// ----------------------------
// Controllers
// ----------------------------

/// Run one search and replace the results table in full. Failures leave
/// the previous rows untouched. The table has its own ticket counter so
/// an earlier, slower submission can never overwrite a later one.
pub(crate) async fn run_search(
    filter: SearchFilter,
    mut summaries: Signal<Vec<SeriesSummary>>,
    mut status: Signal<Option<String>>,
    mut search_tickets: Signal<TicketCounter>,
) {
    let ticket = search_tickets.write().issue();
    let path = filter.query_path();
    log!("[search] GET {path} ticket={ticket}");
    let result = http_get_json::<ListResponse>(&path).await;

    if !search_tickets.read().is_current(ticket) {
        log!("[search] dropping stale response for {path}");
        return;
    }
    match result {
        Ok(list) => {
            log!("[search] {} rows", list.timeseries.len());
            status.set(None);
            summaries.set(list.timeseries);
        }
        Err(e) => {
            log!("[search] failed: {e}");
            status.set(Some(e.to_string()));
        }
    }
}

async fn fetch_overlay_by_id(id: i64) -> Result<Vec<ChartSeries>, ExplorerError> {
    let reference: TimeSeries = http_get_json(&format!("/timeseries/{id}")).await?;
    reference.validate()?;
    let response: SimilarityResponse = http_get_json(&format!("/simquery?id={id}")).await?;
    response.validate()?;
    Ok(overlay_series(&reference, &response))
}

/// Visualize a stored series: fetch it and its nearest neighbors, then
/// swap the whole overlay in at once. Stale completions (a newer query
/// was issued meanwhile) are dropped.
pub(crate) async fn visualize_by_id(
    id: i64,
    chart: Signal<Vec<ChartSeries>>,
    status: Signal<Option<String>>,
    mut tickets: Signal<TicketCounter>,
) {
    let ticket = tickets.write().issue();
    log!("[viz] id={id} ticket={ticket}");
    finish_visualize_by_id(id, ticket, chart, status, tickets).await;
}

async fn finish_visualize_by_id(
    id: i64,
    ticket: u64,
    mut chart: Signal<Vec<ChartSeries>>,
    mut status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
) {
    let result = fetch_overlay_by_id(id).await;

    if !tickets.read().is_current(ticket) {
        log!("[viz] dropping stale response for id {id}");
        return;
    }
    match result {
        Ok(series) => {
            status.set(None);
            chart.set(series);
        }
        Err(e) => {
            log!("[viz] failed: {e}");
            status.set(Some(e.to_string()));
        }
    }
}

/// Visualize an uploaded payload without requiring it to be stored: the
/// payload itself is the reference series.
pub(crate) async fn visualize_by_payload(
    payload: TimeSeries,
    mut chart: Signal<Vec<ChartSeries>>,
    mut status: Signal<Option<String>>,
    mut tickets: Signal<TicketCounter>,
) {
    let ticket = tickets.write().issue();
    log!("[viz] payload of {} points ticket={ticket}", payload.len());

    let result = async {
        payload.validate()?;
        let response: SimilarityResponse = http_post_json("/simquery", &payload).await?;
        response.validate()?;
        Ok::<_, ExplorerError>(overlay_series(&payload, &response))
    }
    .await;

    if !tickets.read().is_current(ticket) {
        log!("[viz] dropping stale payload response");
        return;
    }
    match result {
        Ok(series) => {
            status.set(None);
            chart.set(series);
        }
        Err(e) => {
            log!("[viz] failed: {e}");
            status.set(Some(e.to_string()));
        }
    }
}

/// Store a new series, then visualize it by its freshly assigned id.
/// One ticket, issued at the click, covers the whole chain: a user
/// action taken while the POST is in flight supersedes it.
pub(crate) async fn create_and_visualize(
    series: TimeSeries,
    chart: Signal<Vec<ChartSeries>>,
    mut status: Signal<Option<String>>,
    mut tickets: Signal<TicketCounter>,
) {
    let ticket = tickets.write().issue();
    match http_post_json::<_, CreateResponse>("/timeseries", &series).await {
        Ok(created) => {
            log!("[ingest] stored as id {} ticket={ticket}", created.id);
            if !tickets.read().is_current(ticket) {
                log!("[ingest] superseded, skipping visualize of id {}", created.id);
                return;
            }
            finish_visualize_by_id(created.id, ticket, chart, status, tickets).await;
        }
        Err(e) => {
            log!("[ingest] failed: {e}");
            if tickets.read().is_current(ticket) {
                status.set(Some(e.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn base_url_is_normalized_to_scheme_and_host() {
        assert_eq!(
            normalize_base_url("http://localhost:8080/".to_string()),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_base_url("https://host:9000/some/path#frag".to_string()),
            "https://host:9000"
        );
        assert_eq!(normalize_base_url("".to_string()), "");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn persisted_keys_map_to_files_in_the_app_data_dir() {
        let path = super::persist::native::value_path(super::BASE_URL_STORAGE_KEY);
        assert!(path.ends_with("tsexplore/tsx_base_url"), "{path:?}");
    }
}

// ----------------------------
// Root component
// ----------------------------
#[component]
pub fn Explorer() -> Element {
    let summaries = use_signal(Vec::<SeriesSummary>::new);
    let chart = use_signal(Vec::<ChartSeries>::new);
    let status = use_signal(|| None::<String>);
    let tickets = use_signal(TicketCounter::default);
    let search_tickets = use_signal(TicketCounter::default);

    let mut server_url = use_signal(UrlConfig::base_http);

    rsx! {
        div {
            style: "
                min-height:100vh;
                padding:24px;
                color:#e5e7eb;
                font-family:system-ui, -apple-system, BlinkMacSystemFont;
                background:#020617;
                display:flex;
                flex-direction:column;
                gap:16px;
            ",

            // Header
            div {
                style: "
                    display:flex;
                    align-items:center;
                    justify-content:space-between;
                    gap:16px;
                    flex-wrap:wrap;
                ",
                h1 { style: "color:#f97316; margin:0; font-size:22px; font-weight:800;",
                    "Time Series Explorer"
                }

                div { style: "display:flex; align-items:center; gap:8px;",
                    span { style: "color:#94a3b8; font-size:12px;", "Server" }
                    input {
                        style: "
                            padding:6px 10px;
                            border-radius:8px;
                            border:1px solid #334155;
                            background:#0b1220;
                            color:#e5e7eb;
                            min-width:220px;
                            outline:none;
                        ",
                        placeholder: "same origin",
                        value: "{server_url()}",
                        oninput: move |evt| server_url.set(evt.value()),
                    }
                    button {
                        style: "
                            padding:6px 12px;
                            border-radius:8px;
                            border:1px solid #334155;
                            background:#111827;
                            color:#e5e7eb;
                            cursor:pointer;
                        ",
                        onclick: move |_| {
                            UrlConfig::set_base_url_and_persist(server_url().trim().to_string());
                            log!("[config] base url set to '{}'", UrlConfig::base_http());
                        },
                        "Apply"
                    }
                }
            }

            if let Some(msg) = status() {
                div {
                    style: "
                        padding:10px 14px;
                        border-radius:10px;
                        border:1px solid #ef4444;
                        background:#450a0a;
                        color:#fecaca;
                        font-size:13px;
                    ",
                    "{msg}"
                }
            }

            div {
                style: "
                    display:grid;
                    grid-template-columns: minmax(320px, 1fr) minmax(420px, 1.4fr);
                    gap:16px;
                    align-items:start;
                ",

                div { style: "display:flex; flex-direction:column; gap:16px;",
                    SearchPanel { summaries, chart, status, tickets, search_tickets }
                    IngestPanel { chart, status, tickets }
                }

                ChartPanel { chart }
            }
        }
    }
}
