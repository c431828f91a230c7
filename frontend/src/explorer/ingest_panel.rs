// frontend/src/explorer/ingest_panel.rs
//
// New-series entry points: random generation, file upload (store then
// visualize), and similarity query straight from an uploaded payload.
// On the web the file comes from an <input type="file">; on desktop the
// user types a local path instead.

use dioxus::prelude::*;

use tsexplore_shared::chart::ChartSeries;
use tsexplore_shared::series::{generate_random, parse_payload};
use tsexplore_shared::similar::TicketCounter;
use tsexplore_shared::{ExplorerError, TimeSeries};

use super::{create_and_visualize, rand01, visualize_by_payload};

#[cfg(target_arch = "wasm32")]
const FILE_INPUT_ID: &str = "file-select";

fn btn_style() -> &'static str {
    "padding:8px 14px; border-radius:10px; border:1px solid #334155; \
     background:#111827; color:#e5e7eb; font-weight:700; cursor:pointer;"
}

#[component]
pub fn IngestPanel(
    chart: Signal<Vec<ChartSeries>>,
    status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
) -> Element {
    // Native file-path entry; unused on wasm where the file input rules.
    let file_path = use_signal(String::new);

    rsx! {
        div {
            style: "
                padding:16px;
                border:1px solid #334155;
                border-radius:14px;
                background:#0b1220;
                display:flex;
                flex-direction:column;
                gap:10px;
            ",
            h2 { style: "margin:0; font-size:16px; color:#e5e7eb;", "Add a Series" }

            button {
                style: "{btn_style()}",
                onclick: move |_| {
                    let series = generate_random(|| rand01());
                    spawn(create_and_visualize(series, chart, status, tickets));
                },
                "Generate Random Series"
            }

            div { style: "border-top:1px solid #1f2937; margin:4px 0;" }

            {file_picker(file_path)}

            div { style: "display:flex; gap:10px; flex-wrap:wrap;",
                button {
                    style: "{btn_style()}",
                    onclick: move |_| {
                        spawn(upload_and_visualize(file_path, chart, status, tickets));
                    },
                    "Upload & Visualize"
                }
                button {
                    style: "{btn_style()}",
                    onclick: move |_| {
                        spawn(similar_from_file(file_path, chart, status, tickets));
                    },
                    "Find Similar (without storing)"
                }
            }

            div { style: "color:#64748b; font-size:12px;",
                "Files must be JSON with \"time_points\" and \"data_points\" arrays of equal length."
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn file_picker(_file_path: Signal<String>) -> Element {
    rsx! {
        input {
            r#type: "file",
            id: FILE_INPUT_ID,
            style: "color:#cbd5e1; font-size:13px;",
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn file_picker(mut file_path: Signal<String>) -> Element {
    rsx! {
        input {
            style: "width:100%; padding:6px 10px; border-radius:8px; border:1px solid #334155; \
                    background:#020617; color:#e5e7eb; outline:none;",
            placeholder: "/path/to/series.json",
            value: "{file_path()}",
            oninput: move |evt| file_path.set(evt.value()),
        }
    }
}

/// Read the selected file as text. `Ok(None)` means nothing is selected.
#[cfg(target_arch = "wasm32")]
async fn read_series_text(_file_path: Signal<String>) -> Result<Option<String>, ExplorerError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlInputElement;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExplorerError::Input("no document".to_string()))?;
    let input = document
        .get_element_by_id(FILE_INPUT_ID)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| ExplorerError::Input("file input not mounted".to_string()))?;

    let Some(files) = input.files() else {
        return Ok(None);
    };
    let Some(file) = files.item(0) else {
        return Ok(None);
    };

    let text = JsFuture::from(file.text())
        .await
        .map_err(|_| ExplorerError::Input(format!("failed to read {}", file.name())))?;
    let text = text
        .as_string()
        .ok_or_else(|| ExplorerError::Input("file did not decode as text".to_string()))?;
    Ok(Some(text))
}

#[cfg(not(target_arch = "wasm32"))]
async fn read_series_text(file_path: Signal<String>) -> Result<Option<String>, ExplorerError> {
    let path = file_path().trim().to_string();
    if path.is_empty() {
        return Ok(None);
    }
    tokio::fs::read_to_string(&path)
        .await
        .map(Some)
        .map_err(|e| ExplorerError::Input(format!("failed to read {path}: {e}")))
}

async fn load_series_from_file(
    file_path: Signal<String>,
) -> Result<Option<TimeSeries>, ExplorerError> {
    let Some(text) = read_series_text(file_path).await? else {
        return Ok(None);
    };
    parse_payload(&text).map(Some)
}

async fn upload_and_visualize(
    file_path: Signal<String>,
    chart: Signal<Vec<ChartSeries>>,
    mut status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
) {
    match load_series_from_file(file_path).await {
        Ok(Some(series)) => create_and_visualize(series, chart, status, tickets).await,
        Ok(None) => status.set(Some("No file selected.".to_string())),
        Err(e) => {
            log!("[upload] {e}");
            status.set(Some(e.to_string()));
        }
    }
}

async fn similar_from_file(
    file_path: Signal<String>,
    chart: Signal<Vec<ChartSeries>>,
    mut status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
) {
    match load_series_from_file(file_path).await {
        Ok(Some(series)) => visualize_by_payload(series, chart, status, tickets).await,
        Ok(None) => status.set(Some("No file selected.".to_string())),
        Err(e) => {
            log!("[simquery] {e}");
            status.set(Some(e.to_string()));
        }
    }
}
