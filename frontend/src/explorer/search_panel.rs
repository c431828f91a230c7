// frontend/src/explorer/search_panel.rs
//
// Search form + results table. The radio group picks the filter mode;
// only the matching bound/category inputs are mounted at a time. Each
// submit replaces the table contents in full.

use dioxus::prelude::*;

use tsexplore_shared::chart::ChartSeries;
use tsexplore_shared::query::{RangeField, SearchFilter, SeriesSummary};
use tsexplore_shared::similar::TicketCounter;

use super::{run_search, visualize_by_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParamGroup {
    None,
    Mean,
    Std,
    Blarg,
    Level,
}

impl ParamGroup {
    fn label(self) -> &'static str {
        match self {
            ParamGroup::None => "None",
            ParamGroup::Mean => "Mean",
            ParamGroup::Std => "Standard Dev",
            ParamGroup::Blarg => "Blarg",
            ParamGroup::Level => "Level",
        }
    }

    fn range_field(self) -> Option<RangeField> {
        match self {
            ParamGroup::Mean => Some(RangeField::Mean),
            ParamGroup::Std => Some(RangeField::Std),
            ParamGroup::Blarg => Some(RangeField::Blarg),
            _ => None,
        }
    }
}

const MODES: [ParamGroup; 5] = [
    ParamGroup::None,
    ParamGroup::Mean,
    ParamGroup::Std,
    ParamGroup::Blarg,
    ParamGroup::Level,
];

fn input_style() -> &'static str {
    "width:100%; padding:6px 10px; border-radius:8px; border:1px solid #334155; \
     background:#020617; color:#e5e7eb; outline:none;"
}

#[component]
pub fn SearchPanel(
    summaries: Signal<Vec<SeriesSummary>>,
    chart: Signal<Vec<ChartSeries>>,
    status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
    search_tickets: Signal<TicketCounter>,
) -> Element {
    let mut mode = use_signal(|| ParamGroup::None);
    let mut lower = use_signal(String::new);
    let mut upper = use_signal(String::new);
    let mut categories = use_signal(String::new);

    let on_submit = move |_| {
        let filter = match mode().range_field() {
            Some(field) => SearchFilter::Range {
                field,
                lower: lower(),
                upper: upper(),
            },
            None => match mode() {
                ParamGroup::Level => SearchFilter::Level {
                    categories: categories(),
                },
                _ => SearchFilter::All,
            },
        };
        spawn(run_search(filter, summaries, status, search_tickets));
    };

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
            h2 { style: "margin:0; font-size:16px; color:#e5e7eb;", "Search Stored Series" }

            // Filter mode
            div { style: "display:flex; gap:14px; flex-wrap:wrap;",
                for m in MODES.iter() {
                    label {
                        style: "display:flex; align-items:center; gap:6px; color:#cbd5e1; font-size:13px; cursor:pointer;",
                        input {
                            r#type: "radio",
                            name: "paramgroup",
                            checked: mode() == *m,
                            onchange: {
                                let m = *m;
                                move |_| mode.set(m)
                            },
                        }
                        "{m.label()}"
                    }
                }
            }

            // Dynamic fields: at most one set mounted at a time.
            match mode() {
                ParamGroup::Mean | ParamGroup::Std | ParamGroup::Blarg => rsx! {
                    div { style: "display:flex; gap:10px;",
                        div { style: "flex:1;",
                            div { style: "color:#94a3b8; font-size:12px; margin-bottom:4px;", "Lower Bound" }
                            input {
                                style: "{input_style()}",
                                r#type: "number",
                                value: "{lower()}",
                                oninput: move |evt| lower.set(evt.value()),
                            }
                        }
                        div { style: "flex:1;",
                            div { style: "color:#94a3b8; font-size:12px; margin-bottom:4px;", "Upper Bound" }
                            input {
                                style: "{input_style()}",
                                r#type: "number",
                                value: "{upper()}",
                                oninput: move |evt| upper.set(evt.value()),
                            }
                        }
                    }
                },
                ParamGroup::Level => rsx! {
                    div {
                        div { style: "color:#94a3b8; font-size:12px; margin-bottom:4px;", "Categories (comma separated)" }
                        input {
                            style: "{input_style()}",
                            value: "{categories()}",
                            placeholder: "A,B",
                            oninput: move |evt| categories.set(evt.value()),
                        }
                    }
                },
                ParamGroup::None => rsx! {
                    div { style: "color:#64748b; font-size:12px;", "No filter: lists every stored series." }
                },
            }

            button {
                style: "
                    padding:8px 14px;
                    border-radius:10px;
                    border:1px solid #334155;
                    background:#111827;
                    color:#e5e7eb;
                    font-weight:700;
                    cursor:pointer;
                    align-self:flex-start;
                ",
                onclick: on_submit,
                "Search"
            }

            ResultsTable { summaries, chart, status, tickets }
        }
    }
}

#[component]
fn ResultsTable(
    summaries: Signal<Vec<SeriesSummary>>,
    chart: Signal<Vec<ChartSeries>>,
    status: Signal<Option<String>>,
    tickets: Signal<TicketCounter>,
) -> Element {
    let rows = summaries();

    if rows.is_empty() {
        return rsx! {
            div { style: "color:#64748b; font-size:12px;", "No results yet." }
        };
    }

    rsx! {
        div { style: "overflow-x:auto;",
            table {
                style: "width:100%; border-collapse:collapse; font-size:13px; color:#e5e7eb;",
                thead {
                    tr {
                        for head in ["ID", "Mean", "Standard Dev", "Level", "Blarg", ""] {
                            th {
                                style: "text-align:left; padding:6px 8px; border-bottom:1px solid #334155; color:#94a3b8;",
                                "{head}"
                            }
                        }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { key: "{row.id}",
                            td { style: "padding:6px 8px;", "{row.id}" }
                            td { style: "padding:6px 8px;", {format!("{:.3}", row.mean)} }
                            td { style: "padding:6px 8px;", {format!("{:.3}", row.std)} }
                            td { style: "padding:6px 8px;", "{row.level}" }
                            td { style: "padding:6px 8px;", {format!("{:.3}", row.blarg)} }
                            td { style: "padding:6px 8px;",
                                button {
                                    style: "
                                        padding:4px 10px;
                                        border-radius:8px;
                                        border:1px solid #334155;
                                        background:#0f172a;
                                        color:#e5e7eb;
                                        cursor:pointer;
                                    ",
                                    onclick: {
                                        let id = row.id;
                                        move |_| {
                                            spawn(visualize_by_id(id, chart, status, tickets));
                                        }
                                    },
                                    "Visualize"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
