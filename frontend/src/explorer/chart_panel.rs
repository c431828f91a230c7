// frontend/src/explorer/chart_panel.rs
//
// SVG emission for a precomputed chart layout. All geometry (domains,
// scales, ticks, pixel paths) comes from tsexplore_shared::chart; this
// component just serializes it. Every signal change is a full redraw.

use dioxus::prelude::*;

use tsexplore_shared::chart::{self, ChartSeries, MARKER_RADIUS};

const VIEW_W: f64 = 760.0;
const VIEW_H: f64 = 440.0;

const AXIS_COLOR: &str = "#334155";
const TICK_TEXT_COLOR: &str = "#94a3b8";

pub fn series_color(i: usize) -> &'static str {
    match i {
        0 => "#f97316",
        1 => "#22d3ee",
        2 => "#a3e635",
        3 => "#f43f5e",
        4 => "#8b5cf6",
        5 => "#facc15",
        _ => "#e5e7eb",
    }
}

#[component]
pub fn ChartPanel(chart: Signal<Vec<ChartSeries>>) -> Element {
    let series = chart();
    // Full relayout on every render; nothing carries over.
    let geom = chart::layout(&series, VIEW_W, VIEW_H);

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
            h2 { style: "margin:0; font-size:16px; color:#e5e7eb;", "Similarity Chart" }

            svg {
                style: "width:100%; height:auto; display:block; background:#020617; border-radius:10px;",
                view_box: "0 0 {geom.width} {geom.height}",

                // axes
                line {
                    x1: "{geom.inner_left}", y1: "{geom.inner_bottom}",
                    x2: "{geom.inner_right}", y2: "{geom.inner_bottom}",
                    stroke: "{AXIS_COLOR}", stroke_width: "1",
                }
                line {
                    x1: "{geom.inner_left}", y1: "{geom.inner_top}",
                    x2: "{geom.inner_left}", y2: "{geom.inner_bottom}",
                    stroke: "{AXIS_COLOR}", stroke_width: "1",
                }

                // x ticks
                for t in geom.x_ticks.iter() {
                    line {
                        x1: "{t.px}", y1: "{geom.inner_bottom}",
                        x2: "{t.px}", y2: "{geom.inner_bottom + 5.0}",
                        stroke: "{AXIS_COLOR}", stroke_width: "1",
                    }
                    text {
                        x: "{t.px}", y: "{geom.inner_bottom + 18.0}",
                        fill: "{TICK_TEXT_COLOR}", "font-size": "10", "text-anchor": "middle",
                        "{t.label}"
                    }
                }

                // y ticks
                for t in geom.y_ticks.iter() {
                    line {
                        x1: "{geom.inner_left - 5.0}", y1: "{t.px}",
                        x2: "{geom.inner_left}", y2: "{t.px}",
                        stroke: "{AXIS_COLOR}", stroke_width: "1",
                    }
                    text {
                        x: "{geom.inner_left - 8.0}", y: "{t.px + 3.0}",
                        fill: "{TICK_TEXT_COLOR}", "font-size": "10", "text-anchor": "end",
                        "{t.label}"
                    }
                }

                // traces: a connected line plus a marker at every point
                for (i, trace) in geom.traces.iter().enumerate() {
                    polyline {
                        points: "{trace.polyline()}",
                        fill: "none",
                        stroke: "{series_color(i)}",
                        stroke_width: "2",
                        stroke_linejoin: "round",
                        stroke_linecap: "round",
                    }
                    for p in trace.path.iter() {
                        circle {
                            cx: "{p.x}", cy: "{p.y}", r: "{MARKER_RADIUS}",
                            fill: "{series_color(i)}",
                        }
                    }
                }
            }

            // legend
            if geom.traces.is_empty() {
                div { style: "color:#64748b; font-size:12px;",
                    "Pick a series to visualize, or upload one."
                }
            } else {
                div {
                    style: "display:flex; flex-wrap:wrap; gap:8px; padding:6px 10px; \
                            background:rgba(2,6,23,0.75); border:1px solid #1f2937; border-radius:10px;",
                    for (i, trace) in geom.traces.iter().enumerate() {
                        div {
                            style: "display:flex; align-items:center; gap:6px; font-size:12px; color:#cbd5f5;",
                            svg { width: "26", height: "8", view_box: "0 0 26 8",
                                line {
                                    x1: "1", y1: "4", x2: "25", y2: "4",
                                    stroke: "{series_color(i)}", stroke_width: "2", stroke_linecap: "round",
                                }
                            }
                            "{trace.label}"
                        }
                    }
                }
            }
        }
    }
}
