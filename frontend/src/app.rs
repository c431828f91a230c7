// frontend/src/app.rs

use dioxus::prelude::*;

use crate::explorer::Explorer;

// --- global css ---
const GLOBAL_CSS: &str = r#"
html, body {
    margin: 0;
    padding: 0;
    width: 100%;
    min-height: 100%;
    background: #020617;
}

:root, html {
    color-scheme: dark;
}

#main {
    width: 100%;
    min-height: 100%;
    background: #020617;
}

* { box-sizing: border-box; }
"#;

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{GLOBAL_CSS}" }
        Explorer {}
    }
}
