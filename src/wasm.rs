// Copyright 2025-present Capitalyx Wiki Contributors
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the wiki search modal.
//!
//! The page script constructs one `WikiSearch`, wires DOM events to its
//! methods and applies the returned effects:
//!
//! ```js
//! const search = new WikiSearch({ locale: "fr" });
//! search.onNavigate((url) => { window.location.href = url; });
//! document.addEventListener("keydown", (e) => {
//!   const effect = search.handleKey(e.key, e.ctrlKey, e.metaKey);
//!   if (effect.handled) e.preventDefault();
//!   if (effect.kind === "render" || effect.kind === "focusInput") {
//!     results.innerHTML = search.renderHtml();
//!   }
//! });
//! ```

use crate::catalog;
use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::shell::{Effect, KeyPress, SearchShell, ShellEvent};
use crate::types::{Category, Filter, Record};
use js_sys::Function;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Search hit for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput<'a> {
    title: &'a str,
    category: Category,
    category_label: &'static str,
    description: &'a str,
    url: &'a str,
    score: u32,
}

/// Effect of one call, as a plain object.
#[derive(Serialize)]
struct EffectOutput {
    /// False when the key was not for the search modal.
    handled: bool,
    /// `none`, `render`, `focusInput` or `navigate`
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl EffectOutput {
    fn unhandled() -> Self {
        Self {
            handled: false,
            kind: "none",
            url: None,
        }
    }

    /// Output for a `keydown`: `None` means the shell ignored the key.
    fn for_key(effect: Option<&Effect>) -> Self {
        effect.map_or_else(Self::unhandled, Self::from)
    }
}

/// JavaScript has no `Option<usize>`; -1 stands for "no row".
fn selected_index_value(selected: Option<usize>) -> i32 {
    selected
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}

impl From<&Effect> for EffectOutput {
    fn from(effect: &Effect) -> Self {
        let (kind, url) = match effect {
            Effect::None => ("none", None),
            Effect::Render => ("render", None),
            Effect::FocusInput => ("focusInput", None),
            Effect::Navigate(url) => ("navigate", Some(url.clone())),
        };
        Self {
            handled: true,
            kind,
            url,
        }
    }
}

fn parse_options(options: Option<JsValue>) -> Result<SearchConfig, JsValue> {
    match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            Ok(from_value(value).map_err(|e| format!("Invalid search options: {}", e))?)
        }
        _ => Ok(SearchConfig::default()),
    }
}

fn parse_filter(filter: Option<String>) -> Result<Filter, JsValue> {
    match filter {
        Some(name) => Ok(name.parse::<Filter>().map_err(|e| e.to_string())?),
        None => Ok(Filter::All),
    }
}

/// One search modal instance. No global state: construct as many as needed.
#[wasm_bindgen]
pub struct WikiSearch {
    shell: SearchShell,
    on_navigate: Option<Function>,
}

#[wasm_bindgen]
impl WikiSearch {
    /// Create a search over the built-in catalog.
    ///
    /// `options` is an optional `{ locale, limit, shortcut }` object.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<WikiSearch, JsValue> {
        let config = parse_options(options)?;
        Ok(Self::with_index(SearchIndex::builtin(), config))
    }

    /// Create a search over a host-supplied array of records.
    #[wasm_bindgen(js_name = fromCatalog)]
    pub fn from_catalog(records: JsValue, options: Option<JsValue>) -> Result<WikiSearch, JsValue> {
        let records: Vec<Record> =
            from_value(records).map_err(|e| format!("Invalid catalog: {}", e))?;
        catalog::validate(&records).map_err(|e| e.to_string())?;
        let config = parse_options(options)?;
        Ok(Self::with_index(SearchIndex::new(records), config))
    }

    fn with_index(index: SearchIndex, config: SearchConfig) -> WikiSearch {
        WikiSearch {
            shell: SearchShell::new(Rc::new(index), config),
            on_navigate: None,
        }
    }

    /// Stateless search. `filter` is `"all"` or a category name.
    #[wasm_bindgen]
    pub fn search(&self, query: &str, filter: Option<String>) -> Result<JsValue, JsValue> {
        let filter = parse_filter(filter)?;
        let locale = self.shell.config().locale;
        let hits = self.shell.index().search_scored(
            query,
            filter,
            self.shell.config().search_options(),
        );
        let output: Vec<SearchResultOutput<'_>> = hits
            .iter()
            .map(|hit| SearchResultOutput {
                title: &hit.record.title,
                category: hit.record.category,
                category_label: hit.record.category.label(locale),
                description: &hit.record.description,
                url: &hit.record.url,
                score: hit.score,
            })
            .collect();
        to_value(&output).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen]
    pub fn open(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ShellEvent::Open)
    }

    #[wasm_bindgen]
    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ShellEvent::Close)
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ShellEvent::Clear)
    }

    /// Report the search input's current value.
    #[wasm_bindgen]
    pub fn input(&mut self, text: String) -> Result<JsValue, JsValue> {
        self.dispatch(ShellEvent::Input(text))
    }

    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, filter: String) -> Result<JsValue, JsValue> {
        let filter = parse_filter(Some(filter))?;
        self.dispatch(ShellEvent::SetFilter(filter))
    }

    /// A click on the result row with this index.
    #[wasm_bindgen]
    pub fn choose(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.dispatch(ShellEvent::Choose(index))
    }

    /// Forward a `keydown`. `handled` in the result says whether to call
    /// `preventDefault()`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: String, ctrl: bool, meta: bool) -> Result<JsValue, JsValue> {
        let press = KeyPress { key, ctrl, meta };
        let effect = self.shell.handle_key(&press);
        self.apply(&EffectOutput::for_key(effect.as_ref()), effect.as_ref())
    }

    /// `closed`, `openEmpty`, `openResults` or `openNoResults`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.shell.state().as_str().to_string()
    }

    /// Selected row, or -1 when nothing is selected.
    #[wasm_bindgen(js_name = selectedIndex)]
    pub fn selected_index(&self) -> i32 {
        selected_index_value(self.shell.selected())
    }

    #[wasm_bindgen(js_name = resultCount)]
    pub fn result_count(&self) -> usize {
        self.shell.result_count()
    }

    /// Inner HTML for the results container.
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> String {
        self.shell.view().to_html()
    }

    /// The results panel as a structured object, for hosts that build DOM
    /// nodes themselves.
    #[wasm_bindgen]
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_value(&self.shell.view()).map_err(|e| e.to_string().into())
    }

    /// Register the callback invoked with the target URL on navigation.
    #[wasm_bindgen(js_name = onNavigate)]
    pub fn on_navigate(&mut self, callback: Function) {
        self.on_navigate = Some(callback);
    }

    fn dispatch(&mut self, event: ShellEvent) -> Result<JsValue, JsValue> {
        let effect = self.shell.handle(event);
        self.apply(&EffectOutput::from(&effect), Some(&effect))
    }

    fn apply(&self, output: &EffectOutput, effect: Option<&Effect>) -> Result<JsValue, JsValue> {
        if let (Some(Effect::Navigate(url)), Some(callback)) = (effect, &self.on_navigate) {
            callback.call1(&JsValue::NULL, &JsValue::from_str(url))?;
        }
        to_value(output).map_err(|e| e.to_string().into())
    }
}
