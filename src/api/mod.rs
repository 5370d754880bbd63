use crate::models::Entry;
use crate::storage::USER_ENTRIES_KEY;
use crate::viewer::CardLayout;
use reqwest::Url;
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_CATALOG_URL: &str = "quran_miracles.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CatalogErrorKind {
    Url,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct CatalogError {
    pub kind: CatalogErrorKind,
    pub message: String,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl CatalogError {
    fn url(e: impl std::fmt::Display) -> Self {
        Self {
            kind: CatalogErrorKind::Url,
            message: e.to_string(),
        }
    }

    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: CatalogErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: CatalogErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, url: &Url) -> Self {
        Self {
            kind: CatalogErrorKind::Http,
            message: format!("GET {url} ({status})"),
        }
    }
}

pub(crate) type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub catalog_url: String,
    pub storage_key: String,
    pub split_description: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            storage_key: USER_ENTRIES_KEY.to_string(),
            split_description: true,
        }
    }
}

impl EnvConfig {
    /// Read overrides from `window.ENV`.
    ///
    /// Both `CATALOG_URL` and `catalog_url` spellings are accepted, same for
    /// the other keys. Missing or wrongly typed values keep the default.
    pub fn from_window() -> Self {
        let mut config = Self::default();

        let Some(env) = web_sys::window().and_then(|w| w.get("ENV")) else {
            return config;
        };
        if env.is_undefined() || !env.is_object() {
            return config;
        }

        if let Some(url) = read_env(&env, "CATALOG_URL", "catalog_url").and_then(|v| v.as_string()) {
            config.catalog_url = url;
        }
        if let Some(key) = read_env(&env, "STORAGE_KEY", "storage_key").and_then(|v| v.as_string()) {
            if !key.trim().is_empty() {
                config.storage_key = key;
            }
        }
        if let Some(split) =
            read_env(&env, "SPLIT_DESCRIPTION", "split_description").and_then(|v| v.as_bool())
        {
            config.split_description = split;
        }

        config
    }

    pub fn card_layout(&self) -> CardLayout {
        if self.split_description {
            CardLayout::Split
        } else {
            CardLayout::Single
        }
    }
}

fn read_env(env: &JsValue, upper: &str, lower: &str) -> Option<JsValue> {
    [upper, lower].into_iter().find_map(|k| {
        js_sys::Reflect::get(env, &k.into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    })
}

/// Resolve `path` against the page URL; absolute URLs pass through.
pub(crate) fn resolve_url(base: &str, path: &str) -> CatalogResult<Url> {
    match Url::parse(path) {
        Ok(url) => Ok(url),
        Err(_) => Url::parse(base)
            .and_then(|b| b.join(path))
            .map_err(CatalogError::url),
    }
}

/// Base for relative URLs: the document's `<base href>` if set, else the page URL.
fn document_base() -> CatalogResult<String> {
    let window = web_sys::window().ok_or_else(|| CatalogError::url("no window"))?;
    if let Some(base) = window.document().and_then(|d| d.base_uri().ok().flatten()) {
        return Ok(base);
    }
    window
        .location()
        .href()
        .map_err(|e| CatalogError::url(format!("{e:?}")))
}

pub(crate) fn parse_entries(body: &str) -> CatalogResult<Vec<Entry>> {
    serde_json::from_str(body).map_err(CatalogError::parse)
}

/// Fetch the built-in entry list shipped next to the page.
pub(crate) async fn fetch_builtin_entries(path: &str) -> CatalogResult<Vec<Entry>> {
    let url = resolve_url(&document_base()?, path)?;

    let res = reqwest::Client::new()
        .get(url.clone())
        .send()
        .await
        .map_err(CatalogError::network)?;

    if !res.status().is_success() {
        return Err(CatalogError::http(res.status(), &url));
    }

    let body = res.text().await.map_err(CatalogError::network)?;
    parse_entries(&body)
}
