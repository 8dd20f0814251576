use std::fmt;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::Response;
use yew::prelude::*;

use deckview_core::{Metadata, MetadataError};

use crate::dom::js_err;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum LoadState {
    Pending,
    Ready(Rc<Metadata>),
    Failed(Rc<LoadError>),
}

impl LoadState {
    pub(crate) fn metadata(&self) -> Option<Rc<Metadata>> {
        match self {
            LoadState::Ready(metadata) => Some(metadata.clone()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadError {
    NoWindow,
    Network(String),
    Status(u16),
    Body(String),
    Metadata(MetadataError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NoWindow => write!(f, "no window to fetch from"),
            LoadError::Network(reason) => write!(f, "request failed: {reason}"),
            LoadError::Status(status) => write!(f, "server answered {status}"),
            LoadError::Body(reason) => write!(f, "could not read body: {reason}"),
            LoadError::Metadata(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for LoadError {}

pub(crate) async fn fetch_metadata(url: &str) -> Result<Metadata, LoadError> {
    let window = web_sys::window().ok_or(LoadError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| LoadError::Network(js_err(err)))?;
    let response = value
        .dyn_into::<Response>()
        .map_err(|_| LoadError::Network("fetch did not return a response".to_string()))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let text = response.text().map_err(|err| LoadError::Body(js_err(err)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|err| LoadError::Body(js_err(err)))?;
    let raw = text
        .as_string()
        .ok_or_else(|| LoadError::Body("body is not text".to_string()))?;
    Metadata::parse(&raw).map_err(LoadError::Metadata)
}

/// Fetches the deck descriptor once per mount. There is no retry: a failure
/// leaves the state at `Failed` for the lifetime of the page.
#[hook]
pub(crate) fn use_metadata(url: &str) -> LoadState {
    let state = use_state(|| LoadState::Pending);
    {
        let state = state.clone();
        let url = url.to_string();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_metadata(&url).await {
                    Ok(metadata) => {
                        gloo::console::log!("metadata loaded", metadata.page_count);
                        state.set(LoadState::Ready(Rc::new(metadata)));
                    }
                    Err(err) => {
                        gloo::console::error!("metadata load failed", url, err.to_string());
                        state.set(LoadState::Failed(Rc::new(err)));
                    }
                }
            });
            || ()
        });
    }
    (*state).clone()
}
