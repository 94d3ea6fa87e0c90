//! Shared test helpers for driving a FetchCoordinator without a network.

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use url::Url;

use crate::config::{Config, DuplicatePolicy};
use crate::coordinator::{Collaborators, FetchCoordinator};
use crate::error::{FetchError, FetchErrorKind};
use crate::fetch::{Fetcher, ImageDecoder};
use crate::presenter::Presenter;
use crate::types::{FetchResponse, ItemId};

/// Locators used by the three-item scenario
pub(crate) const OK_A: &str = "https://ok.example/a.jpg";
pub(crate) const INVALID: &str = "not a url";
pub(crate) const OK_B: &str = "https://ok.example/b.jpg";

/// Encode a solid-color PNG of the given size
pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([200, 40, 90, 255]));
    let mut bytes = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut bytes, ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

struct Route {
    /// Answer per attempt; the last one repeats
    responses: Vec<Result<FetchResponse, FetchError>>,
    gate: Option<Arc<Semaphore>>,
}

/// Fetcher answering from a fixed table and recording every call
///
/// Gated routes hold each request until the test adds a permit, which lets
/// tests choose completion order.
#[derive(Default)]
pub(crate) struct ScriptedFetcher {
    routes: HashMap<String, Route>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answer `locator` with a PNG of the given size
    pub(crate) fn image(self, locator: &str, width: u32, height: u32) -> Self {
        self.respond(locator, FetchResponse::new(200, png_bytes(width, height)))
    }

    pub(crate) fn respond(mut self, locator: &str, response: FetchResponse) -> Self {
        self.routes.insert(
            locator.to_string(),
            Route {
                responses: vec![Ok(response)],
                gate: None,
            },
        );
        self
    }

    pub(crate) fn fail(mut self, locator: &str, error: FetchError) -> Self {
        self.routes.insert(
            locator.to_string(),
            Route {
                responses: vec![Err(error)],
                gate: None,
            },
        );
        self
    }

    /// Answer successive attempts on `locator` with `responses` in order
    pub(crate) fn sequence(
        mut self,
        locator: &str,
        responses: Vec<Result<FetchResponse, FetchError>>,
    ) -> Self {
        self.routes.insert(
            locator.to_string(),
            Route {
                responses,
                gate: None,
            },
        );
        self
    }

    /// Answer `locator` with a PNG, but only after a permit is added to the
    /// returned gate
    pub(crate) fn gated_image(
        mut self,
        locator: &str,
        width: u32,
        height: u32,
    ) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.routes.insert(
            locator.to_string(),
            Route {
                responses: vec![Ok(FetchResponse::new(200, png_bytes(width, height)))],
                gate: Some(Arc::clone(&gate)),
            },
        );
        (self, gate)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn calls_for(&self, locator: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|called| called.as_str() == locator)
            .count()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, locator: &Url) -> Result<FetchResponse, FetchError> {
        let key = locator.as_str().to_string();
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(key.clone());
            calls.iter().filter(|called| **called == key).count() - 1
        };

        let Some(route) = self.routes.get(&key) else {
            return Err(FetchError::Transport(format!("no route for {}", key)));
        };

        if let Some(gate) = &route.gate {
            gate.acquire().await.unwrap().forget();
        }

        route
            .responses
            .get(attempt)
            .or_else(|| route.responses.last())
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport("empty route".to_string())))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Presenter that records every callback
#[derive(Debug, Default)]
pub(crate) struct RecordingPresenter {
    /// (item, width, height) per `on_image_ready`
    pub(crate) ready: Vec<(ItemId, u32, u32)>,
    pub(crate) loaded: Vec<ItemId>,
    pub(crate) errors: Vec<(ItemId, FetchErrorKind)>,
    /// Every callback in call order, for ordering assertions
    pub(crate) log: Vec<String>,
}

impl RecordingPresenter {
    pub(crate) fn ready_count(&self, id: ItemId) -> usize {
        self.ready.iter().filter(|(item, _, _)| *item == id).count()
    }

    pub(crate) fn loaded_count(&self, id: ItemId) -> usize {
        self.loaded.iter().filter(|item| **item == id).count()
    }
}

impl Presenter for RecordingPresenter {
    fn on_image_ready(&mut self, item: ItemId, image: &DynamicImage) {
        self.ready.push((item, image.width(), image.height()));
        self.log.push(format!("ready:{}", item));
    }

    fn on_loaded(&mut self, item: ItemId) {
        self.loaded.push(item);
        self.log.push(format!("loaded:{}", item));
    }

    fn on_error(&mut self, item: ItemId, error: &FetchError) {
        self.errors.push((item, error.kind()));
        self.log.push(format!("error:{}", item));
    }
}

/// Build a coordinator over `locators` on the current runtime
pub(crate) fn create_test_coordinator(
    locators: &[&str],
    fetcher: Arc<ScriptedFetcher>,
    policy: DuplicatePolicy,
) -> FetchCoordinator<RecordingPresenter> {
    let mut config = Config::with_locators(locators.iter().copied());
    config.fetch.duplicate_requests = policy;

    let collaborators = Collaborators {
        runtime: tokio::runtime::Handle::current(),
        fetcher,
        decoder: Arc::new(ImageDecoder),
    };

    FetchCoordinator::with_collaborators(&config, collaborators, RecordingPresenter::default())
}
