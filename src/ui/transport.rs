//! Browser implementations of the submission capabilities
//!
//! `AsyncRequestTransport` posts the form with `fetch` via `gloo-net`.
//! `LegacyFormPostTransport` builds a hidden `<form>` and submits it into a
//! hidden iframe; its result can't be observed.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlFormElement, HtmlIFrameElement, HtmlInputElement};

use crate::core::ClassList;
use crate::core::submission::{
    ContactPayload, FallbackError, FallbackTransport, SubmissionTransport, TransportError,
    detail_from_body,
};

/// Name of the iframe receiving legacy form posts
const FALLBACK_SINK: &str = "mimir-fallback-sink";

fn js_message(value: wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<gloo_net::Error> for TransportError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) => TransportError::from_fetch_message(js.message),
            other => TransportError::Unexpected(other.to_string()),
        }
    }
}

/// Primary path: scripted multipart request
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncRequestTransport;

impl SubmissionTransport for AsyncRequestTransport {
    async fn send(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), TransportError> {
        let form_data =
            FormData::new().map_err(|e| TransportError::Unexpected(js_message(e)))?;
        for (name, value) in payload.fields() {
            form_data
                .append_with_str(name, value)
                .map_err(|e| TransportError::Unexpected(js_message(e)))?;
        }

        let response = Request::post(endpoint)
            .header("Accept", "application/json")
            .body(form_data)?
            .send()
            .await?;

        leptos::logging::log!("Form relay response status: {}", response.status());
        if response.ok() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(TransportError::Rejected {
            status: response.status(),
            detail: detail_from_body(&body),
        })
    }
}

/// Fallback path: traditional form post, fire-and-forget
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormPostTransport;

impl LegacyFormPostTransport {
    fn document() -> Result<Document, FallbackError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| FallbackError("document is not available".to_string()))
    }

    fn ensure_sink(document: &Document) -> Result<(), FallbackError> {
        if document.get_element_by_id(FALLBACK_SINK).is_some() {
            return Ok(());
        }
        let iframe: HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|e| FallbackError(js_message(e)))?
            .unchecked_into();
        iframe.set_id(FALLBACK_SINK);
        iframe.set_name(FALLBACK_SINK);
        iframe.set_hidden(true);
        Self::append_to_body(document, &iframe)
    }

    fn append_to_body(document: &Document, node: &web_sys::Node) -> Result<(), FallbackError> {
        let body = document
            .body()
            .ok_or_else(|| FallbackError("document has no body".to_string()))?;
        body.append_child(node)
            .map(|_| ())
            .map_err(|e| FallbackError(js_message(e)))
    }
}

impl FallbackTransport for LegacyFormPostTransport {
    fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), FallbackError> {
        let document = Self::document()?;
        Self::ensure_sink(&document)?;

        let form: HtmlFormElement = document
            .create_element("form")
            .map_err(|e| FallbackError(js_message(e)))?
            .unchecked_into();
        form.set_method("POST");
        form.set_action(endpoint);
        form.set_target(FALLBACK_SINK);
        form.set_hidden(true);

        for (name, value) in payload.fields() {
            let input: HtmlInputElement = document
                .create_element("input")
                .map_err(|e| FallbackError(js_message(e)))?
                .unchecked_into();
            input.set_type("hidden");
            input.set_name(name);
            input.set_value(value);
            form.append_child(&input)
                .map_err(|e| FallbackError(js_message(e)))?;
        }

        Self::append_to_body(&document, &form)?;
        let submitted = form.submit().map_err(|e| FallbackError(js_message(e)));
        form.remove();
        submitted
    }
}

/// `document.body.classList`
#[derive(Debug, Clone)]
pub struct BodyClassList(web_sys::DomTokenList);

impl BodyClassList {
    pub fn current() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self(body.class_list()))
    }
}

impl ClassList for BodyClassList {
    fn add(&self, class: &str) {
        if let Err(e) = self.0.add_1(class) {
            leptos::logging::warn!("Failed to add body class {}: {:?}", class, e);
        }
    }

    fn remove(&self, class: &str) {
        if let Err(e) = self.0.remove_1(class) {
            leptos::logging::warn!("Failed to remove body class {}: {:?}", class, e);
        }
    }
}
