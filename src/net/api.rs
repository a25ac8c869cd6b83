//! REST helpers for communicating with the study-assistant backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Text payloads go
//! as JSON bodies; file payloads go as multipart form bodies with a single
//! `file` field. Server-side (SSR): stubs returning errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! On a non-success status the raw backend body is written to the console
//! log only; callers get a fixed, action-specific message per endpoint so
//! backend error text never reaches the UI. Each call is one round trip:
//! no retry, no timeout, no caching.

#![allow(clippy::unused_async)]

use super::types::{DocumentInfo, IndexedSummary, PlanRequest, PlanResponse, QueryResponse};

#[cfg(feature = "hydrate")]
use super::backend_url;
#[cfg(feature = "hydrate")]
use super::types::{OcrResponse, UploadResponse};

/// Read the body of a failed response (tolerating read failure), log the
/// status and body, and produce the caller-facing message.
#[cfg(feature = "hydrate")]
async fn request_failed(
    endpoint: &str,
    message: &str,
    resp: gloo_net::http::Response,
) -> String {
    let body = resp.text().await.unwrap_or_default();
    log::error!("error en {endpoint}: {} {body}", resp.status());
    message.to_owned()
}

/// Build a multipart form body holding a single `file` field.
#[cfg(feature = "hydrate")]
fn file_form(file: &web_sys::File) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|_| "no se pudo preparar el archivo".to_owned())?;
    form.append_with_blob("file", file)
        .map_err(|_| "no se pudo preparar el archivo".to_owned())?;
    Ok(form)
}

/// Ask a free-text question via `POST /query`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
pub async fn ask_query(question: &str) -> Result<QueryResponse, String> {
    const MESSAGE: &str = "Error al consultar /query";
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "pregunta": question });
        let resp = gloo_net::http::Request::post(&backend_url("/query"))
            .json(&body)
            .map_err(|_| MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(request_failed("/query", MESSAGE, resp).await);
        }
        resp.json::<QueryResponse>()
            .await
            .map_err(|_| MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err(MESSAGE.to_owned())
    }
}

/// Generate a spaced-repetition plan via `POST /plan-repaso`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
pub async fn create_plan(request: &PlanRequest) -> Result<PlanResponse, String> {
    const MESSAGE: &str = "Error al generar el plan de repaso";
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&backend_url("/plan-repaso"))
            .json(request)
            .map_err(|_| MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(request_failed("/plan-repaso", MESSAGE, resp).await);
        }
        resp.json::<PlanResponse>()
            .await
            .map_err(|_| MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(MESSAGE.to_owned())
    }
}

/// Extract text from an image via `POST /ocr-imagen`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
#[cfg(feature = "hydrate")]
pub async fn ocr_image(file: &web_sys::File) -> Result<OcrResponse, String> {
    const MESSAGE: &str = "Error al procesar la imagen";
    let form = file_form(file)?;
    let resp = gloo_net::http::Request::post(&backend_url("/ocr-imagen"))
        .body(form)
        .map_err(|_| MESSAGE.to_owned())?
        .send()
        .await
        .map_err(|_| MESSAGE.to_owned())?;
    if !resp.ok() {
        return Err(request_failed("/ocr-imagen", MESSAGE, resp).await);
    }
    resp.json::<OcrResponse>()
        .await
        .map_err(|_| MESSAGE.to_owned())
}

/// Upload a document for ingestion via `POST /upload-document`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
#[cfg(feature = "hydrate")]
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, String> {
    const MESSAGE: &str = "Error al subir el documento";
    let form = file_form(file)?;
    let resp = gloo_net::http::Request::post(&backend_url("/upload-document"))
        .body(form)
        .map_err(|_| MESSAGE.to_owned())?
        .send()
        .await
        .map_err(|_| MESSAGE.to_owned())?;
    if !resp.ok() {
        return Err(request_failed("/upload-document", MESSAGE, resp).await);
    }
    resp.json::<UploadResponse>()
        .await
        .map_err(|_| MESSAGE.to_owned())
}

/// List the documents available to the backend via `GET /list-docs`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
pub async fn list_docs() -> Result<Vec<DocumentInfo>, String> {
    const MESSAGE: &str = "Error al listar documentos";
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&backend_url("/list-docs"))
            .send()
            .await
            .map_err(|_| MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(request_failed("/list-docs", MESSAGE, resp).await);
        }
        resp.json::<Vec<DocumentInfo>>()
            .await
            .map_err(|_| MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(MESSAGE.to_owned())
    }
}

/// Fetch the indexed-document summary via `GET /documentos-indexados`.
///
/// # Errors
///
/// Returns a generic message if the request or response handling fails.
pub async fn indexed_documents() -> Result<IndexedSummary, String> {
    const MESSAGE: &str = "Error al consultar documentos indexados";
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&backend_url("/documentos-indexados"))
            .send()
            .await
            .map_err(|_| MESSAGE.to_owned())?;
        if !resp.ok() {
            return Err(request_failed("/documentos-indexados", MESSAGE, resp).await);
        }
        resp.json::<IndexedSummary>()
            .await
            .map_err(|_| MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(MESSAGE.to_owned())
    }
}
