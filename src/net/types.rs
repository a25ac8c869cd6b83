//! Wire types exchanged with the study-assistant backend.
//!
//! Field names on the wire are the backend's Spanish identifiers; structs
//! expose English field names via serde renames. Loosely populated backend
//! fields (`tipo`, `size_bytes`, `chunks`) stay optional and get fallback
//! rendering at the view layer instead of validation here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One retrieved fragment backing an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceFragment {
    #[serde(rename = "texto")]
    pub text: String,
    pub source_path: String,
    #[serde(default)]
    pub chunk_index: u64,
    #[serde(default)]
    pub score: f64,
}

/// Answer to a free-text question, with provenance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(rename = "pregunta")]
    pub question: String,
    #[serde(rename = "respuesta")]
    pub answer: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "detalle_origen", default)]
    pub origin_detail: String,
    #[serde(rename = "fuentes", default)]
    pub sources: Vec<SourceFragment>,
}

/// Text extracted from an uploaded image. May be empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OcrResponse {
    #[serde(rename = "texto")]
    pub text: String,
}

/// A document known to the backend but not necessarily indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(rename = "tipo", default)]
    pub file_type: Option<String>,
}

/// An indexed document; adds the per-document chunk count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(rename = "tipo", default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub chunks: Option<u64>,
}

/// Summary of everything indexed in the vector store.
///
/// `Default` is the empty summary, used when the fetch fails and the
/// document panel degrades gracefully instead of showing an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexedSummary {
    #[serde(default)]
    pub total_chunks: u64,
    #[serde(rename = "total_documentos", default)]
    pub total_documents: u64,
    #[serde(rename = "documentos", default)]
    pub documents: Vec<IndexedDocument>,
}

/// Confirmation returned after a document upload and re-ingestion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    #[serde(rename = "chunks_ingresados")]
    pub ingested_chunks: u64,
}

/// One block of a structured session description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DescriptionBlock {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_json::Value>,
}

/// Session description as sent by the backend: either a plain string or an
/// ordered list of typed blocks. The payload carries no discriminant, so
/// the untagged representation resolves the shape at deserialization time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionDescription {
    Text(String),
    Blocks(Vec<DescriptionBlock>),
}

/// A single spaced-repetition session in a generated plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewSession {
    #[serde(rename = "tipo")]
    pub session_type: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "descripcion")]
    pub description: SessionDescription,
}

/// A generated spaced-repetition plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: String,
    #[serde(rename = "sesiones", default)]
    pub sessions: Vec<ReviewSession>,
}

/// Request body for plan generation. Blank optionals are omitted from the
/// serialized body rather than sent as empty strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(rename = "fecha_inicio", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
