//! HTTP client for the computation and drawing endpoints.

use serde::Deserialize;

use railplan_core::prelude::*;
use railplan_core::{Project, Proposal};

use crate::format::ExportFormat;

const COMPUTE_ENDPOINT: &str = "/api/process-data";

/// Success envelope returned by the computation endpoint:
/// `{ "status": "success", "data": { ... } }`.
#[derive(Deserialize)]
struct ComputeEnvelope {
    data: Proposal,
}

/// Client for the remote computation and drawing service.
///
/// Cheap to clone; clones share the underlying agent. The blocking
/// methods are wrapped in `spawn_blocking` by the async ones, which is
/// what the application layer calls.
#[derive(Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`
    /// (e.g. `http://127.0.0.1:8000`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        // Non-2xx must come back as a readable response, not an error,
        // so the service's `detail` body can be surfaced verbatim.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Submit the order for computation. Returns the unwrapped proposal on
    /// success; non-2xx responses surface the service `detail` message.
    pub fn compute_blocking(&self, project: &Project) -> Result<Proposal> {
        let url = self.url(COMPUTE_ENDPOINT);
        debug!(url = %url, "submitting project for computation");

        let mut response = self
            .agent
            .post(&url)
            .send_json(project)
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &mut response));
        }

        let envelope: ComputeEnvelope = response
            .body_mut()
            .read_json()
            .map_err(|e| Error::transport(format!("malformed service response: {e}")))?;
        info!(
            segments = envelope.data.segments.len(),
            nomenclature_lines = envelope.data.nomenclature.len(),
            "computation succeeded"
        );
        Ok(envelope.data)
    }

    /// Re-post a cached proposal to the drawing endpoint for `format` and
    /// return the raw file bytes.
    pub fn export_blocking(&self, proposal: &Proposal, format: ExportFormat) -> Result<Vec<u8>> {
        let url = self.url(format.endpoint());
        debug!(url = %url, format = %format, "requesting drawing export");

        let mut response = self
            .agent
            .post(&url)
            .send_json(proposal)
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &mut response));
        }

        let bytes = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| Error::transport(format!("failed to read drawing body: {e}")))?;
        info!(format = %format, bytes = bytes.len(), "drawing export succeeded");
        Ok(bytes)
    }

    /// Async wrapper around [`ApiClient::compute_blocking`].
    pub async fn compute(&self, project: Project) -> Result<Proposal> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.compute_blocking(&project))
            .await
            .map_err(|e| Error::transport(format!("task join error: {e}")))?
    }

    /// Async wrapper around [`ApiClient::export_blocking`].
    pub async fn export(&self, proposal: Proposal, format: ExportFormat) -> Result<Vec<u8>> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.export_blocking(&proposal, format))
            .await
            .map_err(|e| Error::transport(format!("task join error: {e}")))?
    }
}

/// Build a service error from a non-2xx response, pulling the `detail`
/// field out of the JSON body when one is present.
fn error_from_response(status: u16, response: &mut ureq::http::Response<ureq::Body>) -> Error {
    let detail = response
        .body_mut()
        .read_json::<serde_json::Value>()
        .ok()
        .and_then(|body| extract_detail(&body));
    warn!(status, detail = detail.as_deref(), "service returned an error");
    Error::service(status, detail)
}

fn extract_detail(body: &serde_json::Value) -> Option<String> {
    body.get("detail").and_then(|d| match d {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(
            client.url(ExportFormat::Pdf.endpoint()),
            "http://127.0.0.1:8000/api/draw-pdf"
        );
    }

    #[test]
    fn compute_envelope_unwraps_the_data_field() {
        let json = serde_json::json!({
            "status": "success",
            "data": {
                "titre_plan": "t", "nom_client": "c", "date_chantier": "d",
                "description_projet": "p",
                "nomenclature": [], "morceaux": [],
                "hauteur_totale": 1020, "hauteur_lisse_basse": 100,
                "poteau_dims": "40x40", "liaison_dims": "40x20",
                "lissehaute_dims": "40x40", "lissebasse_dims": "40x40",
                "barreau_dims": "20x20",
                "platine_details": null,
                "remplissage_type": "aucun",
                "remplissage_details": null
            }
        });
        let envelope: ComputeEnvelope = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.data.plan_title, "t");
        assert_eq!(envelope.data.total_height_mm, 1020);
    }

    #[test]
    fn detail_extraction_handles_string_and_structured_bodies() {
        let body = serde_json::json!({"detail": "Erreur de validation"});
        assert_eq!(extract_detail(&body).as_deref(), Some("Erreur de validation"));

        let body = serde_json::json!({"detail": {"loc": ["hauteur_totale"]}});
        assert!(extract_detail(&body).unwrap().contains("hauteur_totale"));

        let body = serde_json::json!({"message": "nope"});
        assert_eq!(extract_detail(&body), None);
    }
}
