//! Forwarding of contact records to the external tabular-data service.
//!
//! One POST per record, authenticated with a bearer token. There is no retry:
//! the caller shows the error to the user and that is the end of it.

use common::model::contact::ContactRecord;
use gloo_net::http::Request;
use log::info;

use super::config::{RECORDS_API_TOKEN, RECORDS_API_URL};

/// Sends `record` as a new row.
///
/// # Returns
/// - `Ok(())` when the service answered with a 2xx status.
/// - `Err(String)` with a Spanish, user-facing message otherwise, including
///   when the build carries no endpoint or token.
pub async fn forward_contact(record: &ContactRecord) -> Result<(), String> {
    let (Some(url), Some(token)) = (RECORDS_API_URL, RECORDS_API_TOKEN) else {
        return Err("El envío de formularios no está configurado.".to_string());
    };

    let response = Request::post(url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&record.to_row_payload())
        .map_err(|e| format!("No se pudo preparar el envío: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No se pudo contactar el servicio: {}", e))?;

    if response.ok() {
        info!("contact record forwarded");
        Ok(())
    } else {
        Err(format!(
            "El servicio respondió {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        ))
    }
}
