//! Server-rendered receive flow: blank form, then either the printable
//! receipt or the form again with the save alert.

use crate::{
    errors::{ApiError, ServiceError},
    models::receipt::{format_receipt_date, generate_receipt_number, ReceiptData, ReceiptForm},
    tracing::log_error,
    views::RECEIPT_SAVE_ALERT,
    AppState,
};
use axum::{extract::State, response::Html, Form};
use chrono::Utc;
use tracing::info;

pub async fn receive_form(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state
        .services
        .renderer
        .receive_form(&ReceiptForm::default(), None)?;
    Ok(Html(html))
}

pub async fn submit_receive_form(
    State(state): State<AppState>,
    Form(form): Form<ReceiptForm>,
) -> Result<Html<String>, ApiError> {
    let now = Utc::now();
    let receipt_number = generate_receipt_number(now.date_naive(), &mut rand::thread_rng());
    let receipt = form
        .clone()
        .into_receipt_data(receipt_number, format_receipt_date(now));

    let renderer = &state.services.renderer;
    match store(&state, &receipt).await {
        Ok(()) => {
            info!(receipt_number = %receipt.receipt_number, "Receipt ready to print");
            Ok(Html(renderer.receipt(&receipt)?))
        }
        Err(err) => {
            log_error(&err, err.kind(), Some("Error saving material receipt"));
            Ok(Html(renderer.receive_form(&form, Some(RECEIPT_SAVE_ALERT))?))
        }
    }
}

async fn store(state: &AppState, receipt: &ReceiptData) -> Result<(), ServiceError> {
    let payload = receipt.to_payload()?;
    state.services.receipts.record_receipt(payload).await?;
    Ok(())
}
