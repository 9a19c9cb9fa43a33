//! Ledger downloads.

use axum::extract::{Path, State};
use axum_extra::response::Attachment;
use engine::ExportFormat;

use crate::{ServerError, server::ServerState};

/// Encode the current ledger snapshot as `format`.
pub async fn download(
    State(state): State<ServerState>,
    Path(format): Path<String>,
) -> Result<Attachment<Vec<u8>>, ServerError> {
    let format: ExportFormat = format.parse()?;
    let snapshot = state.engine.list_expenses().await?;
    let bytes = format.encode(&snapshot)?;
    tracing::debug!(%format, rows = snapshot.len(), "exported expenses");

    Ok(Attachment::new(bytes)
        .filename(format.file_name())
        .content_type(format.mime_type()))
}
