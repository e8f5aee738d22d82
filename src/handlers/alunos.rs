//! Student export endpoint consumed by the facial recognition client.

use axum::extract::State;
use tracing::info;

use crate::{error::Result, handlers::response::JsonUtf8, models::Aluno, AppState};

/// Export every active student with a CPF on file, as a plain JSON array.
///
/// The request carries no parameters; method, query string and body are
/// ignored. Any repository failure is mapped by [`crate::error::ApiError`]
/// to a 500 with the legacy error body.
pub async fn list_active_students(State(state): State<AppState>) -> Result<JsonUtf8<Vec<Aluno>>> {
    let alunos = state.repository.list_active_with_cpf().await?;

    info!(count = alunos.len(), "student export served");
    Ok(JsonUtf8(alunos))
}
