//! Rows exported to the recognition client.

use serde::{Deserialize, Serialize};

/// A student row as returned by the export query.
///
/// Column names are preserved verbatim because the recognition client matches
/// on them. `situacao` is filtered on by the query but never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Aluno {
    pub id: i64,
    pub nome_aluno: String,
    pub cpf_aluno: String,
}
