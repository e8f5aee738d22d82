//! Data access for the student export.
//!
//! Handlers depend on the trait, never on a pool directly, so tests can swap
//! in a mock and the query stays in one place.

use async_trait::async_trait;

use super::DatabasePool;
use crate::models::Aluno;

/// The one query this service exists for. Parameterless and fixed; row order
/// is whatever the store returns (no ORDER BY).
const ACTIVE_STUDENTS_SQL: &str = "SELECT id, nome_aluno, cpf_aluno FROM alunos \
     WHERE situacao = 'Ativo' AND cpf_aluno IS NOT NULL AND cpf_aluno != ''";

const COUNT_STUDENTS_SQL: &str = "SELECT COUNT(*) FROM alunos";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All active students that have a non-empty CPF.
    async fn list_active_with_cpf(&self) -> Result<Vec<Aluno>, sqlx::Error>;

    /// Total row count of the `alunos` table, regardless of status.
    async fn count_students(&self) -> Result<i64, sqlx::Error>;
}

/// MySQL-backed repository over the shared pool.
#[derive(Clone)]
pub struct SqlStudentRepository {
    pool: DatabasePool,
}

impl SqlStudentRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqlStudentRepository {
    async fn list_active_with_cpf(&self) -> Result<Vec<Aluno>, sqlx::Error> {
        sqlx::query_as::<_, Aluno>(ACTIVE_STUDENTS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn count_students(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(COUNT_STUDENTS_SQL)
            .fetch_one(&self.pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The filters are the contract: never export an inactive student or one
    // without a CPF on file.
    #[test]
    fn export_query_filters_status_and_cpf() {
        assert!(ACTIVE_STUDENTS_SQL.contains("situacao = 'Ativo'"));
        assert!(ACTIVE_STUDENTS_SQL.contains("cpf_aluno IS NOT NULL"));
        assert!(ACTIVE_STUDENTS_SQL.contains("cpf_aluno != ''"));
        assert!(!ACTIVE_STUDENTS_SQL.contains("ORDER BY"));
    }
}
