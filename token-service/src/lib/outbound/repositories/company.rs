use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::Company;
use crate::domain::credential::models::CompanyId;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::ports::CompanyRepository;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn company_from_row(row: &PgRow) -> Result<Company, CredentialError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let name: String = row
            .try_get("name")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let password_hash: String = row
            .try_get("password_hash")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let active: bool = row
            .try_get("active")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        Ok(Company {
            id: CompanyId(id),
            name: CompanyName::new(name)?,
            password_hash,
            active,
            created_at,
        })
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CredentialError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, name, password_hash, active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(company.id.0)
        .bind(company.name.as_str())
        .bind(&company.password_hash)
        .bind(company.active)
        .bind(company.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("companies_name_key")
                {
                    return CredentialError::DuplicateName(company.name.as_str().to_string());
                }
            }
            CredentialError::DatabaseError(e.to_string())
        })?;

        Ok(company)
    }

    async fn find_by_name(&self, name: &CompanyName) -> Result<Option<Company>, CredentialError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, password_hash, active, created_at
            FROM companies
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::company_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn set_active(&self, id: &CompanyId, active: bool) -> Result<(), CredentialError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET active = $2
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(active)
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CredentialError::DatabaseError(format!(
                "no company with id {}",
                id
            )));
        }

        Ok(())
    }
}
