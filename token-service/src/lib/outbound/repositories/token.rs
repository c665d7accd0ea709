use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::credential::errors::CredentialError;
use crate::domain::credential::models::CompanyId;
use crate::domain::credential::models::CompanyName;
use crate::domain::credential::models::Token;
use crate::domain::credential::models::TokenId;
use crate::domain::credential::models::TokenOwner;
use crate::domain::credential::ports::TokenRepository;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Rows always come from the tokens-companies join below, so the
    // owner snapshot is present on every loaded token.
    fn token_from_row(row: &PgRow) -> Result<Token, CredentialError> {
        let id: Uuid = row
            .try_get("id")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let token_hash: String = row
            .try_get("token_hash")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let active: bool = row
            .try_get("active")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let created_at: DateTime<Utc> = row
            .try_get("created_at")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let company_id: Uuid = row
            .try_get("company_id")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let company_name: String = row
            .try_get("company_name")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;
        let company_active: bool = row
            .try_get("company_active")
            .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        Ok(Token {
            id: TokenId(id),
            token_hash,
            company: TokenOwner {
                id: CompanyId(company_id),
                name: CompanyName::new(company_name)?,
                active: company_active,
            },
            active,
            created_at,
        })
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn create(&self, token: Token) -> Result<Token, CredentialError> {
        sqlx::query(
            r#"
            INSERT INTO tokens (id, token_hash, company_id, active, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(token.id.0)
        .bind(&token.token_hash)
        .bind(token.company.id.0)
        .bind(token.active)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<Token>, CredentialError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.token_hash, t.active, t.created_at,
                   c.id AS company_id, c.name AS company_name, c.active AS company_active
            FROM tokens t
            JOIN companies c ON c.id = t.company_id
            WHERE t.token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::token_from_row(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_for_company(
        &self,
        company_id: &CompanyId,
    ) -> Result<Vec<Token>, CredentialError> {
        let rows = sqlx::query(
            r#"
            SELECT t.id, t.token_hash, t.active, t.created_at,
                   c.id AS company_id, c.name AS company_name, c.active AS company_active
            FROM tokens t
            JOIN companies c ON c.id = t.company_id
            WHERE t.company_id = $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(company_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CredentialError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::token_from_row).collect()
    }

    async fn set_active(&self, id: &TokenId, active: bool) -> Result<(), CredentialError> {
        let result = sqlx::query(
            r#"
            UPDATE tokens
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
                "no token with id {}",
                id
            )));
        }

        Ok(())
    }
}
