//! Postgres-backed store.
//!
//! Runtime sqlx queries against two tables. Stock mutations run inside a
//! transaction that locks the row (`SELECT ... FOR UPDATE`), so concurrent
//! restock/purchase on the same sweet serialize at the storage layer and a
//! lost update is impossible. An error on any path rolls the transaction
//! back; partial mutations are never visible.

use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

use sweetshop_auth::{NewUser, Role, User};
use sweetshop_catalog::{NewSweet, Sweet, SweetPatch, purchase_stock, restock_stock};
use sweetshop_core::{DomainError, SweetId};

use crate::{StoreError, StoreResult, SweetStore, UserStore};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              BIGSERIAL PRIMARY KEY,
    username        TEXT NOT NULL UNIQUE,
    password_digest TEXT NOT NULL,
    role            TEXT NOT NULL DEFAULT 'user'
);

CREATE TABLE IF NOT EXISTS sweets (
    id       BIGSERIAL PRIMARY KEY,
    name     TEXT NOT NULL,
    category TEXT NOT NULL,
    price    DOUBLE PRECISION NOT NULL,
    stock    BIGINT NOT NULL DEFAULT 0,
    CONSTRAINT sweets_stock_non_negative CHECK (stock >= 0)
);
"#;

/// Postgres store over a shared connection pool.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str) -> StoreResult<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Create the tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!("postgres schema ensured");
        Ok(())
    }
}

fn user_from_row(row: &PgRow) -> StoreResult<User> {
    let role: String = row.try_get("role")?;
    let role: Role = role.parse().map_err(StoreError::Backend)?;

    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        password_digest: row.try_get("password_digest")?,
        role,
    })
}

fn sweet_from_row(row: &PgRow) -> StoreResult<Sweet> {
    Ok(Sweet {
        id: SweetId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
    })
}

#[async_trait]
impl UserStore for PostgresStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let row = sqlx::query(
            "INSERT INTO users (username, password_digest, role) VALUES ($1, $2, $3) \
             RETURNING id, username, password_digest, role",
        )
        .bind(&user.username)
        .bind(&user.password_digest)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match StoreError::from(e) {
            StoreError::Domain(DomainError::Conflict(_)) => {
                DomainError::conflict("username already registered").into()
            }
            other => other,
        })?;

        user_from_row(&row)
    }

    async fn find_user(&self, username: &str) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password_digest, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(user_from_row).transpose()
    }
}

#[async_trait]
impl SweetStore for PostgresStore {
    async fn insert_sweet(&self, draft: NewSweet) -> StoreResult<Sweet> {
        let row = sqlx::query(
            "INSERT INTO sweets (name, category, price, stock) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, category, price, stock",
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.price)
        .bind(draft.stock)
        .fetch_one(&self.pool)
        .await?;

        sweet_from_row(&row)
    }

    async fn get_sweet(&self, id: SweetId) -> StoreResult<Option<Sweet>> {
        let row = sqlx::query("SELECT id, name, category, price, stock FROM sweets WHERE id = $1")
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(sweet_from_row).transpose()
    }

    async fn list_sweets(&self) -> StoreResult<Vec<Sweet>> {
        let rows = sqlx::query("SELECT id, name, category, price, stock FROM sweets ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(sweet_from_row).collect()
    }

    async fn search_sweets(&self, query: &str) -> StoreResult<Vec<Sweet>> {
        if query.is_empty() {
            return self.list_sweets().await;
        }

        let pattern = format!("%{query}%");
        let rows = sqlx::query(
            "SELECT id, name, category, price, stock FROM sweets \
             WHERE name ILIKE $1 OR category ILIKE $1 ORDER BY id",
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(sweet_from_row).collect()
    }

    async fn update_sweet(&self, id: SweetId, patch: SweetPatch) -> StoreResult<Sweet> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "SELECT id, name, category, price, stock FROM sweets WHERE id = $1 FOR UPDATE",
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let row = row.ok_or(DomainError::NotFound)?;
        let mut sweet = sweet_from_row(&row)?;
        patch.apply(&mut sweet);

        sqlx::query("UPDATE sweets SET name = $2, category = $3, price = $4, stock = $5 WHERE id = $1")
            .bind(id.as_i64())
            .bind(&sweet.name)
            .bind(&sweet.category)
            .bind(sweet.price)
            .bind(sweet.stock)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(sweet)
    }

    async fn delete_sweet(&self, id: SweetId) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM sweets WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound.into());
        }
        Ok(())
    }

    async fn restock(&self, id: SweetId, quantity: i64) -> StoreResult<i64> {
        self.mutate_stock(id, |stock| restock_stock(stock, quantity)).await
    }

    async fn purchase(&self, id: SweetId, quantity: i64) -> StoreResult<i64> {
        self.mutate_stock(id, |stock| purchase_stock(stock, quantity)).await
    }
}

impl PostgresStore {
    /// Read-check-write one sweet's stock with the row locked.
    ///
    /// Dropping the transaction without commit rolls it back, so any error
    /// leaves the stored stock untouched.
    async fn mutate_stock(
        &self,
        id: SweetId,
        transition: impl FnOnce(i64) -> Result<i64, DomainError> + Send,
    ) -> StoreResult<i64> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("SELECT stock FROM sweets WHERE id = $1 FOR UPDATE")
            .bind(id.as_i64())
            .fetch_optional(&mut *tx)
            .await?;

        let row = row.ok_or(DomainError::NotFound)?;
        let stock: i64 = row.try_get("stock")?;
        let new_stock = transition(stock)?;

        sqlx::query("UPDATE sweets SET stock = $2 WHERE id = $1")
            .bind(id.as_i64())
            .bind(new_stock)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(new_stock)
    }
}
