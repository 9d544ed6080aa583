use async_trait::async_trait;

use crate::{
    db::DbPool,
    error::AppResult,
    models::{NewProduct, NewUser, Product, ProductPatch, Role, User},
    store::{ProductStore, UserStore},
};

/// Raw `users` row. The role is decoded as free text first and converted to
/// the tagged enum afterwards, so a row with an unrecognized role can be
/// skipped instead of failing the whole query.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    username: String,
    email: String,
    #[sqlx(rename = "password")]
    password_hash: String,
    role: String,
}

impl UserRow {
    fn into_user(self) -> Option<User> {
        let role = match Role::parse(&self.role) {
            Some(role) => role,
            None => {
                tracing::warn!(user_id = self.id, role = %self.role, "skipping user with unknown role");
                return None;
            }
        };
        Some(User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            role,
        })
    }
}

#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let id: (i32,) = sqlx::query_as(
            "INSERT INTO users (username, password, email, role) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(User {
            id: id.0,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.and_then(UserRow::into_user))
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().filter_map(UserRow::into_user).collect())
    }

    async fn delete_cascading(&self, user_id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM products WHERE seller_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        // No such user: undo the product deletions as well, so a delete of a
        // nonexistent id has zero side effects.
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}

#[derive(Clone)]
pub struct PgProductStore {
    pool: DbPool,
}

impl PgProductStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let id: (i32,) = sqlx::query_as(
            "INSERT INTO products (name, price, quantity, seller_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .bind(product.seller_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id: id.0,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            seller_id: product.seller_id,
        })
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let product = sqlx::query_as("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let product = sqlx::query_as("SELECT * FROM products WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(product)
    }

    async fn list_by_seller(&self, seller_id: i32) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as("SELECT * FROM products WHERE seller_id = $1 ORDER BY id")
            .bind(seller_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn list_all(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as("SELECT * FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE products SET name = $1, price = $2, quantity = $3 WHERE id = $4")
                .bind(&patch.name)
                .bind(patch.price)
                .bind(patch.quantity)
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
