use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{NewProduct, NewUser, Product, ProductPatch, User},
};

pub mod postgres;

pub use self::postgres::{PgProductStore, PgUserStore};

/// Storage contract for the `users` table. Absent rows come back as
/// `Ok(None)` / `Ok(false)`; `Err` is reserved for storage failures.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn list_all(&self) -> AppResult<Vec<User>>;

    /// Delete a user together with every product the user owns, atomically.
    /// Returns `Ok(false)` without side effects when no such user exists.
    async fn delete_cascading(&self, user_id: i32) -> AppResult<bool>;
}

/// Storage contract for the `products` table.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn insert(&self, product: NewProduct) -> AppResult<Product>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Names are not unique; this returns whichever matching row the store
    /// yields first.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>>;

    async fn list_by_seller(&self, seller_id: i32) -> AppResult<Vec<Product>>;

    async fn list_all(&self) -> AppResult<Vec<Product>>;

    /// Update name/price/quantity of one row. The seller id is immutable.
    /// Returns `Ok(false)` when the row does not exist.
    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<bool>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}
