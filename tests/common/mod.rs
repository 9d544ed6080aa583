// Shared by several integration-test binaries; not every binary uses every
// helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use marketplace_cli::{
    error::AppResult,
    models::{NewProduct, NewUser, Product, ProductPatch, User},
    store::{ProductStore, UserStore},
};

/// In-memory stand-in for the Postgres stores. Clones share the same data,
/// so one `MemStore` can back both services in a test while the test keeps a
/// handle for direct inspection.
#[derive(Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    products: Vec<Product>,
    next_user_id: i32,
    next_product_id: i32,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }

    pub fn product_count(&self) -> usize {
        self.inner.lock().unwrap().products.len()
    }
}

#[async_trait]
impl UserStore for MemStore {
    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn delete_cascading(&self, user_id: i32) -> AppResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        // Mirror the transactional contract: when the user row is absent,
        // nothing at all changes.
        if !inner.users.iter().any(|u| u.id == user_id) {
            return Ok(false);
        }
        inner.products.retain(|p| p.seller_id != user_id);
        inner.users.retain(|u| u.id != user_id);
        Ok(true)
    }
}

#[async_trait]
impl ProductStore for MemStore {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_product_id += 1;
        let product = Product {
            id: inner.next_product_id,
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            seller_id: product.seller_id,
        };
        inner.products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.products.iter().find(|p| p.name == name).cloned())
    }

    async fn list_by_seller(&self, seller_id: i32) -> AppResult<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .products
            .iter()
            .filter(|p| p.seller_id == seller_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.inner.lock().unwrap().products.clone())
    }

    async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        match inner.products.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.name = patch.name;
                p.price = patch.price;
                p.quantity = patch.quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.products.len();
        inner.products.retain(|p| p.id != id);
        Ok(inner.products.len() < before)
    }
}
