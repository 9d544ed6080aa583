use crate::{
    error::AppResult,
    models::{NewProduct, Product, ProductPatch},
    store::ProductStore,
};

/// Thin dispatch layer over the product store. No business rules live here;
/// the console layer turns these results into printed output.
pub struct CatalogService<S> {
    products: S,
}

impl<S: ProductStore> CatalogService<S> {
    pub fn new(products: S) -> Self {
        Self { products }
    }

    pub async fn browse(&self) -> AppResult<Vec<Product>> {
        self.products.list_all().await
    }

    /// First match only; product names are not unique.
    pub async fn search(&self, name: &str) -> AppResult<Option<Product>> {
        self.products.find_by_name(name).await
    }

    pub async fn details(&self, id: i32) -> AppResult<Option<Product>> {
        self.products.find_by_id(id).await
    }

    pub async fn add(&self, product: NewProduct) -> AppResult<Product> {
        self.products.insert(product).await
    }

    pub async fn update(&self, id: i32, patch: ProductPatch) -> AppResult<bool> {
        self.products.update(id, patch).await
    }

    pub async fn remove(&self, id: i32) -> AppResult<bool> {
        self.products.delete(id).await
    }

    pub async fn by_seller(&self, seller_id: i32) -> AppResult<Vec<Product>> {
        self.products.list_by_seller(seller_id).await
    }

    /// Admin view: the full catalog, annotated with the owning seller id.
    pub async fn all_with_sellers(&self) -> AppResult<Vec<Product>> {
        self.products.list_all().await
    }
}
