pub mod account;
pub mod catalog;

pub use self::account::AccountService;
pub use self::catalog::CatalogService;
