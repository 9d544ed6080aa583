mod common;

use common::MemStore;
use marketplace_cli::{models::Role, services::AccountService, store::UserStore};

#[tokio::test]
async fn duplicate_email_registration_fails_and_keeps_first_row() -> anyhow::Result<()> {
    let store = MemStore::new();
    let accounts = AccountService::new(store.clone());

    assert!(
        accounts
            .register("ada", "ada@example.com", "s3cret", Role::Seller)
            .await?
    );
    assert!(
        !accounts
            .register("impostor", "ada@example.com", "other", Role::Buyer)
            .await?
    );

    let users = accounts.list_users().await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "ada");
    assert_eq!(users[0].role, Role::Seller);
    Ok(())
}

#[tokio::test]
async fn register_then_login_round_trip() -> anyhow::Result<()> {
    let store = MemStore::new();
    let accounts = AccountService::new(store.clone());

    accounts
        .register("bob", "bob@example.com", "hunter2", Role::Buyer)
        .await?;

    let identity = accounts
        .login("bob@example.com", "hunter2")
        .await?
        .expect("valid credentials should yield an identity");
    assert_eq!(identity.username, "bob");
    assert_eq!(identity.email, "bob@example.com");
    assert_eq!(identity.role, Role::Buyer);

    let stored = store.find_by_email("bob@example.com").await?.unwrap();
    assert_eq!(stored.id, identity.id);
    // The stored row carries a hash, never the plaintext.
    assert_ne!(stored.password_hash, "hunter2");
    Ok(())
}

#[tokio::test]
async fn wrong_password_or_unknown_email_yields_no_session() -> anyhow::Result<()> {
    let store = MemStore::new();
    let accounts = AccountService::new(store);

    accounts
        .register("carol", "carol@example.com", "correct", Role::Admin)
        .await?;

    assert!(accounts.login("carol@example.com", "wrong").await?.is_none());
    assert!(accounts.login("nobody@example.com", "correct").await?.is_none());
    Ok(())
}
