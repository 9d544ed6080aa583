mod common;

use std::io::Cursor;

use common::MemStore;
use marketplace_cli::{
    console,
    services::{AccountService, CatalogService},
};

async fn run_session(store: &MemStore, script: &str) -> anyhow::Result<String> {
    let accounts = AccountService::new(store.clone());
    let catalog = CatalogService::new(store.clone());
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    console::run(&accounts, &catalog, &mut input, &mut output).await?;
    Ok(String::from_utf8(output)?)
}

#[tokio::test]
async fn seller_registers_logs_in_and_adds_a_product() -> anyhow::Result<()> {
    let store = MemStore::new();

    // Register a seller, log in, add a product, list own products, log out,
    // exit.
    let script = "1\nada\nada@example.com\ns3cret\n2\n\
                  2\nada@example.com\ns3cret\n\
                  1\nLamp\n19.99\n5\n\
                  4\n\
                  5\n\
                  3\n";
    let printed = run_session(&store, script).await?;

    assert!(printed.contains("User registered successfully!"));
    assert!(printed.contains("Login successful! Welcome, ada"));
    assert!(printed.contains("Product added successfully."));
    assert!(printed.contains("1: Lamp - $19.99"));
    assert!(printed.contains("You have successfully logged out."));
    assert!(printed.contains("Exiting the application. Goodbye!"));

    assert_eq!(store.product_count(), 1);
    Ok(())
}

#[tokio::test]
async fn bad_credentials_do_not_open_a_menu() -> anyhow::Result<()> {
    let store = MemStore::new();

    let script = "1\nbob\nbob@example.com\nhunter2\n1\n\
                  2\nbob@example.com\nwrong\n\
                  3\n";
    let printed = run_session(&store, script).await?;

    assert!(printed.contains("Invalid email or password."));
    assert!(!printed.contains("Login successful!"));
    Ok(())
}

#[tokio::test]
async fn admin_deletes_a_seller_and_their_products() -> anyhow::Result<()> {
    let store = MemStore::new();

    // Seller sets up shop.
    let seller_script = "1\nada\nada@example.com\ns3cret\n2\n\
                         2\nada@example.com\ns3cret\n\
                         1\nLamp\n19.99\n5\n1\nChair\n45.00\n2\n\
                         5\n\
                         3\n";
    run_session(&store, seller_script).await?;
    assert_eq!(store.product_count(), 2);

    // Admin removes the seller; products go with the user, atomically.
    let admin_script = "1\nroot\nroot@example.com\nadminpw\n3\n\
                        2\nroot@example.com\nadminpw\n\
                        2\n1\n\
                        4\n\
                        3\n";
    let printed = run_session(&store, admin_script).await?;

    assert!(printed.contains("User with ID 1 has been successfully deleted."));
    assert_eq!(store.user_count(), 1);
    assert_eq!(store.product_count(), 0);
    Ok(())
}
