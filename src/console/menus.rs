use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::{Identity, NewProduct, ProductPatch},
    services::{AccountService, CatalogService},
    store::{ProductStore, UserStore},
};

use super::{prompt_decimal, prompt_i32, prompt_line, prompt_u32};

pub async fn buyer_menu<P, R, W>(
    catalog: &CatalogService<P>,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    P: ProductStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\nUser Menu:")?;
        writeln!(output, "1. Browse Products")?;
        writeln!(output, "2. Search Product by Name")?;
        writeln!(output, "3. View Product Details")?;
        writeln!(output, "4. Logout")?;

        match prompt_u32(input, output, "Enter your choice: ")? {
            1 => match catalog.browse().await {
                Ok(products) if products.is_empty() => {
                    writeln!(output, "No products available.")?
                }
                Ok(products) => {
                    for p in products {
                        writeln!(output, "{}: {} - ${}", p.id, p.name, p.price)?;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "browse failed");
                    writeln!(output, "Could not load products.")?;
                }
            },
            2 => {
                let name = prompt_line(input, output, "Enter product name to search: ")?;
                match catalog.search(&name).await {
                    Ok(Some(p)) => writeln!(output, "Found Product: {} - ${}", p.name, p.price)?,
                    Ok(None) => writeln!(output, "Product not found.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "search failed");
                        writeln!(output, "Could not search products.")?;
                    }
                }
            }
            3 => {
                let id = prompt_i32(input, output, "Enter product ID to view details: ")?;
                match catalog.details(id).await {
                    Ok(Some(p)) => {
                        writeln!(output, "Product Details:")?;
                        writeln!(output, "Name: {}", p.name)?;
                        writeln!(output, "Price: ${}", p.price)?;
                        writeln!(output, "Quantity: {}", p.quantity)?;
                    }
                    Ok(None) => writeln!(output, "Product not found.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "details failed");
                        writeln!(output, "Could not load product details.")?;
                    }
                }
            }
            4 => {
                writeln!(output, "Logging out...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

pub async fn seller_menu<P, R, W>(
    catalog: &CatalogService<P>,
    seller: &Identity,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    P: ProductStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\nUser Menu:")?;
        writeln!(output, "1. Add Product")?;
        writeln!(output, "2. Update Product")?;
        writeln!(output, "3. Delete Product")?;
        writeln!(output, "4. View My Products")?;
        writeln!(output, "5. Logout")?;

        match prompt_u32(input, output, "Enter your choice: ")? {
            1 => {
                let name = prompt_line(input, output, "Enter Product Name: ")?;
                let price = prompt_decimal(input, output, "Enter Product Price: ")?;
                let quantity = prompt_i32(input, output, "Enter Product Quantity: ")?;
                let new = NewProduct {
                    name,
                    price,
                    quantity,
                    seller_id: seller.id,
                };
                match catalog.add(new).await {
                    Ok(_) => writeln!(output, "Product added successfully.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "add product failed");
                        writeln!(output, "Failed to add product.")?;
                    }
                }
            }
            2 => {
                let id = prompt_i32(input, output, "Enter Product ID to update: ")?;
                let name = prompt_line(input, output, "Enter New Product Name: ")?;
                let price = prompt_decimal(input, output, "Enter New Product Price: ")?;
                let quantity = prompt_i32(input, output, "Enter New Product Quantity: ")?;
                let patch = ProductPatch {
                    name,
                    price,
                    quantity,
                };
                match catalog.update(id, patch).await {
                    Ok(true) => writeln!(output, "Product updated successfully.")?,
                    Ok(false) => writeln!(output, "Failed to update product.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "update product failed");
                        writeln!(output, "Failed to update product.")?;
                    }
                }
            }
            3 => {
                let id = prompt_i32(input, output, "Enter Product ID to delete: ")?;
                match catalog.remove(id).await {
                    Ok(true) => writeln!(output, "Product deleted successfully.")?,
                    Ok(false) => writeln!(output, "Failed to delete product.")?,
                    Err(err) => {
                        tracing::error!(error = %err, "delete product failed");
                        writeln!(output, "Failed to delete product.")?;
                    }
                }
            }
            4 => match catalog.by_seller(seller.id).await {
                Ok(products) if products.is_empty() => {
                    writeln!(output, "No products found for the seller.")?
                }
                Ok(products) => {
                    for p in products {
                        writeln!(output, "{}: {} - ${}", p.id, p.name, p.price)?;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "list seller products failed");
                    writeln!(output, "Could not load your products.")?;
                }
            },
            5 => {
                writeln!(output, "Logging out...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

pub async fn admin_menu<U, P, R, W>(
    accounts: &AccountService<U>,
    catalog: &CatalogService<P>,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    U: UserStore,
    P: ProductStore,
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\nUser Menu:")?;
        writeln!(output, "1. View All Users")?;
        writeln!(output, "2. Delete User")?;
        writeln!(output, "3. View All Products")?;
        writeln!(output, "4. Logout")?;

        match prompt_u32(input, output, "Enter your choice: ")? {
            1 => match accounts.list_users().await {
                Ok(users) if users.is_empty() => writeln!(output, "No users found.")?,
                Ok(users) => {
                    writeln!(output, "\nList of Users:")?;
                    for u in users {
                        writeln!(output, "ID: {}", u.id)?;
                        writeln!(output, "Username: {}", u.username)?;
                        writeln!(output, "Email: {}", u.email)?;
                        writeln!(output, "Role: {}", u.role)?;
                        writeln!(output, "-----------------------------")?;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "list users failed");
                    writeln!(output, "Could not load users.")?;
                }
            },
            2 => {
                let user_id = prompt_i32(input, output, "Enter User ID to delete: ")?;
                match accounts.delete_user(user_id).await {
                    Ok(true) => writeln!(
                        output,
                        "User with ID {user_id} has been successfully deleted."
                    )?,
                    Ok(false) => writeln!(
                        output,
                        "Failed to delete user. User with ID {user_id} may not exist."
                    )?,
                    Err(err) => {
                        tracing::error!(error = %err, user_id, "delete user failed");
                        writeln!(output, "Failed to delete user due to a storage error.")?;
                    }
                }
            }
            3 => match catalog.all_with_sellers().await {
                Ok(products) if products.is_empty() => {
                    writeln!(output, "No products available.")?
                }
                Ok(products) => {
                    for p in products {
                        writeln!(
                            output,
                            "{}: {} - ${} (Seller ID: {})",
                            p.id, p.name, p.price, p.seller_id
                        )?;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "list products failed");
                    writeln!(output, "Could not load products.")?;
                }
            },
            4 => {
                writeln!(output, "Logging out...")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}
