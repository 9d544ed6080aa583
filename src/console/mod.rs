use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::Role,
    services::{AccountService, CatalogService},
    store::{ProductStore, UserStore},
};

pub mod menus;

use self::menus::{admin_menu, buyer_menu, seller_menu};

/// Top-level interactive loop. Generic over the input/output handles so menu
/// flows can be driven by a `Cursor` in tests, and over the stores so the
/// whole console can run against an in-memory fake.
pub async fn run<U, P, R, W>(
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
        writeln!(output, "\nWelcome to the Marketplace System!")?;
        writeln!(output, "1. Register")?;
        writeln!(output, "2. Login")?;
        writeln!(output, "3. Exit")?;

        match prompt_u32(input, output, "Enter your choice: ")? {
            1 => register(accounts, input, output).await?,
            2 => login(accounts, catalog, input, output).await?,
            3 => {
                writeln!(output, "Exiting the application. Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid option. Please try again.")?,
        }
    }
}

async fn register<U, R, W>(
    accounts: &AccountService<U>,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    U: UserStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\nRegister New User:")?;
    let username = prompt_line(input, output, "Enter Username: ")?;
    let email = prompt_line(input, output, "Enter Email: ")?;
    let password = prompt_line(input, output, "Enter Password: ")?;

    writeln!(output, "Select Role:")?;
    writeln!(output, "1. Buyer")?;
    writeln!(output, "2. Seller")?;
    writeln!(output, "3. Admin")?;
    let role = match prompt_u32(input, output, "Enter your choice: ")? {
        1 => Role::Buyer,
        2 => Role::Seller,
        3 => Role::Admin,
        _ => {
            writeln!(output, "Invalid role selected.")?;
            return Ok(());
        }
    };

    match accounts.register(&username, &email, &password, role).await {
        Ok(true) => writeln!(output, "User registered successfully!")?,
        Ok(false) => writeln!(output, "Registration failed. Email might already exist.")?,
        Err(err) => {
            tracing::error!(error = %err, "registration failed");
            writeln!(output, "Registration failed due to a storage error.")?;
        }
    }
    Ok(())
}

async fn login<U, P, R, W>(
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
    writeln!(output, "\nLogin:")?;
    let email = prompt_line(input, output, "Enter Email: ")?;
    let password = prompt_line(input, output, "Enter Password: ")?;

    let identity = match accounts.login(&email, &password).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            writeln!(output, "Invalid email or password.")?;
            return Ok(());
        }
        Err(err) => {
            tracing::error!(error = %err, "login failed");
            writeln!(output, "Login failed due to a storage error.")?;
            return Ok(());
        }
    };

    writeln!(output, "Login successful! Welcome, {}", identity.username)?;

    // Role tag alone decides which menu applies.
    match identity.role {
        Role::Buyer => buyer_menu(catalog, input, output).await?,
        Role::Seller => seller_menu(catalog, &identity, input, output).await?,
        Role::Admin => admin_menu(accounts, catalog, input, output).await?,
    }
    writeln!(output, "You have successfully logged out.")?;
    Ok(())
}

/// Read one trimmed line after printing a prompt.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "console input closed",
        )
        .into());
    }
    Ok(line.trim().to_string())
}

/// Numeric prompt that re-asks on unparsable input instead of bailing out of
/// the session.
pub(crate) fn prompt_u32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<u32> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<u32>() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

pub(crate) fn prompt_i32<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<i32> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<i32>() {
            Ok(n) if n >= 0 => return Ok(n),
            Ok(_) => writeln!(output, "Please enter a non-negative number.")?,
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

pub(crate) fn prompt_decimal<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> AppResult<rust_decimal::Decimal> {
    loop {
        let line = prompt_line(input, output, prompt)?;
        match line.parse::<rust_decimal::Decimal>() {
            Ok(d) if d.is_sign_positive() || d.is_zero() => return Ok(d),
            Ok(_) => writeln!(output, "Please enter a non-negative amount.")?,
            Err(_) => writeln!(output, "Please enter a valid amount.")?,
        }
    }
}
