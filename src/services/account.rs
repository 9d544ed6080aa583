use crate::{
    error::AppResult,
    models::{Identity, NewUser, Role, User},
    password,
    store::UserStore,
};

/// Registration, login, and the admin-side user operations. The store is
/// injected so tests can swap in an in-memory fake.
pub struct AccountService<S> {
    users: S,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(users: S) -> Self {
        Self { users }
    }

    /// Register a new account. Email uniqueness is enforced here by a
    /// pre-check rather than by a database constraint; a duplicate email
    /// returns `Ok(false)` and leaves the existing row untouched.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> AppResult<bool> {
        if self.users.find_by_email(email).await?.is_some() {
            return Ok(false);
        }

        let password_hash = password::hash_password(password)?;
        self.users
            .insert(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role,
            })
            .await?;
        Ok(true)
    }

    /// Authenticate by email and password. Unknown email and wrong password
    /// are indistinguishable to the caller; both yield `Ok(None)`.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Option<Identity>> {
        let user = match self.users.find_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        if !password::verify_password(password, &user.password_hash) {
            return Ok(None);
        }

        Ok(Some(Identity::from(user)))
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list_all().await
    }

    /// Delete a user and every product the user owns, atomically. A false
    /// return means the user did not exist and nothing was changed.
    pub async fn delete_user(&self, user_id: i32) -> AppResult<bool> {
        self.users.delete_cascading(user_id).await
    }
}
