//! Username/password authentication backed by the user repository.

use anyhow::{anyhow, Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::repo::UserRepository;
use crate::token::TokenIssuer;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub struct AuthService<R: UserRepository> {
    users: R,
    tokens: TokenIssuer,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(users: R, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Hashes the submitted password, assigns a fresh id, and persists the
    /// user. Fails if the username or phone number is already taken.
    pub fn register(&self, new_user: NewUser) -> Result<User> {
        let hashed_password =
            hash(&new_user.password, DEFAULT_COST).context("failed to hash password")?;

        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            role: new_user.role,
            username: new_user.username,
            password: hashed_password,
            phone_number: new_user.phone_number,
        };
        self.users.create(&user)?;
        Ok(user)
    }

    /// Verifies the credentials and issues a session token.
    ///
    /// An unknown username and a wrong password fail with the same error, so
    /// callers cannot probe which usernames exist.
    pub fn login(&self, credentials: &Credentials) -> Result<(User, String)> {
        let user = self
            .users
            .get_by_username(&credentials.username)?
            .ok_or_else(|| anyhow!("invalid username or password"))?;

        if !verify(&credentials.password, &user.password).context("failed to verify password")? {
            return Err(anyhow!("invalid username or password"));
        }

        let token = self.tokens.generate(&user)?;
        Ok((user, token))
    }
}
