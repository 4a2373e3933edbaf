//! SQLite-backed implementation of the user repository.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::{role_from_column, UserRepository};
use crate::models::{Role, User};

pub struct SqliteUserRepository<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteUserRepository<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

fn map_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        role: role_from_column(2, &row.get::<_, String>(2)?)?,
        username: row.get(3)?,
        password: row.get(4)?,
        phone_number: row.get(5)?,
    })
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create(&self, user: &User) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO users (id, name, role, username, password, phone_number)
                 VALUES (?, ?, ?, ?, ?, ?)",
                params![
                    user.id,
                    user.name,
                    user.role.as_str(),
                    user.username,
                    user.password,
                    user.phone_number,
                ],
            )
            .context("failed to create user")?;
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<Option<User>> {
        self.conn
            .query_row(
                "DELETE FROM users WHERE id = ?
                 RETURNING id, name, role, username, password, phone_number",
                params![id],
                map_user,
            )
            .optional()
            .context("failed to delete user")
    }

    fn update(&self, user: &User) -> Result<Option<User>> {
        self.conn
            .query_row(
                "UPDATE users
                 SET name = ?, role = ?, username = ?, password = ?, phone_number = ?,
                     updated_at = datetime('now')
                 WHERE id = ?
                 RETURNING id, name, role, username, password, phone_number",
                params![
                    user.name,
                    user.role.as_str(),
                    user.username,
                    user.password,
                    user.phone_number,
                    user.id,
                ],
                map_user,
            )
            .optional()
            .context("failed to update user")
    }

    fn get_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.conn
            .query_row(
                "SELECT id, name, role, username, password, phone_number
                 FROM users WHERE id = ?",
                params![id],
                map_user,
            )
            .optional()
            .context("failed to get user by id")
    }

    fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                "SELECT id, name, role, username, password, phone_number
                 FROM users WHERE username = ?",
                params![username],
                map_user,
            )
            .optional()
            .context("failed to get user by username")
    }

    fn get_by_phone_number(&self, phone_number: &str) -> Result<Option<User>> {
        self.conn
            .query_row(
                "SELECT id, name, role, username, password, phone_number
                 FROM users WHERE phone_number = ?",
                params![phone_number],
                map_user,
            )
            .optional()
            .context("failed to get user by phone number")
    }

    fn list_all(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, role, username, password, phone_number FROM users")?;
        let users = stmt
            .query_map([], map_user)
            .context("failed to list users")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to scan user row")?;
        Ok(users)
    }

    fn list_by_role(&self, role: Role) -> Result<Vec<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, role, username, password, phone_number
             FROM users WHERE role = ?",
        )?;
        let users = stmt
            .query_map(params![role.as_str()], map_user)
            .context("failed to list users by role")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("failed to scan user row")?;
        Ok(users)
    }

    fn get_username_and_password(&self, id: Uuid) -> Result<Option<(String, String)>> {
        self.conn
            .query_row(
                "SELECT username, password FROM users WHERE id = ?",
                params![id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .context("failed to get username and password")
    }
}
