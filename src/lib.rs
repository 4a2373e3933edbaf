//! clinicore: a record-keeping backend for a clinic.
//!
//! Persists users (doctors/receptionists), patients, and diagnoses in
//! SQLite, and authenticates users via username/password with issued
//! session tokens. Every repository operation is a single parameterized
//! statement against its table; callers wire the pieces together through
//! [`db::Database`], the repositories in [`repo`], and [`auth::AuthService`].

pub mod auth;
pub mod config;
pub mod db;
pub mod models;
pub mod repo;
pub mod token;
