//! Tests for the login, registration, password reset and logout pages.

mod forgot;
mod login;
mod logout;
mod register;
