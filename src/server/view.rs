//! Minimal server-rendered HTML pages.
//!
//! Every page shows the navigation for the current session user and consumes the pending
//! flash messages.

use axum::response::Html;
use tower_sessions::Session;

use crate::{
    model::product::ProductDto,
    server::{
        error::Error,
        model::session::{flash::Flash, user::SessionUser},
    },
};

/// Escapes text for use in HTML element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Renders a full page for the session, taking its pending flashes.
pub async fn render(session: &Session, title: &str, body: &str) -> Result<Html<String>, Error> {
    let user = SessionUser::get(session).await?;
    let flashes = Flash::take(session).await?;

    Ok(Html(document(title, user.as_ref(), &flashes, body)))
}

fn document(title: &str, user: Option<&SessionUser>, flashes: &[Flash], body: &str) -> String {
    let account_links = match user {
        Some(user) if user.is_admin => format!(
            r#"<a href="/admin/products">Manage products</a> <a href="/logout">Logout ({})</a>"#,
            escape(&user.username)
        ),
        Some(user) => format!(
            r#"<a href="/dashboard">Dashboard</a> <a href="/logout">Logout ({})</a>"#,
            escape(&user.username)
        ),
        None => r#"<a href="/login">Login</a> <a href="/register">Register</a>"#.to_string(),
    };

    let flashes: String = flashes
        .iter()
        .map(|flash| {
            format!(
                r#"<div class="flash flash-{}">{}</div>"#,
                flash.category.as_str(),
                escape(&flash.message)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{title} | Halltek</title></head>
<body>
<nav><a href="/">Home</a> <a href="/about">About</a> <a href="/products">Products</a> <a href="/rewards">Rewards</a> {account_links}</nav>
<main>
{flashes}
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

pub fn login_form(next: Option<&str>) -> String {
    let next_field = next
        .map(|next| format!(r#"<input type="hidden" name="next" value="{}">"#, escape(next)))
        .unwrap_or_default();

    format!(
        r#"<form class="auth-form" method="post" action="/login">
{next_field}
<label>Username or email <input name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Login</button>
</form>
<p><a href="/forgot">Forgot your password?</a> <a href="/register">Create an account</a></p>"#
    )
}

pub fn register_form() -> String {
    r#"<form class="auth-form" method="post" action="/register">
<label>Username <input name="username" required></label>
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" minlength="6" required></label>
<button type="submit">Register</button>
</form>
<p>Already registered? <a href="/login">Login</a></p>"#
        .to_string()
}

pub fn forgot_form() -> String {
    r#"<form class="auth-form" method="post" action="/forgot">
<label>Username or email <input name="username" required></label>
<label>New password <input type="password" name="new_password" minlength="6" required></label>
<button type="submit">Reset password</button>
</form>"#
        .to_string()
}

/// Renders the catalogue as a list of product cards.
pub fn product_list(products: &[ProductDto]) -> String {
    if products.is_empty() {
        return r#"<p class="empty">No products available yet.</p>"#.to_string();
    }

    let cards: String = products.iter().map(product_card).collect();

    format!(r#"<div class="product-grid">{}</div>"#, cards)
}

fn product_card(product: &ProductDto) -> String {
    let image = product
        .image
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(&product.name)))
        .unwrap_or_default();

    let style = product
        .font_family
        .as_deref()
        .map(|family| format!(r#" style="font-family: {}""#, escape(family)))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card" data-id="{id}">{image}<h2{style}>{name}</h2><p class="product-description">{description}</p><p class="product-price">{price:.2}</p></article>"#,
        id = product.id,
        name = escape(&product.name),
        description = escape(&product.description),
        price = product.price,
    )
}
