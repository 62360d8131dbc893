use serde_json::json;

use super::Catalog;

pub const EMAIL: &str = "susanna.richards@example.com";
pub const PASSWORD: &str = "jonjon";

/// Small catalog mixing numeric and string ids, with one duplicated product
/// name and one duplicated email.
pub fn catalog() -> Catalog {
    let brands = serde_json::from_value(json!([
        { "id": "1", "name": "Oakley", "description": "The best glasses in the world" },
        { "id": 2, "name": "Ray Ban" },
        { "id": "3", "name": "Levi's" },
    ]))
    .unwrap();

    let products = serde_json::from_value(json!([
        { "id": "1", "categoryId": "1", "name": "Aviator", "price": 150 },
        { "id": "2", "categoryId": 1, "name": "Wayfarer", "price": 120 },
        { "id": "3", "categoryId": 2, "name": "Clubmaster" },
        { "id": "4", "name": "Round" },
        { "id": "5", "categoryId": "1", "name": "Aviator", "price": 99 },
    ]))
    .unwrap();

    let users = serde_json::from_value(json!([
        { "email": EMAIL, "name": "First", "login": { "username": "yellowleopard753", "password": PASSWORD } },
        { "email": EMAIL, "name": "Second", "login": { "username": "dup", "password": "second-password" } },
        { "email": "other@example.com", "login": { "password": "secret" } },
    ]))
    .unwrap();

    Catalog::new(brands, products, users)
}
