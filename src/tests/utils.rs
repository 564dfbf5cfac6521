use crate::domain::customer::{new_customer_id, Customer};
use crate::store::connection::Database;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

/// Fresh in-memory store with the production schema applied. Each test runs
/// on its own thread, so the thread-local connection keeps tests isolated.
pub fn init_test_db() -> Database {
    let db = Database::new(":memory:");

    db.init_schema()
        .unwrap_or_else(|e| panic!("Storage initialization failed: {e}"));

    db
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(path: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();

    body
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("Location")
        .expect("redirect without Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub fn sample_customer(name: &str, schedule: &str) -> Customer {
    Customer {
        id: new_customer_id(),
        name: name.to_string(),
        address: "1 Main St".to_string(),
        phone: "828-555-0100".to_string(),
        bin_size: "55 Gallon".to_string(),
        schedule: schedule.to_string(),
        notes: String::new(),
    }
}
