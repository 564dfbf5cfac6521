use crate::domain::customer::Customer;
use crate::domain::logic::group_by_schedule;
use crate::errors::{ResultResp, ServerError};
use crate::responses::{css_response, html_response, redirect_response};
use crate::store;
use crate::store::connection::Database;
use crate::templates::pages;
use crate::templates::pages::RoutesVm;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        // Public signup page; `?submitted` turns on the confirmation notice.
        ("GET", []) => {
            let submitted = query
                .as_deref()
                .is_some_and(|q| parse_query(q).contains_key("submitted"));

            html_response(pages::public_page(submitted))
        }

        ("GET", ["static", "main.css"]) => css_response(MAIN_CSS),

        ("POST", ["requests"]) => {
            let request = Customer::from_form(&parse_form(req));
            store::pending::submit(db, request)?;

            redirect_response("/?submitted=1")
        }

        ("GET", ["admin"]) => {
            let customers = store::customers::load(db)?;
            let completed = store::completed::load(db)?;

            let vm = RoutesVm {
                groups: group_by_schedule(&customers),
                completed,
            };

            html_response(pages::routes_page(&vm))
        }

        ("GET", ["admin", "add"]) => html_response(pages::add_customer_page()),

        ("GET", ["admin", "requests"]) => {
            let pending = store::pending::load(db)?;

            html_response(pages::pending_page(&pending))
        }

        // Direct add lands back on the route list.
        ("POST", ["admin", "customers"]) => {
            let customer = Customer::from_form(&parse_form(req));
            store::customers::add(db, customer)?;

            redirect_response("/admin")
        }

        ("POST", ["admin", "requests", id, "approve"]) => {
            store::pending::approve(db, id)?;

            redirect_response("/admin/requests")
        }

        ("POST", ["admin", "customers", id, "complete"]) => {
            store::completed::toggle(db, id)?;

            redirect_response("/admin")
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Decodes an urlencoded form body. An unreadable body decodes to no
/// fields, which the record constructor treats like an empty submission.
fn parse_form(req: Request) -> HashMap<String, String> {
    let mut buf = Vec::new();
    if req.into_body().reader().read_to_end(&mut buf).is_err() {
        return HashMap::new();
    }

    url::form_urlencoded::parse(&buf).into_owned().collect()
}
