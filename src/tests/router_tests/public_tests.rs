use crate::errors::ServerError;
use crate::router::handle;
use crate::store::{customers, pending};
use crate::tests::utils::{body_string, get, init_test_db, location, post_form};

#[test]
fn public_page_shows_the_signup_form() {
    let db = init_test_db();

    let resp = handle(get("/"), &db).expect("Handler failed");

    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("828 Convenient Recycling"));
    assert!(body.contains("Request Your Free Bin"));
    assert!(body.contains("Free aluminum can pickup in the 828 area"));
    assert!(body.contains("Admin Login"));
    // No notice until a request was just sent.
    assert!(!body.contains("Request sent to 828 Convenient Recycling!"));
}

#[test]
fn submitting_redirects_to_the_confirmation_notice() {
    let db = init_test_db();

    let req = post_form(
        "/requests",
        &[
            ("name", "Jane Doe"),
            ("address", "1 Main St"),
            ("phone", "828-555-0100"),
            ("bin_size", "55 Gallon"),
            ("schedule", "Weekly"),
            ("notes", ""),
        ],
    );
    let resp = handle(req, &db).expect("Handler failed");

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/?submitted=1");

    let confirmation = body_string(handle(get("/?submitted=1"), &db).unwrap());
    assert!(confirmation.contains("Request sent to 828 Convenient Recycling!"));
}

#[test]
fn submitted_request_waits_in_the_queue_until_approved() {
    let db = init_test_db();

    // Public signup...
    let req = post_form(
        "/requests",
        &[
            ("name", "Jane Doe"),
            ("address", "1 Main St"),
            ("schedule", "Weekly"),
        ],
    );
    handle(req, &db).expect("Handler failed");

    let waiting = pending::load(&db).unwrap();
    assert_eq!(waiting.len(), 1);
    assert!(customers::load(&db).unwrap().is_empty());

    let queue = body_string(handle(get("/admin/requests"), &db).unwrap());
    assert!(queue.contains("Jane Doe"));

    // ...then admin approval.
    let approve = post_form(
        &format!("/admin/requests/{}/approve", waiting[0].id),
        &[],
    );
    let resp = handle(approve, &db).expect("Handler failed");
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin/requests");

    assert!(pending::load(&db).unwrap().is_empty());

    let active = customers::load(&db).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].schedule, "Weekly");

    let routes = body_string(handle(get("/admin"), &db).unwrap());
    assert!(routes.contains("Jane Doe"));
}

#[test]
fn empty_submission_is_accepted() {
    let db = init_test_db();

    // Nothing rejects a blank form; the admin reviews every request.
    let resp = handle(post_form("/requests", &[]), &db).expect("Handler failed");
    assert_eq!(resp.status(), 302);

    let waiting = pending::load(&db).unwrap();
    assert_eq!(waiting.len(), 1);
    assert_eq!(waiting[0].name, "");
    assert_eq!(waiting[0].bin_size, "55 Gallon");
    assert_eq!(waiting[0].schedule, "Weekly");
}

#[test]
fn unknown_route_is_not_found() {
    let db = init_test_db();

    let err = handle(get("/nope"), &db).unwrap_err();

    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn stylesheet_is_served() {
    let db = init_test_db();

    let resp = handle(get("/static/main.css"), &db).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css"
    );
}
