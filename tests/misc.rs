use test_utils::prelude::*;

#[tokio::test]
#[parallel]
async fn liveness() {
    let app = get_cached_app().await;

    let res = app.get("/livez").send().await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get("/readyz").send().await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
#[parallel]
async fn unknown_route() {
    let app = get_cached_app().await;

    let res = app.get("/answers").send().await;

    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_error!(res, error::RESOURCE_NOT_FOUND);
}

#[tokio::test]
#[parallel]
async fn method_not_allowed() {
    let app = get_cached_app().await;

    let res = app.put("/categories").send().await;

    assert_error!(res, error::METHOD_NOT_ALLOWED);
}

#[tokio::test]
#[parallel]
async fn request_id_is_set() {
    let app = get_cached_app().await;

    let res = app.get("/categories").send().await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("x-request-id"));
}
