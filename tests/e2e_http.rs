// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{
    Request, StatusCode,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use serde_json::json;
use tower::util::ServiceExt as _;

use newsroom_core::domain::publisher::{AffiliationKind, PublisherId, PublisherRepository};
use newsroom_core::domain::subscription::SubscriptionRepository;
use newsroom_core::domain::user::{Role, UserId};

mod support;

use support::{
    ArticleBuilder, DEFAULT_CONTENT, TestBackend, UserBuilder, assert_error_response, body_json,
    publisher, wait_for_sends,
};

const ARTICLES: &str = "/api/v1/articles";
const SUBSCRIPTIONS: &str = "/api/v1/subscriptions";

fn bearer(tok: &str) -> String {
    format!("Bearer {}", tok)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_as(uri: &str, tok: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(AUTHORIZATION, bearer(tok))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, tok: &str, payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(AUTHORIZATION, bearer(tok))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

/// Full cast: a desk with an editor and a writer, a subscribed reader
/// with a mailbox, and one published piece on the wire.
async fn seeded_backend() -> TestBackend {
    let backend = TestBackend::new();
    backend.publishers.seed(publisher(1, "Harbour Post"));
    backend.users.seed(
        UserBuilder::new()
            .id(10)
            .username("june")
            .role(Role::Journalist)
            .build(),
        "token-june",
    );
    backend.users.seed(
        UserBuilder::new()
            .id(2)
            .username("edda")
            .role(Role::Editor)
            .build(),
        "token-edda",
    );
    backend.users.seed(
        UserBuilder::new()
            .id(3)
            .username("astrid")
            .role(Role::Admin)
            .build(),
        "token-astrid",
    );
    backend.users.seed(
        UserBuilder::new()
            .id(20)
            .username("remy")
            .email("remy@example.com")
            .build(),
        "token-remy",
    );
    backend.users.seed(
        UserBuilder::new().id(21).username("gone").inactive().build(),
        "token-gone",
    );
    backend
        .publishers
        .add_affiliation(
            PublisherId::new(1).unwrap(),
            UserId::new(10).unwrap(),
            AffiliationKind::Journalist,
        )
        .await
        .unwrap();
    backend
        .publishers
        .add_affiliation(
            PublisherId::new(1).unwrap(),
            UserId::new(2).unwrap(),
            AffiliationKind::Editor,
        )
        .await
        .unwrap();
    backend
        .subscriptions
        .subscribe_publisher(UserId::new(20).unwrap(), PublisherId::new(1).unwrap())
        .await
        .unwrap();
    backend.articles.seed(
        ArticleBuilder::new()
            .id(1)
            .title("Harbour expansion wins approval")
            .slug("harbour-expansion")
            .authors(&[10])
            .publisher(1)
            .published()
            .build(),
    );
    backend.articles.seed(
        ArticleBuilder::new()
            .id(2)
            .title("Ferry timetable shakeup drafted")
            .slug("ferry-timetable")
            .authors(&[10])
            .publisher(1)
            .build(),
    );
    backend
}

#[tokio::test]
async fn health_reports_ok() {
    let backend = TestBackend::new();
    let resp = backend.router().oneshot(get("/health")).await.unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn protected_routes_demand_a_token() {
    let backend = seeded_backend().await;
    let resp = backend.router().oneshot(get(SUBSCRIPTIONS)).await.unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn unknown_tokens_return_401() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get_as(SUBSCRIPTIONS, "never-issued"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn disabled_accounts_are_locked_out() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get_as(SUBSCRIPTIONS, "token-gone"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn readers_cannot_file_articles() {
    let backend = seeded_backend().await;
    let payload = json!({ "title": "Letter to the editor", "content": DEFAULT_CONTENT });
    let resp = backend
        .router()
        .oneshot(post_json(ARTICLES, "token-remy", payload))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn the_public_listing_hides_drafts() {
    let backend = seeded_backend().await;
    let resp = backend.router().oneshot(get(ARTICLES)).await.unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["slug"], "harbour-expansion");
    assert_eq!(body["has_more"], false);
}

#[tokio::test]
async fn search_narrows_the_listing() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get(&format!("{ARTICLES}?q=orchard")))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn a_bad_cursor_is_a_bad_request() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get(&format!("{ARTICLES}?cursor=not-a-cursor")))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn missing_slugs_are_not_found() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get("/api/v1/articles/by-slug/no-such-story"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::NOT_FOUND, "Not Found").await;
}

#[tokio::test]
async fn reading_an_article_counts_the_view() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get("/api/v1/articles/by-slug/harbour-expansion"))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Harbour expansion wins approval");
    assert_eq!(backend.articles.get(1).unwrap().view_count, 1);
}

#[tokio::test]
async fn unknown_subscription_actions_are_rejected() {
    let backend = seeded_backend().await;
    let payload = json!({ "action": "follow", "publisher_id": 1 });
    let resp = backend
        .router()
        .oneshot(post_json(SUBSCRIPTIONS, "token-remy", payload))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn subscription_changes_round_trip() {
    let backend = seeded_backend().await;
    let payload = json!({ "action": "subscribe", "journalist_id": 10 });
    let resp = backend
        .router()
        .oneshot(post_json(SUBSCRIPTIONS, "token-remy", payload))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["changed"], true);
    assert_eq!(body["subscriptions"]["journalist_ids"][0], 10);

    let resp = backend
        .router()
        .oneshot(get_as(SUBSCRIPTIONS, "token-remy"))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["publisher_ids"][0], 1);
    assert_eq!(body["journalist_ids"][0], 10);
}

#[tokio::test]
async fn unknown_approval_actions_get_a_warning_not_an_error() {
    let backend = seeded_backend().await;
    let payload = json!({ "article_id": 1, "action": "escalate" });
    let resp = backend
        .router()
        .oneshot(post_json("/api/v1/approvals", "token-edda", payload))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    assert!(body["article"].is_null());
    assert!(
        body["warning"]
            .as_str()
            .unwrap()
            .contains("unknown approval action")
    );
}

#[tokio::test]
async fn feeds_require_exactly_one_target() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get_as("/api/v1/feeds/articles", "token-remy"))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = backend
        .router()
        .oneshot(get_as(
            "/api/v1/feeds/articles?publisher_id=1&journalist_id=10",
            "token-remy",
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;

    let resp = backend
        .router()
        .oneshot(get_as("/api/v1/feeds/articles?publisher_id=1", "token-remy"))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn the_journalist_directory_is_public() {
    let backend = seeded_backend().await;
    let resp = backend
        .router()
        .oneshot(get("/api/v1/journalists"))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["username"], "june");
    assert_eq!(entries[0]["article_count"], 1);
}

#[tokio::test]
async fn provisioning_issues_a_token_that_works_immediately() {
    let backend = seeded_backend().await;
    let payload = json!({ "username": "nadia", "email": "nadia@example.com", "role": "journalist" });
    let resp = backend
        .router()
        .oneshot(post_json("/api/v1/users", "token-astrid", payload))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    assert_eq!(body["user"]["username"], "nadia");
    assert_eq!(body["user"]["role"], "journalist");
    let minted = body["api_token"].as_str().unwrap().to_owned();
    let user_id = body["user"]["id"].as_i64().unwrap();

    let resp = backend
        .router()
        .oneshot(get_as("/api/v1/auth/me", &minted))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["user"]["username"], "nadia");

    // An operator can later move the account to another role.
    let resp = backend
        .router()
        .oneshot(post_json(
            &format!("/api/v1/users/{user_id}/role"),
            "token-astrid",
            json!({ "role": "editor" }),
        ))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["role"], "editor");
}

#[tokio::test]
async fn provisioning_rejects_duplicates_and_outsiders() {
    let backend = seeded_backend().await;
    let payload = json!({ "username": "june" });
    let resp = backend
        .router()
        .oneshot(post_json("/api/v1/users", "token-astrid", payload))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;

    let payload = json!({ "username": "nadia" });
    let resp = backend
        .router()
        .oneshot(post_json("/api/v1/users", "token-edda", payload))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::FORBIDDEN, "Forbidden").await;
}

#[tokio::test]
async fn the_editorial_cycle_runs_end_to_end() {
    let backend = seeded_backend().await;

    // June drafts a new piece for the desk.
    let payload = json!({
        "title": "Night ferry trial announced",
        "content": DEFAULT_CONTENT,
        "publisher_id": 1,
    });
    let resp = backend
        .router()
        .oneshot(post_json(ARTICLES, "token-june", payload))
        .await
        .unwrap();
    let draft = body_json(resp, StatusCode::OK).await;
    let id = draft["id"].as_i64().unwrap();
    assert_eq!(draft["status"], "draft");
    assert_eq!(draft["slug"], "night-ferry-trial-announced");

    // June tightens the headline, then submits.
    let resp = backend
        .router()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("{ARTICLES}/{id}"))
                .header(AUTHORIZATION, bearer("token-june"))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({ "title": "Night ferry trial starts Monday" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    let updated = body_json(resp, StatusCode::OK).await;
    assert_eq!(updated["title"], "Night ferry trial starts Monday");

    let resp = backend
        .router()
        .oneshot(post_json(
            &format!("{ARTICLES}/{id}/transition"),
            "token-june",
            json!({ "status": "submitted" }),
        ))
        .await
        .unwrap();
    let submitted = body_json(resp, StatusCode::OK).await;
    assert_eq!(submitted["status"], "submitted");

    // Edda finds it in the queue and approves it.
    let resp = backend
        .router()
        .oneshot(get_as("/api/v1/approvals", "token-edda"))
        .await
        .unwrap();
    let queue = body_json(resp, StatusCode::OK).await;
    assert_eq!(queue.as_array().unwrap().len(), 1);

    let resp = backend
        .router()
        .oneshot(post_json(
            "/api/v1/approvals",
            "token-edda",
            json!({ "article_id": id, "action": "approve" }),
        ))
        .await
        .unwrap();
    let decided = body_json(resp, StatusCode::OK).await;
    assert_eq!(decided["article"]["status"], "published");
    assert_eq!(decided["article"]["approved_by"], 2);

    // Remy is subscribed to the desk, so the publication lands in their inbox.
    wait_for_sends(&backend.mailer, 1).await;
    assert_eq!(backend.mailer.sent_to(), vec!["remy@example.com"]);
    // The status post follows the mail run on the same detached task.
    for _ in 0..200 {
        if !backend.social.posts().is_empty() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(backend.social.posts().len(), 1);

    // Readers react.
    let resp = backend
        .router()
        .oneshot(post_json(
            &format!("{ARTICLES}/{id}/like"),
            "token-remy",
            json!({}),
        ))
        .await
        .unwrap();
    let like = body_json(resp, StatusCode::OK).await;
    assert_eq!(like["liked"], true);
    assert_eq!(like["like_count"], 1);

    let resp = backend
        .router()
        .oneshot(post_json(
            &format!("{ARTICLES}/{id}/comments"),
            "token-remy",
            json!({ "content": "Long overdue for shift workers." }),
        ))
        .await
        .unwrap();
    let comment = body_json(resp, StatusCode::OK).await;
    assert_eq!(comment["author_username"], "remy");

    let resp = backend
        .router()
        .oneshot(get(&format!("{ARTICLES}/{id}/comments")))
        .await
        .unwrap();
    let thread = body_json(resp, StatusCode::OK).await;
    assert_eq!(thread.as_array().unwrap().len(), 1);

    // Retiring the piece afterwards is the editor's call.
    let resp = backend
        .router()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("{ARTICLES}/{id}"))
                .header(AUTHORIZATION, bearer("token-edda"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;
    assert_eq!(body["status"], "deleted");
}

#[tokio::test]
async fn newsletters_post_over_http() {
    let backend = seeded_backend().await;
    let payload = json!({
        "title": "Harbour weekly roundup",
        "content": DEFAULT_CONTENT,
        "frequency": "weekly",
        "publisher_id": 1,
        "featured_article_ids": [1],
    });
    let resp = backend
        .router()
        .oneshot(post_json("/api/v1/newsletters", "token-june", payload))
        .await
        .unwrap();
    let body = body_json(resp, StatusCode::OK).await;

    assert_eq!(body["frequency"], "weekly");
    assert_eq!(body["featured_article_ids"][0], 1);

    let resp = backend
        .router()
        .oneshot(get_as("/api/v1/feeds/newsletters?publisher_id=1", "token-remy"))
        .await
        .unwrap();
    let feed = body_json(resp, StatusCode::OK).await;
    assert_eq!(feed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn transition_conflicts_surface_as_409() {
    let backend = seeded_backend().await;
    // Article 1 is already published; a second submit is not an edge.
    let resp = backend
        .router()
        .oneshot(post_json(
            &format!("{ARTICLES}/1/transition"),
            "token-june",
            json!({ "status": "submitted" }),
        ))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::CONFLICT, "Conflict").await;
}
