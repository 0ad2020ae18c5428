//! HTTP-level integration tests for the public site endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::{header, StatusCode};
use common::{body_bytes, body_json, get, post_form};
use folio_db::models::project::CreateProject;
use folio_db::repositories::{ContactMessageRepo, ProjectRepo};
use sqlx::PgPool;

fn seed_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        short_description: format!("{title} in one line"),
        long_description: None,
        project_url: None,
        image_filename: None,
    }
}

// ---------------------------------------------------------------------------
// Home and project pages
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn home_returns_six_most_recent_projects(pool: PgPool) {
    for i in 0..8 {
        ProjectRepo::create(&pool, &seed_project(&format!("Project {i}")))
            .await
            .unwrap();
    }

    let (app, _uploads) = common::build_test_app(pool);
    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let projects = json["data"].as_array().unwrap();
    assert_eq!(projects.len(), 6);
    assert_eq!(projects[0]["title"], "Project 7");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_listing_is_newest_first(pool: PgPool) {
    for title in ["Oldest", "Middle", "Newest"] {
        ProjectRepo::create(&pool, &seed_project(title)).await.unwrap();
    }

    let (app, _uploads) = common::build_test_app(pool);
    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_detail_returns_row(pool: PgPool) {
    let created = ProjectRepo::create(&pool, &seed_project("Detail Me"))
        .await
        .unwrap();

    let (app, _uploads) = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Detail Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_detail_returns_404(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);
    let response = get(app, "/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_submission_persists_and_redirects(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/contact",
        "name=Ana&email=ana%40x.com&subject=&message=Hi",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::location(&response), "/contact?sent=true");

    let messages = ContactMessageRepo::list_recent(&pool, 10).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Ana");
    assert_eq!(messages[0].email, "ana@x.com");
    // An empty subject field is stored as NULL, not "".
    assert!(messages[0].subject.is_none());
    assert_eq!(messages[0].message, "Hi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_page_echoes_success_indicator(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);

    let response = get(app.clone(), "/contact").await;
    assert_eq!(body_json(response).await["data"]["sent"], false);

    let response = get(app, "/contact?sent=true").await;
    assert_eq!(body_json(response).await["data"]["sent"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_with_invalid_email_is_not_persisted(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/contact",
        "name=Ana&email=not-an-email&subject=&message=Hi",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["email"].is_array());

    assert!(ContactMessageRepo::list_recent(&pool, 10)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contact_with_empty_message_is_not_persisted(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/contact",
        "name=Ana&email=ana%40x.com&subject=&message=",
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ContactMessageRepo::list_recent(&pool, 10)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Resume download
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn resume_404_when_none_uploaded(pool: PgPool) {
    let (app, _uploads) = common::build_test_app(pool);
    let response = get(app, "/resume").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resume_serves_newest_pdf_as_attachment(pool: PgPool) {
    let (app, uploads) = common::build_test_app(pool);

    let resume_dir = uploads.path().join("resume");
    std::fs::create_dir_all(&resume_dir).unwrap();
    std::fs::write(resume_dir.join("resume_2023.pdf"), b"%PDF old").unwrap();
    std::fs::write(resume_dir.join("resume_2024.pdf"), b"%PDF new").unwrap();
    std::fs::write(resume_dir.join("notes.txt"), b"ignore me").unwrap();

    let response = get(app, "/resume").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/pdf"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("resume_2024.pdf"));

    assert_eq!(&body_bytes(response).await[..], b"%PDF new");
}
