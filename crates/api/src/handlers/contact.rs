//! Handlers for the `/contact` resource.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::{Form, Json};
use folio_db::models::contact_message::CreateContactMessage;
use folio_db::repositories::ContactMessageRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Typed input for a contact-form submission.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactInput {
    #[validate(length(min = 1, max = 120, message = "Name is required (max 120 characters)"))]
    pub name: String,
    #[validate(
        email(message = "Enter a valid email address"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,
    #[validate(length(max = 255, message = "Subject must be at most 255 characters"))]
    pub subject: Option<String>,
    #[validate(length(min = 1, max = 2000, message = "Message is required (max 2000 characters)"))]
    pub message: String,
}

/// Query parameters for the contact page.
#[derive(Debug, Deserialize)]
pub struct ContactPageQuery {
    /// Set by the post-submission redirect as the success indicator.
    #[serde(default)]
    pub sent: bool,
}

/// Contact page payload.
#[derive(Debug, Serialize)]
pub struct ContactPage {
    pub sent: bool,
}

/// GET /contact
///
/// Contact page payload; echoes the `sent` success indicator set by the
/// post-submission redirect.
pub async fn contact_page(Query(query): Query<ContactPageQuery>) -> impl IntoResponse {
    Json(DataResponse {
        data: ContactPage { sent: query.sent },
    })
}

/// POST /contact
///
/// Validate and persist a contact message, send the optional notification
/// email, and redirect back to the contact page with a success indicator.
///
/// Mail failures are logged and swallowed: they never block persistence or
/// the success response.
pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<ContactInput>,
) -> AppResult<Redirect> {
    input.validate()?;

    let message = ContactMessageRepo::create(
        &state.pool,
        &CreateContactMessage {
            name: input.name,
            email: input.email,
            // An empty subject field means "no subject".
            subject: input.subject.filter(|s| !s.is_empty()),
            message: input.message,
        },
    )
    .await?;

    tracing::info!(message_id = message.id, "Contact message received");

    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.notify(&message).await {
            tracing::error!(error = %e, message_id = message.id, "Contact notification mail failed");
        }
    }

    Ok(Redirect::to("/contact?sent=true"))
}
