//! Integration tests for the submit-and-reconcile state machine.
//!
//! Tests cover:
//! - The three mutually exclusive submission outcomes (created / rejected /
//!   transport failure) and the state each one leaves behind
//! - Single-flight guarding while a submission is outstanding
//! - Retry behavior after a rejection
//! - The wire shape of the create request

mod common;

use common::*;

#[tokio::test]
async fn successful_submission_resets_form_and_reports_created() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let service = ScriptedService::accepting();

    // 1. Begin: both gates pass, so a request comes back and we go in flight
    let request = form.begin_submit()?.expect("gates pass");
    assert!(form.in_flight());
    assert_eq!(request.name, "Alpha");
    assert_eq!(request.description, "Desc");

    // 2. The service accepts
    let outcome = service.create_project(&request).await;
    let resolution = form.finish_submit(outcome);

    // 3. Created is reported exactly once, and the form is back to pristine
    let SubmitResolution::Created(project) = resolution else {
        panic!("expected Created, got {resolution:?}");
    };
    assert_eq!(project.name, "Alpha");
    assert_eq!(form.draft, ProjectDraft::default());
    assert!(form.error.is_none());
    assert!(!form.in_flight());

    Ok(())
}

#[tokio::test]
async fn rejection_shows_message_and_keeps_fields() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let service = ScriptedService::rejecting("Name already exists");

    let request = form.begin_submit()?.expect("gates pass");
    let outcome = service.create_project(&request).await;
    let resolution = form.finish_submit(outcome);

    assert_eq!(resolution, SubmitResolution::Rejected);
    assert_eq!(
        form.error,
        Some(SubmissionError {
            message: "Name already exists".to_string()
        })
    );
    // User input survives so it can be edited and resubmitted
    assert_eq!(form.draft, filled_draft());
    assert!(!form.in_flight());

    Ok(())
}

#[tokio::test]
async fn transport_failure_leaves_form_untouched_but_clears_in_flight() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let service = ScriptedService::failing();

    let request = form.begin_submit()?.expect("gates pass");
    assert!(form.in_flight());

    let outcome = service.create_project(&request).await;
    let resolution = form.finish_submit(outcome);

    // Nothing user-visible changes, but the form is submittable again
    assert_eq!(resolution, SubmitResolution::TransportFailed);
    assert_eq!(form.draft, filled_draft());
    assert!(form.error.is_none());
    assert!(!form.in_flight());

    Ok(())
}

#[tokio::test]
async fn second_submit_while_in_flight_is_inert() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let service = ScriptedService::accepting();

    let first = form.begin_submit()?.expect("gates pass");

    // Programmatic re-entry while the first request is outstanding
    let second = form.begin_submit()?;
    assert!(second.is_none(), "in-flight guard must hold");

    service.create_project(&first).await.ok();
    assert_eq!(service.calls().len(), 1, "only one outstanding request");

    Ok(())
}

#[tokio::test]
async fn retry_after_rejection_clears_previous_error() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let service = ScriptedService::rejecting("Name already exists");

    let request = form.begin_submit()?.expect("gates pass");
    let outcome = service.create_project(&request).await;
    form.finish_submit(outcome);
    assert!(form.error.is_some());

    // Retrying starts clean: the stale message is gone while in flight
    let retry = form.begin_submit()?;
    assert!(retry.is_some());
    assert!(form.error.is_none());
    assert!(form.in_flight());

    Ok(())
}

#[tokio::test]
async fn submit_without_required_fields_is_a_no_op() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    form.draft.name.clear();

    assert!(form.begin_submit()?.is_none());
    assert!(!form.in_flight());

    // Description is not part of the action-entry gate
    form.draft = filled_draft();
    form.draft.description.clear();
    assert!(form.begin_submit()?.is_some());

    Ok(())
}

#[test]
fn error_bodies_split_into_rejections_and_transport_faults() {
    use projectboard::core::TransportError;

    // The known rejection shape becomes a displayable message
    let outcome = CreateResponse::from_error_body(409, r#"{"message":"Name already exists"}"#);
    assert_eq!(
        outcome,
        Ok(CreateResponse::Rejected {
            message: "Name already exists".to_string()
        })
    );

    // Anything else is a transport fault, not a displayable rejection
    let outcome = CreateResponse::from_error_body(500, "Internal Server Error");
    assert_eq!(
        outcome,
        Err(TransportError::UnexpectedShape { status: 500 })
    );

    let outcome = CreateResponse::from_error_body(400, r#"{"error":"bad request"}"#);
    assert!(outcome.is_err());
}

#[test]
fn create_request_serializes_with_wire_field_names() -> anyhow::Result<()> {
    let mut form = NewProjectForm::new();
    form.draft = filled_draft();
    let request = form.begin_submit()?.expect("gates pass");

    let value = serde_json::to_value(&request)?;
    let object = value.as_object().expect("request is a JSON object");
    assert!(object.contains_key("name"));
    assert!(object.contains_key("description"));
    assert!(object.contains_key("startDate"));
    assert!(object.contains_key("endDate"));

    // Dates went out normalized, not date-only
    let start = object["startDate"].as_str().expect("startDate is a string");
    assert!(start.starts_with("2024-01-01T00:00:00"));

    Ok(())
}
