//! Step definitions for form filling, submission and outcome checks

use crate::common::world::LifelineWorld;
use cucumber::{given, then, when};
use lifeline::error::GENERIC_PREDICTION_ERROR;
use lifeline::views::render_outcome;
use lifeline::{FeatureField, RequestOutcome, SubmitRejection};
use serde_json::json;
use tracing::info;
use wiremock::ResponseTemplate;

// === SETUP ===

#[given("a running prediction service")]
async fn given_running_service(world: &mut LifelineWorld) {
    world.start_service().await;
}

#[given("a fully populated feature form")]
async fn given_populated_form(world: &mut LifelineWorld) {
    world.fill_form();
}

#[given(expr = "the {string} field is cleared")]
async fn given_field_cleared(world: &mut LifelineWorld, name: String) {
    world
        .controller()
        .update_field_by_name(&name, "")
        .expect("field name should be known");
}

#[given(expr = "the service predicts {float}")]
async fn given_service_predicts(world: &mut LifelineWorld, value: f64) {
    world
        .mount_prediction(ResponseTemplate::new(200).set_body_json(json!({ "prediction": value })))
        .await;
}

#[given(expr = "the service rejects the request with status {int} and detail {string}")]
async fn given_service_rejects(world: &mut LifelineWorld, status: u16, detail: String) {
    world
        .mount_prediction(ResponseTemplate::new(status).set_body_json(json!({ "detail": detail })))
        .await;
}

#[given(expr = "the service fails with status {int} and no detail")]
async fn given_service_fails(world: &mut LifelineWorld, status: u16) {
    world.mount_prediction(ResponseTemplate::new(status)).await;
}

// === SUBMISSION ===

#[when("I submit the form")]
async fn when_submit(world: &mut LifelineWorld) {
    info!("Submitting prediction form");
    world.submit().await;
}

#[when("I submit the form in the background")]
async fn when_submit_in_background(world: &mut LifelineWorld) {
    let result = world.controller().submit_in_background();
    world.last_rejection = result.err();
}

#[when("the pending prediction completes")]
async fn when_pending_completes(world: &mut LifelineWorld) {
    world.wait_for_update().await;
}

// === OUTCOME ===

#[then("the outcome should be idle")]
async fn then_outcome_idle(world: &mut LifelineWorld) {
    assert_eq!(world.controller().outcome(), &RequestOutcome::Idle);
}

#[then("the outcome should be pending")]
async fn then_outcome_pending(world: &mut LifelineWorld) {
    assert_eq!(world.controller().outcome(), &RequestOutcome::Pending);
    assert_eq!(render_outcome(world.controller().outcome()), None);
}

#[then(expr = "the outcome should be succeeded with {float}")]
async fn then_outcome_succeeded(world: &mut LifelineWorld, value: f64) {
    assert_eq!(world.controller().outcome(), &RequestOutcome::Succeeded(value));
}

#[then(expr = "the outcome should be failed with message {string}")]
async fn then_outcome_failed(world: &mut LifelineWorld, message: String) {
    assert_eq!(world.controller().outcome(), &RequestOutcome::Failed(message));
}

#[then("the outcome should be failed with the generic message")]
async fn then_outcome_failed_generic(world: &mut LifelineWorld) {
    assert_eq!(
        world.controller().outcome(),
        &RequestOutcome::Failed(GENERIC_PREDICTION_ERROR.to_string())
    );
}

#[then("no prediction value should be shown")]
async fn then_no_prediction_value(world: &mut LifelineWorld) {
    assert_eq!(world.controller().outcome().prediction(), None);
}

#[then(expr = "the displayed result should be {string}")]
async fn then_displayed_result(world: &mut LifelineWorld, expected: String) {
    assert_eq!(render_outcome(world.controller().outcome()), Some(expected));
}

#[then(expr = "the submission should be rejected for missing field {string}")]
async fn then_rejected_missing(world: &mut LifelineWorld, name: String) {
    let field: FeatureField = name.parse().expect("field name should be known");
    match &world.last_rejection {
        Some(SubmitRejection::Invalid(error)) => {
            assert_eq!(error.to_string(), format!("required field '{field}' is empty"));
        }
        other => panic!("Expected validation rejection, got {other:?}"),
    }
}

#[then("the submission should be rejected as already pending")]
async fn then_rejected_pending(world: &mut LifelineWorld) {
    assert_eq!(world.last_rejection, Some(SubmitRejection::AlreadyPending));
}

#[then(expr = "the service should have received {int} prediction request(s)")]
async fn then_request_count(world: &mut LifelineWorld, expected: usize) {
    assert_eq!(world.prediction_request_count().await, expected);
}
