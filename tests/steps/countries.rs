//! Step definitions for the country reference list

use crate::common::world::LifelineWorld;
use cucumber::{given, then, when};
use serde_json::json;
use wiremock::ResponseTemplate;

fn split_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}

#[given(expr = "the service lists countries {string}")]
async fn given_service_lists(world: &mut LifelineWorld, names: String) {
    world
        .mount_countries(
            ResponseTemplate::new(200).set_body_json(json!({ "countries": split_names(&names) })),
        )
        .await;
}

#[given("the country list endpoint is unavailable")]
async fn given_countries_unavailable(world: &mut LifelineWorld) {
    world.mount_countries(ResponseTemplate::new(503)).await;
}

#[when("the controller initializes")]
async fn when_controller_initializes(world: &mut LifelineWorld) {
    world.controller().initialize();
    world.wait_for_update().await;
}

#[then(expr = "the country list should be {string}")]
async fn then_country_list(world: &mut LifelineWorld, names: String) {
    assert_eq!(world.controller().countries().as_slice(), split_names(&names).as_slice());
}

#[then("the country list should be empty")]
async fn then_country_list_empty(world: &mut LifelineWorld) {
    assert!(world.controller().countries().is_empty());
    assert!(world.controller().reference_error().is_some());
}
