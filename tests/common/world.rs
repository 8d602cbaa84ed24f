use cucumber::World;
use lifeline::config::ServiceProfile;
use lifeline::{ApiClient, FeatureField, LifecycleController, SubmitRejection};
use std::fmt;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Scenario state: a mock service and the controller talking to it
#[derive(World)]
#[world(init = Self::new)]
pub struct LifelineWorld {
    /// Mock HTTP server for testing
    pub mock_server: Option<MockServer>,

    /// Real controller instance pointed at the mock server
    pub controller: Option<LifecycleController>,

    /// Rejection returned by the last submit, if any
    pub last_rejection: Option<SubmitRejection>,
}

impl fmt::Debug for LifelineWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifelineWorld")
            .field("server", &self.mock_server.as_ref().map(|s| s.uri()))
            .field(
                "outcome",
                &self.controller.as_ref().map(|c| c.outcome().clone()),
            )
            .field("last_rejection", &self.last_rejection)
            .finish()
    }
}

impl LifelineWorld {
    pub fn new() -> Self {
        Self {
            mock_server: None,
            controller: None,
            last_rejection: None,
        }
    }

    /// Start the mock service and create a controller for it
    pub async fn start_service(&mut self) {
        let server = MockServer::start().await;
        let profile = ServiceProfile::new(&server.uri(), Duration::from_secs(5));
        let api = ApiClient::new(&profile).expect("mock server URI should be valid");

        self.controller = Some(LifecycleController::new(api));
        self.mock_server = Some(server);
    }

    pub fn server(&self) -> &MockServer {
        self.mock_server
            .as_ref()
            .expect("mock server should be started")
    }

    pub fn controller(&mut self) -> &mut LifecycleController {
        self.controller
            .as_mut()
            .expect("controller should be created")
    }

    /// Answer the next prediction request with `response`
    pub async fn mount_prediction(&self, response: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/predict"))
            .respond_with(response)
            .up_to_n_times(1)
            .mount(self.server())
            .await;
    }

    pub async fn mount_countries(&self, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/countries"))
            .respond_with(response)
            .mount(self.server())
            .await;
    }

    pub fn fill_form(&mut self) {
        let values = [
            (FeatureField::Year, "2010"),
            (FeatureField::Country, "Japan"),
            (FeatureField::Gender, "Female"),
            (FeatureField::TuberculosisTreatment, "85"),
            (FeatureField::HospitalBeds, "13.4"),
            (FeatureField::UrbanPopulation, "90.8"),
            (FeatureField::RuralPopulation, "9.2"),
            (FeatureField::Gdp, "44507"),
        ];
        let controller = self.controller();
        for (field, value) in values {
            controller.update_field(field, value);
        }
    }

    pub async fn submit(&mut self) {
        let result = self.controller().submit().await.map(|_| ());
        self.last_rejection = result.err();
    }

    /// Apply the next background completion, failing the step on timeout
    pub async fn wait_for_update(&mut self) {
        tokio::time::timeout(Duration::from_secs(5), self.controller().wait_for_update())
            .await
            .expect("background update should arrive");
    }

    pub async fn prediction_request_count(&self) -> usize {
        self.server()
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|request| request.url.path() == "/predict")
            .count()
    }
}

impl Default for LifelineWorld {
    fn default() -> Self {
        Self::new()
    }
}
