//! # Request Lifecycle Controller
//!
//! Owns the feature form, the country list and the request outcome, and
//! drives the two network collaborators.
//!
//! ```text
//!              submit()                 Ok(value)
//!   Idle ─────────────────▶ Pending ─────────────────▶ Succeeded(value)
//!   Succeeded ─────────────▶    │
//!   Failed ────────────────▶    │       Err(error)
//!                               └─────────────────────▶ Failed(message)
//! ```
//!
//! The country list is loaded on a separate channel. Its failures are
//! logged and recorded but never reach the outcome.

use crate::predictor::error::{PredictionError, ReferenceDataError, SubmitRejection, ValidationError};
use crate::predictor::events::{EventBus, ModelEvent};
use crate::predictor::models::{CountryList, FeatureField, FeatureForm, RequestOutcome};
use crate::predictor::services::{ApiClient, PredictionClient, ReferenceDataLoader};
use tokio::sync::mpsc;

type ReferenceResult = Result<Vec<String>, ReferenceDataError>;
type PredictionResult = Result<f64, PredictionError>;

/// Completion picked up from one of the background channels
enum BackgroundUpdate {
    Reference(ReferenceResult),
    Prediction(PredictionResult),
}

pub struct LifecycleController {
    form: FeatureForm,
    countries: CountryList,
    outcome: RequestOutcome,
    /// Last reference-data failure, cleared by a successful load
    reference_error: Option<String>,
    initialized: bool,
    loader: ReferenceDataLoader,
    client: PredictionClient,
    reference_sender: mpsc::Sender<ReferenceResult>,
    reference_receiver: mpsc::Receiver<ReferenceResult>,
    prediction_sender: mpsc::Sender<PredictionResult>,
    prediction_receiver: mpsc::Receiver<PredictionResult>,
    event_bus: Option<Box<dyn EventBus>>,
    pending_events: Vec<ModelEvent>,
}

impl LifecycleController {
    /// Create an idle controller with an empty form and country list
    pub fn new(api: ApiClient) -> Self {
        let (reference_sender, reference_receiver) = mpsc::channel(4);
        let (prediction_sender, prediction_receiver) = mpsc::channel(4);

        Self {
            form: FeatureForm::new(),
            countries: CountryList::new(),
            outcome: RequestOutcome::Idle,
            reference_error: None,
            initialized: false,
            loader: ReferenceDataLoader::new(api.clone()),
            client: PredictionClient::new(api),
            reference_sender,
            reference_receiver,
            prediction_sender,
            prediction_receiver,
            event_bus: None,
            pending_events: Vec::new(),
        }
    }

    /// Start the one-shot country list load in the background.
    ///
    /// Must be called inside a tokio runtime. Calling it again is a no-op;
    /// use `reload_countries` to fetch the list a second time.
    pub fn initialize(&mut self) {
        if self.initialized {
            tracing::debug!("Controller already initialized, skipping country load");
            return;
        }
        self.initialized = true;
        self.spawn_reference_load();
    }

    /// Fetch the country list again in the background
    pub fn reload_countries(&mut self) {
        self.initialized = true;
        self.spawn_reference_load();
    }

    fn spawn_reference_load(&self) {
        let loader = self.loader.clone();
        let sender = self.reference_sender.clone();

        tokio::spawn(async move {
            let result = loader.load().await;
            // Receiver is gone only if the controller was dropped
            let _ = sender.send(result).await;
        });
    }

    /// Fetch the country list and apply it before returning.
    /// Returns whether the load succeeded.
    pub async fn load_countries(&mut self) -> bool {
        let result = self.loader.load().await;
        self.apply_reference_result(result)
    }

    fn apply_reference_result(&mut self, result: ReferenceResult) -> bool {
        match result {
            Ok(countries) => {
                let count = countries.len();
                self.countries.replace(countries);
                self.reference_error = None;
                tracing::info!("Country list loaded with {} entries", count);
                self.emit(ModelEvent::CountriesLoaded { count });
                true
            }
            Err(error) => {
                tracing::warn!("Failed to load country list: {}", error);
                let message = error.to_string();
                self.reference_error = Some(message.clone());
                self.emit(ModelEvent::CountriesLoadFailed { message });
                false
            }
        }
    }

    pub fn form(&self) -> &FeatureForm {
        &self.form
    }

    /// Replace one form field's value
    pub fn update_field(&mut self, field: FeatureField, value: impl Into<String>) {
        let value = value.into();
        self.form.update(field, value.clone());
        self.emit(ModelEvent::FieldUpdated { field, value });
    }

    /// Replace one form field's value, addressing it by wire name
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<FeatureField, ValidationError> {
        let field = name.parse::<FeatureField>()?;
        self.update_field(field, value);
        Ok(field)
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
        self.emit(ModelEvent::FormReset);
    }

    pub fn countries(&self) -> &CountryList {
        &self.countries
    }

    pub fn reference_error(&self) -> Option<&str> {
        self.reference_error.as_deref()
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    /// Whether the submit trigger should be enabled
    pub fn can_submit(&self) -> bool {
        !self.outcome.is_pending() && self.form.is_complete()
    }

    fn check_submittable(&self) -> Result<(), SubmitRejection> {
        if self.outcome.is_pending() {
            tracing::debug!("Submission rejected: request already pending");
            return Err(SubmitRejection::AlreadyPending);
        }
        if let Err(error) = self.form.validate() {
            tracing::debug!("Submission rejected: {}", error);
            return Err(error.into());
        }
        Ok(())
    }

    fn begin_pending(&mut self) {
        tracing::debug!("Outcome {} -> pending", self.outcome.label());
        self.outcome = RequestOutcome::Pending;
        self.emit(ModelEvent::PredictionStarted);
    }

    fn finish_prediction(&mut self, result: PredictionResult) {
        if !self.outcome.is_pending() {
            tracing::warn!("Dropping prediction result with no pending request");
            return;
        }

        let (outcome, event) = match result {
            Ok(value) => {
                tracing::info!("Prediction succeeded: {}", value);
                (
                    RequestOutcome::Succeeded(value),
                    ModelEvent::PredictionSucceeded { value },
                )
            }
            Err(error) => {
                tracing::error!("Prediction failed: {}", error);
                let message = error.user_message();
                (
                    RequestOutcome::Failed(message.clone()),
                    ModelEvent::PredictionFailed { message },
                )
            }
        };

        self.outcome = outcome;
        self.emit(event);
    }

    /// Submit the current form and wait for the outcome.
    ///
    /// Rejections leave the outcome untouched. Once the request is sent the
    /// outcome is `Pending` until the call resolves to `Succeeded` or `Failed`.
    pub async fn submit(&mut self) -> Result<&RequestOutcome, SubmitRejection> {
        self.check_submittable()?;
        self.begin_pending();

        let result = self.client.predict(&self.form).await;
        self.finish_prediction(result);
        Ok(&self.outcome)
    }

    /// Submit the current form on a spawned task and return immediately.
    ///
    /// The outcome is `Pending` on return; `poll_updates` or
    /// `wait_for_update` applies the result. Must be called inside a tokio
    /// runtime.
    pub fn submit_in_background(&mut self) -> Result<(), SubmitRejection> {
        self.check_submittable()?;
        self.begin_pending();

        let client = self.client.clone();
        let form = self.form.clone();
        let sender = self.prediction_sender.clone();

        tokio::spawn(async move {
            let result = client.predict(&form).await;
            let _ = sender.send(result).await;
        });
        Ok(())
    }

    /// Apply any finished background work without blocking.
    /// Returns whether anything changed.
    pub fn poll_updates(&mut self) -> bool {
        let mut changed = false;

        while let Ok(result) = self.reference_receiver.try_recv() {
            self.apply_reference_result(result);
            changed = true;
        }
        while let Ok(result) = self.prediction_receiver.try_recv() {
            self.finish_prediction(result);
            changed = true;
        }

        changed
    }

    /// Wait for the next background completion and apply it.
    /// Does not return if nothing is in flight.
    pub async fn wait_for_update(&mut self) {
        let update = tokio::select! {
            Some(result) = self.reference_receiver.recv() => BackgroundUpdate::Reference(result),
            Some(result) = self.prediction_receiver.recv() => BackgroundUpdate::Prediction(result),
            else => return,
        };

        match update {
            BackgroundUpdate::Reference(result) => {
                self.apply_reference_result(result);
            }
            BackgroundUpdate::Prediction(result) => self.finish_prediction(result),
        }
    }

    /// Attach an event bus. From then on events go to the bus only and
    /// `collect_pending_events` returns nothing new.
    pub fn set_event_bus(&mut self, event_bus: Box<dyn EventBus>) {
        self.event_bus = Some(event_bus);
    }

    /// Take the events emitted since the last call. Without an event bus the
    /// caller must drain this regularly, e.g. once per render.
    pub fn collect_pending_events(&mut self) -> Vec<ModelEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn emit(&mut self, event: ModelEvent) {
        match self.event_bus.as_mut() {
            Some(event_bus) => event_bus.publish_model_event(event),
            None => self.pending_events.push(event),
        }
    }
}
