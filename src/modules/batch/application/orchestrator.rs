use std::sync::Arc;

use crate::modules::batch::domain::{
    BatchItem, BatchMode, BatchReport, BatchRequest, Outcome, OutcomePayload, RouteInputMode,
};
use crate::modules::provider::domain::{GeoPoint, ProviderFailure};
use crate::modules::provider::traits::GeoProviderClient;
use crate::shared::errors::ErrorKind;
use crate::{log_info, log_warn};

use super::progress::ProgressEmitter;

/// Drives one batch: walks the items in input order, runs each through
/// the provider, and hands every outcome to the emitter as it lands.
///
/// One in-flight call at a time; a route-by-address item makes its two
/// geocode calls and the route call sequentially. Per-item failures are
/// recorded and the batch moves on; nothing aborts a batch once
/// pre-flight validation has passed.
pub struct BatchOrchestrator {
    provider: Arc<dyn GeoProviderClient>,
}

impl BatchOrchestrator {
    pub fn new(provider: Arc<dyn GeoProviderClient>) -> Self {
        Self { provider }
    }

    pub async fn run(&self, request: &BatchRequest, emitter: &ProgressEmitter) -> BatchReport {
        let total = request.items.len();
        log_info!(
            "Batch: processing {} {} item(s) via {}",
            total,
            request.mode,
            self.provider.provider_kind()
        );

        let mut outcomes = Vec::with_capacity(total);
        for (index, item) in request.items.iter().enumerate() {
            let outcome = self.process_item(index, item, request).await;
            let delivered = emitter.emit_outcome(&outcome);
            outcomes.push(outcome);

            if !delivered {
                log_warn!(
                    "Batch: reporting channel closed after item {}/{}; stopping early",
                    index + 1,
                    total
                );
                break;
            }
        }

        emitter.emit_complete();
        BatchReport::new(request, outcomes)
    }

    /// Report every item as an authentication failure, Complete signal
    /// included. Used when the custom provider's token exchange fails:
    /// the caller still gets a full, ordered log.
    pub fn run_auth_failed(request: &BatchRequest, emitter: &ProgressEmitter) -> BatchReport {
        let token_request = if request.config.token_url.is_empty() {
            "token".to_string()
        } else {
            request.config.token_url.clone()
        };

        let mut outcomes = Vec::with_capacity(request.items.len());
        for (index, item) in request.items.iter().enumerate() {
            let outcome = Outcome::failure(
                index,
                item.subject(),
                ProviderFailure::new(
                    ErrorKind::AuthError,
                    token_request.clone(),
                    "failed to acquire an access token",
                ),
            );
            let delivered = emitter.emit_outcome(&outcome);
            outcomes.push(outcome);
            if !delivered {
                break;
            }
        }

        emitter.emit_complete();
        BatchReport::new(request, outcomes)
    }

    async fn process_item(&self, index: usize, item: &BatchItem, request: &BatchRequest) -> Outcome {
        match request.mode {
            BatchMode::Geocode => self.geocode_item(index, item).await,
            BatchMode::Reverse => self.reverse_item(index, item, request).await,
            BatchMode::Route => self.route_item(index, item, request).await,
        }
    }

    async fn geocode_item(&self, index: usize, item: &BatchItem) -> Outcome {
        let subject = item.subject();
        let BatchItem::Value(address) = item else {
            return Self::shape_mismatch(index, subject);
        };

        match self.provider.geocode(address).await {
            Ok(point) => Outcome::success(index, subject, OutcomePayload::Geocoded(point)),
            Err(failure) => Outcome::failure(index, subject, failure),
        }
    }

    async fn reverse_item(
        &self,
        index: usize,
        item: &BatchItem,
        request: &BatchRequest,
    ) -> Outcome {
        let subject = item.subject();

        // Both sub-modes resolve to a parsed pair before any network
        // call; unparseable input never reaches the provider.
        let point = match item {
            BatchItem::Value(raw) => request.coordinate_format.parse(raw),
            BatchItem::Pair { lat, lng } => parse_split_pair(lat, lng),
            BatchItem::Route { .. } => return Self::shape_mismatch(index, subject),
        };

        let Some(point) = point else {
            return Outcome::failure(
                index,
                subject,
                ProviderFailure::invalid_coord("reverse", "coordinate value could not be parsed"),
            );
        };

        match self.provider.reverse_geocode(point.lat, point.lng).await {
            Ok(location) => Outcome::success(index, subject, OutcomePayload::Reversed(location)),
            Err(failure) => Outcome::failure(index, subject, failure),
        }
    }

    async fn route_item(&self, index: usize, item: &BatchItem, request: &BatchRequest) -> Outcome {
        let subject = item.subject();
        let BatchItem::Route {
            origin,
            destination,
        } = item
        else {
            return Self::shape_mismatch(index, subject);
        };

        let (origin_point, destination_point) = match request.route_input_mode {
            RouteInputMode::Address => {
                // Geocode each leg first; the failing side's error is the
                // item's error and the route call is never attempted.
                let origin_point = match self.provider.geocode(origin).await {
                    Ok(point) => point,
                    Err(failure) => return Outcome::failure(index, subject, failure),
                };
                let destination_point = match self.provider.geocode(destination).await {
                    Ok(point) => point,
                    Err(failure) => return Outcome::failure(index, subject, failure),
                };
                (origin_point, destination_point)
            }
            RouteInputMode::Coordinate => {
                let parsed = request
                    .coordinate_format
                    .parse(origin)
                    .zip(request.coordinate_format.parse(destination));
                match parsed {
                    Some(points) => points,
                    None => {
                        return Outcome::failure(
                            index,
                            subject,
                            ProviderFailure::new(
                                ErrorKind::Invalid,
                                "coordinate",
                                "coordinate format error",
                            ),
                        )
                    }
                }
            }
        };

        match self.provider.route(origin_point, destination_point).await {
            Ok(summary) => Outcome::success(
                index,
                subject,
                OutcomePayload::Routed {
                    summary,
                    origin: Some(origin_point),
                    destination: Some(destination_point),
                },
            ),
            Err(failure) => Outcome::failure(index, subject, failure),
        }
    }

    /// An item whose shape does not fit the batch mode; only reachable
    /// through a hand-built request.
    fn shape_mismatch(index: usize, subject: String) -> Outcome {
        Outcome::failure(
            index,
            subject,
            ProviderFailure::new(
                ErrorKind::Invalid,
                "item",
                "item shape does not match the batch mode",
            ),
        )
    }
}

fn parse_split_pair(lat: &str, lng: &str) -> Option<GeoPoint> {
    let lat = lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let lng = lng.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(GeoPoint::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::batch::application::progress::{BufferSink, ProgressMessage, ProgressSink};
    use crate::modules::batch::domain::{CoordinateFormat, ItemResult};
    use crate::modules::provider::domain::{
        ProviderConfig, ProviderKind, ProviderResult, ReverseLocation, RouteSummary,
    };
    use mockall::mock;

    mock! {
        Provider {}

        #[async_trait::async_trait]
        impl GeoProviderClient for Provider {
            fn provider_kind(&self) -> ProviderKind;
            async fn geocode(&self, address: &str) -> ProviderResult<GeoPoint>;
            async fn reverse_geocode(&self, lat: f64, lng: f64) -> ProviderResult<ReverseLocation>;
            async fn route(&self, origin: GeoPoint, destination: GeoPoint) -> ProviderResult<RouteSummary>;
        }
    }

    fn request(mode: BatchMode, items: Vec<BatchItem>) -> BatchRequest {
        BatchRequest {
            mode,
            route_input_mode: RouteInputMode::Address,
            coordinate_format: CoordinateFormat::default(),
            config: ProviderConfig::with_key(ProviderKind::Mapbox, "key"),
            items,
        }
    }

    fn mock_with_kind() -> MockProvider {
        let mut provider = MockProvider::new();
        provider
            .expect_provider_kind()
            .return_const(ProviderKind::Mapbox);
        provider
    }

    fn entry(outcome: &Outcome) -> &crate::modules::batch::domain::ErrorEntry {
        match &outcome.result {
            ItemResult::Failure(entry) => entry,
            ItemResult::Success(_) => panic!("expected a failure outcome"),
        }
    }

    /// A sink whose consumer has already gone away.
    struct ClosedSink;

    impl ProgressSink for ClosedSink {
        fn send(&self, _message: ProgressMessage) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn emits_one_outcome_per_item_in_input_order() {
        let mut provider = mock_with_kind();
        provider.expect_geocode().returning(|address| {
            if address == "nowhere" {
                Err(ProviderFailure::no_result("https://geo/nowhere", "{}"))
            } else {
                Ok(GeoPoint::new(39.9, 116.4))
            }
        });

        let request = request(
            BatchMode::Geocode,
            vec![
                BatchItem::Value("first".to_string()),
                BatchItem::Value("nowhere".to_string()),
                BatchItem::Value("third".to_string()),
            ],
        );
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink.clone());

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&request, &emitter)
            .await;

        let indices: Vec<usize> = report.outcomes.iter().map(|o| o.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(report.outcomes[0].is_success());
        assert!(!report.outcomes[1].is_success());
        assert!(report.outcomes[2].is_success());
        assert_eq!(entry(&report.outcomes[1]).kind, ErrorKind::NoResult);
        assert_eq!(report.summary.error_count, 1);

        let messages = sink.messages();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[3], ProgressMessage::Complete);
    }

    #[tokio::test]
    async fn empty_batch_still_completes_once() {
        let provider = mock_with_kind();
        let request = request(BatchMode::Geocode, vec![]);
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink.clone());

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&request, &emitter)
            .await;

        assert!(report.outcomes.is_empty());
        assert_eq!(sink.messages(), vec![ProgressMessage::Complete]);
    }

    #[tokio::test]
    async fn unparseable_reverse_input_never_reaches_the_provider() {
        let mut provider = mock_with_kind();
        provider.expect_reverse_geocode().never();

        let request = request(
            BatchMode::Reverse,
            vec![BatchItem::Value("not a coordinate".to_string())],
        );
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink);

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&request, &emitter)
            .await;

        assert_eq!(entry(&report.outcomes[0]).kind, ErrorKind::InvalidCoord);
    }

    #[tokio::test]
    async fn split_columns_are_coerced_before_dispatch() {
        let mut provider = mock_with_kind();
        provider
            .expect_reverse_geocode()
            .withf(|lat, lng| (*lat - 39.9).abs() < 1e-9 && (*lng - 116.4).abs() < 1e-9)
            .returning(|_, _| {
                Ok(ReverseLocation {
                    address: "Somewhere".to_string(),
                    ..ReverseLocation::default()
                })
            });

        let request = request(
            BatchMode::Reverse,
            vec![
                BatchItem::Pair {
                    lat: " 39.9 ".to_string(),
                    lng: "116.4".to_string(),
                },
                BatchItem::Pair {
                    lat: "oops".to_string(),
                    lng: "116.4".to_string(),
                },
            ],
        );
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink);

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&request, &emitter)
            .await;

        assert!(report.outcomes[0].is_success());
        assert_eq!(entry(&report.outcomes[1]).kind, ErrorKind::InvalidCoord);
    }

    #[tokio::test]
    async fn failed_origin_geocode_fails_the_route_item_with_that_error() {
        let mut provider = mock_with_kind();
        provider.expect_geocode().returning(|address| {
            if address == "bad origin" {
                Err(ProviderFailure::no_result("https://geo/bad", "{}"))
            } else {
                Ok(GeoPoint::new(1.0, 2.0))
            }
        });
        provider.expect_route().never();

        let request = request(
            BatchMode::Route,
            vec![BatchItem::Route {
                origin: "bad origin".to_string(),
                destination: "fine".to_string(),
            }],
        );
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink);

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&request, &emitter)
            .await;

        let entry = entry(&report.outcomes[0]);
        assert_eq!(entry.kind, ErrorKind::NoResult);
        assert_eq!(entry.request, "https://geo/bad");
    }

    #[tokio::test]
    async fn coordinate_route_legs_are_parsed_locally() {
        let mut provider = mock_with_kind();
        provider.expect_geocode().never();
        provider
            .expect_route()
            .returning(|_, _| Ok(RouteSummary::from_metric(12345.0, 725.0)));

        let mut req = request(
            BatchMode::Route,
            vec![
                BatchItem::Route {
                    origin: "39.9,116.4".to_string(),
                    destination: "31.2,121.5".to_string(),
                },
                BatchItem::Route {
                    origin: "garbage".to_string(),
                    destination: "31.2,121.5".to_string(),
                },
            ],
        );
        req.route_input_mode = RouteInputMode::Coordinate;
        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink);

        let report = BatchOrchestrator::new(Arc::new(provider))
            .run(&req, &emitter)
            .await;

        match &report.outcomes[0].result {
            ItemResult::Success(OutcomePayload::Routed {
                summary, origin, ..
            }) => {
                assert_eq!(summary.distance_km, "12.35");
                assert_eq!(summary.duration_min, "12");
                assert_eq!(origin.unwrap().lat, 39.9);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(entry(&report.outcomes[1]).kind, ErrorKind::Invalid);
        assert_eq!(entry(&report.outcomes[1]).request, "coordinate");
    }

    #[test]
    fn auth_failure_reports_every_item_and_completes() {
        let mut req = request(
            BatchMode::Geocode,
            vec![
                BatchItem::Value("a".to_string()),
                BatchItem::Value("b".to_string()),
            ],
        );
        req.config.kind = ProviderKind::Custom;
        req.config.token_url = "https://auth.example/token".to_string();

        let sink = Arc::new(BufferSink::new());
        let emitter = ProgressEmitter::new(sink.clone());
        let report = BatchOrchestrator::run_auth_failed(&req, &emitter);

        assert_eq!(report.outcomes.len(), 2);
        for outcome in &report.outcomes {
            let entry = entry(outcome);
            assert_eq!(entry.kind, ErrorKind::AuthError);
            assert_eq!(entry.request, "https://auth.example/token");
        }

        let messages = sink.messages();
        assert_eq!(messages.len(), 3);
        let completes = messages
            .iter()
            .filter(|m| matches!(m, ProgressMessage::Complete))
            .count();
        assert_eq!(completes, 1);
    }

    #[test]
    fn closed_channel_stops_the_batch_early() {
        let mut provider = mock_with_kind();
        provider
            .expect_geocode()
            .times(1)
            .returning(|_| Ok(GeoPoint::new(0.0, 0.0)));

        let request = request(
            BatchMode::Geocode,
            vec![
                BatchItem::Value("a".to_string()),
                BatchItem::Value("b".to_string()),
                BatchItem::Value("c".to_string()),
            ],
        );
        let emitter = ProgressEmitter::new(Arc::new(ClosedSink));

        let report = tokio_test::block_on(
            BatchOrchestrator::new(Arc::new(provider)).run(&request, &emitter),
        );

        // The first outcome failed to deliver, so no further outbound
        // calls were issued.
        assert_eq!(report.outcomes.len(), 1);
    }
}
