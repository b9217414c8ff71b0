use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use fairway::middleware::request_trace::RequestTrace;
use fairway::middleware::structured_logger::StructuredLogger;
use fairway::middleware::trace_span::TraceSpan;
use fairway::routes;
use fairway::state::app_state::AppState;

/// Service wired like `main.rs`, minus CORS.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
