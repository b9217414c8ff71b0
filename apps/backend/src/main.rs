use actix_web::{web, App, HttpServer};
use fairway::config::db::DbProfile;
use fairway::infra::state::build_state;
use fairway::middleware::cors::cors_middleware;
use fairway::middleware::request_trace::RequestTrace;
use fairway::middleware::structured_logger::StructuredLogger;
use fairway::middleware::trace_span::TraceSpan;
use fairway::routes;
use fairway::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables come from the runtime (docker env_file, or a
    // sourced .env for local dev).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    let profile = match DbProfile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Invalid database configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(profile).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "Failed to build application state");
            std::process::exit(1);
        }
    };

    let data = web::Data::new(app_state);

    info!(%host, port, "Starting Fairway backend");
    HttpServer::new(move || {
        // Last wrap runs first: RequestTrace must see the request before the
        // logger and span read its trace id.
        App::new()
            .wrap(TraceSpan)
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
