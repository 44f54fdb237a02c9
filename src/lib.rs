pub mod binder;
pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod query;
pub mod routes;

use axum::middleware::from_fn;
use axum::{routing::get, Extension, Router};
use lambda_http::{run, Error};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, RunMode};
use crate::middleware::trace_request;
use crate::routes::{health, student};

pub use binder::bind;
pub use error::BindError;
pub use models::{Bindings, BoundValue, ParameterSpec, TargetKind};
pub use query::{ParamSource, RawQuery};

pub fn create_app(config: Config) -> Router {
    Router::new()
        .route("/basic", get(student::basic))
        .route("/implicit", get(student::implicit))
        .route("/optional", get(student::optional))
        .route("/wrapper", get(student::wrapper))
        .route("/default", get(student::defaults))
        .route("/multi", get(student::multi))
        .route("/duplicate", get(student::duplicate))
        .route("/csv", get(student::csv))
        .route("/mixed", get(student::mixed))
        .route("/health", get(health::health))
        .layer(from_fn(trace_request))
        .layer(Extension(config))
}

pub async fn run_app(config: Config) -> Result<(), Error> {
    let run_mode = config.run_mode;
    let port = config.port;
    let app = create_app(config);

    match run_mode {
        RunMode::Lambda => run(app).await,
        RunMode::Local => {
            let listener = TcpListener::bind(("0.0.0.0", port)).await?;
            info!("listening on {}", listener.local_addr()?);
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}
