use lambda_http::Error;
use request_binder::{config::Config, logging, run_app};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    logging::init_logger(config.run_mode);
    run_app(config).await
}
