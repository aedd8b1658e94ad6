pub use quiz_notifier::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    quiz_notifier::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
