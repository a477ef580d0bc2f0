#[cfg(feature = "lambda")]
use birthday_countdown::core::response::{ErrorBody, AGE_EXAMPLE, NEXTBIRTHDAY_EXAMPLE};
#[cfg(feature = "lambda")]
use birthday_countdown::utils::logger;
#[cfg(feature = "lambda")]
use birthday_countdown::{age_report, birthday_report, BirthdayError};
#[cfg(feature = "lambda")]
use chrono::Local;
#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

#[cfg(feature = "lambda")]
async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    let path = event.raw_http_path().to_string();
    let params = event.query_string_parameters();
    let dob = params.first("dob");

    // One reference date per invocation, shared by every calculation.
    let today = Local::now().date_naive();

    tracing::info!("Processing {} request", path);

    let (status, body) = if path.ends_with("/api/age") {
        match age_report(dob, today) {
            Ok(summary) => (200, serde_json::to_string(&summary)?),
            Err(error) => (400, error_body(&error, AGE_EXAMPLE)?),
        }
    } else {
        match birthday_report(dob, today) {
            Ok(summary) => (200, serde_json::to_string(&summary)?),
            Err(error) => (400, error_body(&error, NEXTBIRTHDAY_EXAMPLE)?),
        }
    };

    let response = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(Box::new)?;

    Ok(response)
}

#[cfg(feature = "lambda")]
fn error_body(error: &BirthdayError, example: &str) -> Result<String, Error> {
    Ok(serde_json::to_string(&ErrorBody::new(error, example))?)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
