use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use serde::Serialize;
use weather_core::{CityInfo, CoordinateQuery, WeatherError, WeatherRecord, WeatherService};

/// Renders a [`WeatherError`] as a JSON error response.
#[derive(Debug)]
pub struct ApiError(pub WeatherError);

impl From<WeatherError> for ApiError {
    fn from(err: WeatherError) -> Self {
        Self(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody<'a> {
    status_code: u16,
    message: String,
    error: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorBody {
            status_code: status.as_u16(),
            message: self.0.to_string(),
            error: status.canonical_reason().unwrap_or("Error"),
        })
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Extractor failures render like every other validation error.
fn validation_error(err: impl fmt::Display) -> actix_web::Error {
    ApiError(WeatherError::Validation(err.to_string())).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/weather")
            .app_data(web::QueryConfig::default().error_handler(|err, _| validation_error(err)))
            .app_data(web::PathConfig::default().error_handler(|err, _| validation_error(err)))
            .route("", web::get().to(all_weather))
            .route("/location/{location}", web::get().to(weather_by_location))
            .route("/coordinates", web::get().to(weather_by_coordinates))
            .route("/city", web::get().to(city_by_coordinates)),
    );
}

async fn all_weather(service: web::Data<WeatherService>) -> ApiResult<web::Json<Vec<WeatherRecord>>> {
    Ok(web::Json(service.all_weather()?))
}

async fn weather_by_location(
    service: web::Data<WeatherService>,
    location: web::Path<String>,
) -> ApiResult<web::Json<WeatherRecord>> {
    let location = location.into_inner();
    if location.trim().is_empty() {
        return Err(WeatherError::Validation("location must not be empty".into()).into());
    }

    Ok(web::Json(service.weather_by_location(&location).await?))
}

async fn weather_by_coordinates(
    service: web::Data<WeatherService>,
    query: web::Query<CoordinateQuery>,
) -> ApiResult<web::Json<WeatherRecord>> {
    let coordinate = query.into_inner().into_coordinate()?;
    Ok(web::Json(service.weather_by_coordinates(coordinate).await?))
}

async fn city_by_coordinates(
    service: web::Data<WeatherService>,
    query: web::Query<CoordinateQuery>,
) -> ApiResult<web::Json<CityInfo>> {
    let coordinate = query.into_inner().into_coordinate()?;
    Ok(web::Json(service.city_by_coordinates(coordinate).await?))
}
