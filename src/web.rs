//! HTTP surface: the upload page, a JSON endpoint and a health check.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::catalog::LanguageCatalog;
use crate::chart::ChartSegment;
use crate::config::Config;
use crate::detector::LanguageIdentifier;
use crate::error::{InputError, PipelineError};
use crate::filter::FilterConfig;
use crate::pipeline::{analyze, decode_upload, Outcome};
use crate::render::{page, PageResult};

/// Shared, read-only state for all requests.
pub struct AppState<I> {
    pub config: Config,
    pub identifier: I,
    pub catalog: &'static LanguageCatalog,
}

impl<I> AppState<I> {
    pub fn new(config: Config, identifier: I, catalog: &'static LanguageCatalog) -> Self {
        Self {
            config,
            identifier,
            catalog,
        }
    }
}

pub fn build_router<I>(state: AppState<I>) -> Router
where
    I: LanguageIdentifier + Send + Sync + 'static,
{
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::<I>))
        .route("/detect", post(detect_page::<I>))
        .route("/api/detect", post(detect_api::<I>))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// A request that could not produce a chart.
#[derive(Debug)]
struct Rejection {
    status: StatusCode,
    message: String,
}

impl From<PipelineError> for Rejection {
    fn from(err: PipelineError) -> Self {
        let status = match &err {
            PipelineError::Input(_) => StatusCode::BAD_REQUEST,
            PipelineError::Lookup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match &err {
            PipelineError::Input(e) => warn!("Rejected upload: {}", e),
            PipelineError::Lookup(e) => error!("Catalog lookup failed: {}", e),
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<InputError> for Rejection {
    fn from(err: InputError) -> Self {
        PipelineError::from(err).into()
    }
}

/// Fields of the upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(String, Bytes)>,
    reliable_only: Option<bool>,
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, Rejection> {
    let mut form = UploadForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(multipart_rejection(e)),
        };

        match field.name().map(str::to_string).as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_rejection)?;
                form.file = Some((file_name, data));
            }
            Some("reliable_only") => {
                let value = field.text().await.map_err(multipart_rejection)?;
                form.reliable_only = Some(parse_flag(&value));
            }
            _ => {}
        }
    }

    Ok(form)
}

fn multipart_rejection(err: MultipartError) -> Rejection {
    let status = err.status();
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected oversized upload");
        return Rejection {
            status,
            message: "Uploaded file is too large".to_string(),
        };
    }
    InputError::Malformed(err.body_text()).into()
}

/// The request was not `multipart/form-data` at all.
fn extractor_rejection(err: MultipartRejection) -> Rejection {
    warn!("Rejected request without a multipart body: {}", err.body_text());
    Rejection {
        status: err.status(),
        message: err.body_text(),
    }
}

/// Decode the upload and run the pipeline off the async runtime.
async fn run_detection<I>(
    state: Arc<AppState<I>>,
    file: Option<(String, Bytes)>,
    filter_config: FilterConfig,
) -> Result<Outcome, Rejection>
where
    I: LanguageIdentifier + Send + Sync + 'static,
{
    let (file_name, bytes) = file.ok_or(InputError::MissingFile)?;
    let text = decode_upload(&file_name, &bytes)?;
    info!(
        file_name = %file_name,
        bytes = bytes.len(),
        reliable_only = filter_config.reliable_only,
        "Detecting languages"
    );

    let result = tokio::task::spawn_blocking(move || {
        analyze(
            &text,
            &state.identifier,
            state.catalog,
            &filter_config,
            state.config.max_results,
        )
    })
    .await;

    match result {
        Ok(outcome) => Ok(outcome?),
        Err(e) => {
            error!("Detection task failed: {}", e);
            Err(Rejection {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Language detection failed".to_string(),
            })
        }
    }
}

async fn index<I>(State(state): State<Arc<AppState<I>>>) -> Html<String>
where
    I: LanguageIdentifier + Send + Sync + 'static,
{
    Html(page(PageResult::None, state.config.reliable_only_default))
}

async fn detect_page<I>(
    State(state): State<Arc<AppState<I>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    I: LanguageIdentifier + Send + Sync + 'static,
{
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(err) => return page_error(&extractor_rejection(err), false),
    };
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(rejection) => return page_error(&rejection, false),
    };

    // An unchecked checkbox is simply absent from the submitted form
    let reliable_only = form.reliable_only.unwrap_or(false);
    let filter_config = state.config.filter(reliable_only);

    match run_detection(state, form.file, filter_config).await {
        Ok(Outcome::Languages { segments, .. }) => {
            Html(page(PageResult::Chart(&segments), reliable_only)).into_response()
        }
        Ok(Outcome::NoSignificantLanguage) => {
            Html(page(PageResult::NoSignificantLanguage, reliable_only)).into_response()
        }
        Err(rejection) => page_error(&rejection, reliable_only),
    }
}

fn page_error(rejection: &Rejection, reliable_only: bool) -> Response {
    (
        rejection.status,
        Html(page(PageResult::Error(&rejection.message), reliable_only)),
    )
        .into_response()
}

#[derive(Serialize)]
struct DetectResponse<'a> {
    status: &'static str,
    filter: FilterConfig,
    segments: &'a [ChartSegment],
}

async fn detect_api<I>(
    State(state): State<Arc<AppState<I>>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response
where
    I: LanguageIdentifier + Send + Sync + 'static,
{
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(err) => return json_error(extractor_rejection(err)),
    };
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(rejection) => return json_error(rejection),
    };

    let reliable_only = form
        .reliable_only
        .unwrap_or(state.config.reliable_only_default);
    let filter_config = state.config.filter(reliable_only);

    match run_detection(state, form.file, filter_config).await {
        Ok(outcome) => {
            let status = match outcome {
                Outcome::Languages { .. } => "ok",
                Outcome::NoSignificantLanguage => "no_significant_language",
            };
            Json(DetectResponse {
                status,
                filter: filter_config,
                segments: outcome.segments(),
            })
            .into_response()
        }
        Err(rejection) => json_error(rejection),
    }
}

fn json_error(rejection: Rejection) -> Response {
    (rejection.status, Json(json!({ "error": rejection.message }))).into_response()
}

async fn health() -> &'static str {
    "OK"
}
