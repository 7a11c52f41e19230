use actix_web::{
    error::{InternalError, UrlencodedError},
    get,
    http::StatusCode,
    post, web, HttpRequest, HttpResponse, ResponseError,
};
use maud::Markup;

use crate::{
    app_state::AppState,
    config::DEFAULT_QUESTIONS,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::GenerationRequest,
        dto::{GenerateMcqRequest, GenerateMcqResponse},
    },
    views::generator::{generator_page, ResultsPanel},
};

const BLANK_TEXT_WARNING: &str = "Please paste some text into the box first.";

fn html(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}

#[get("/")]
pub async fn index() -> Markup {
    generator_page("", DEFAULT_QUESTIONS, ResultsPanel::Empty)
}

/// Form submission: one generation round trip, re-rendering the whole page.
#[post("/generate")]
pub async fn generate_form(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<GenerateMcqRequest>,
) -> HttpResponse {
    let request_id = get_request_id(&req).unwrap_or_default();
    let request: GenerationRequest = form.into_inner().into();

    if request.is_blank() {
        log::info!("[{}] Blank submission, nothing sent", request_id);
        let page = generator_page(
            &request.text,
            request.question_count,
            ResultsPanel::Warning(BLANK_TEXT_WARNING),
        );
        return html(StatusCode::OK, page);
    }

    let text = request.text.clone();
    let question_count = request.question_count;

    match state.generation_service.generate(request).await {
        Ok(outcome) => {
            log::info!(
                "[{}] Rendering {} questions",
                request_id,
                outcome.records.len()
            );
            html(
                StatusCode::OK,
                generator_page(&text, question_count, ResultsPanel::Generated(&outcome)),
            )
        }
        Err(err) => {
            log::error!("[{}] Generation failed: {}", request_id, err);
            let message = err.to_string();
            html(
                err.status_code(),
                generator_page(&text, question_count, ResultsPanel::Error(&message)),
            )
        }
    }
}

#[post("/api/mcqs")]
pub async fn generate_json(
    state: web::Data<AppState>,
    request: web::Json<GenerateMcqRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .generation_service
        .generate(request.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(GenerateMcqResponse::from(outcome)))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Malformed form bodies (e.g. a non-numeric count) still get the page back,
/// with an error indicator instead of actix's plain-text 400.
fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected form submission: {}", err);
    let message = format!("Validation error: {}", err);
    let page = generator_page("", DEFAULT_QUESTIONS, ResultsPanel::Error(&message));
    InternalError::from_response(err, html(StatusCode::BAD_REQUEST, page)).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(form_error))
        .service(index)
        .service(generate_form)
        .service(generate_json)
        .service(health_check);
}
