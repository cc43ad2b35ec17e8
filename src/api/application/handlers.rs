use actix_multipart::form::MultipartForm;
use actix_web::{
    HttpResponse, guard,
    http::header,
    web::{Data, ServiceConfig, post, resource},
};
use actix_web_validator::Form;

use super::models::{ApplicationForm, ApplicationUpload};
use super::service::{ApplicationService, ServiceError};

/// POST /applications with an `application/x-www-form-urlencoded` body
async fn submit_form(
    service: Data<ApplicationService>,
    form: Form<ApplicationForm>,
) -> Result<HttpResponse, ServiceError> {
    let response = service.submit(form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// POST /applications with a `multipart/form-data` body
async fn submit_multipart(
    service: Data<ApplicationService>,
    MultipartForm(upload): MultipartForm<ApplicationUpload>,
) -> Result<HttpResponse, ServiceError> {
    let response = service.submit(upload.into()).await?;
    Ok(HttpResponse::Ok().json(response))
}

fn is_multipart(ctx: &guard::GuardContext<'_>) -> bool {
    ctx.head()
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"))
        .unwrap_or(false)
}

pub fn application_config(config: &mut ServiceConfig) {
    config.service(
        resource("/applications")
            .route(post().guard(guard::fn_guard(is_multipart)).to(submit_multipart))
            .route(post().to(submit_form)),
    );
}
