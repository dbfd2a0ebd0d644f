use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::services::employee::EmployeeService;

pub const DELETE_OK_MESSAGE: &str = "Delete successfully";
pub const DELETE_FAILED_MESSAGE: &str = "Delete failed";

/// Mounts the employee routes. Callers wrap this in the `/api/v1` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/employees")
            .route(web::get().to(get_employees))
            .route(web::post().to(create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(get_employee))
            .route(web::put().to(update_employee))
            .route(web::delete().to(delete_employee)),
    );
}

fn text(message: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message.to_string())
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.read_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.read_employee(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let message = service.create_employee(&new_employee).await?;
    Ok(text(message))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    updates: web::Json<Employee>,
) -> Result<HttpResponse, AppError> {
    let message = service.update_employee(&updates, id.into_inner()).await?;
    Ok(text(message))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    if service.delete_employee(id.into_inner()).await? {
        Ok(text(DELETE_OK_MESSAGE))
    } else {
        Ok(text(DELETE_FAILED_MESSAGE))
    }
}
