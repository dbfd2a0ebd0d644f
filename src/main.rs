use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use employee_project_backend::config::{Config, StorageConfig};
use employee_project_backend::models::employee::EmployeeRecord;
use employee_project_backend::repository::{InMemoryRepository, PgEmployeeRepository};
use employee_project_backend::services::employee::{EmployeeRepository, EmployeeService};
use employee_project_backend::{cors, db, routes};

async fn build_repository(storage: StorageConfig) -> io::Result<Arc<EmployeeRepository>> {
    match storage {
        StorageConfig::Postgres { url, max_connections } => {
            let pool = db::create_pool(&url, max_connections)
                .await
                .map_err(io::Error::other)?;
            db::ensure_schema(&pool).await.map_err(io::Error::other)?;
            info!("Using PostgreSQL storage ({} connections)", max_connections);
            Ok(Arc::new(PgEmployeeRepository::new(pool)))
        }
        StorageConfig::InMemory => {
            warn!("DATABASE_URL not set, employees are kept in memory only");
            Ok(Arc::new(InMemoryRepository::<EmployeeRecord>::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(io::Error::other)?;

    let repo = build_repository(config.storage()).await?;
    let service = web::Data::new(EmployeeService::new(repo));
    let allowed_origin = config.allowed_origin.clone();

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origin))
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(routes)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
