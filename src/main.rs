use actix_web::{App, HttpServer, web::Data};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use work_friends::config::ServerConfig;
use work_friends::graphql::schema::create_schema;
use work_friends::logger::{LogFormat, init_logger};
use work_friends::openapi::ApiDoc;

/// Work Friends Service Entry Point
///
/// # Endpoints
/// - REST: `/api/v1/health`, `/api/v1/validate-email`, `/api/v1/work-friends`
/// - GraphQL: `/api/v1/graphql` (playground at `/api/v1/playground`)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// Environment variables, optionally from a `.env` file; see [`ServerConfig`].
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logger(LogFormat::from_env());

    let config = ServerConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let schema = create_schema();
    let enable_playground = config.enable_playground;

    info!(host = %config.host, port = config.port, enable_playground, "starting work-friends");

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(schema.clone()))
            .configure(|cfg| work_friends::routes::configure_api(cfg, enable_playground))
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
