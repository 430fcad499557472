use std::sync::Arc;

use attendance_service::bootstrap::seed_admin;
use attendance_service::bootstrap::seed_school;
use attendance_service::config::Config;
use attendance_service::domain::classroom::service::ClassroomService;
use attendance_service::domain::student::service::StudentService;
use attendance_service::domain::user::service::UserService;
use attendance_service::inbound::http::router::create_router;
use attendance_service::inbound::http::router::AppState;
use attendance_service::outbound::repositories::InMemoryClassroomRepository;
use attendance_service::outbound::repositories::InMemoryStudentRepository;
use attendance_service::outbound::repositories::InMemoryUserRepository;
use auth::Authenticator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "attendance_service=debug,auth=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "attendance-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let auth_config = config.auth_config().map_err(|e| {
        tracing::error!(error = %e, "Signing secret is not configured");
        e
    })?;

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_seconds = auth_config.token_ttl_seconds,
        admin_email = %config.admin.email,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(&auth_config));
    let user_repository = Arc::new(InMemoryUserRepository::new());
    let classroom_repository = Arc::new(InMemoryClassroomRepository::new());
    let student_repository = Arc::new(InMemoryStudentRepository::new());

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    )?);
    let classroom_service = Arc::new(ClassroomService::new(Arc::clone(&classroom_repository)));
    let student_service = Arc::new(StudentService::new(
        student_repository,
        classroom_repository,
    ));

    let admin = seed_admin(user_service.as_ref(), &config.admin).await?;
    tracing::info!(user_id = %admin.id, email = %admin.email, "Administrator provisioned");

    seed_school(classroom_service.as_ref(), student_service.as_ref()).await?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(AppState {
        user_service,
        student_service,
        classroom_service,
        authenticator,
    });

    if let Err(e) = axum::serve(http_listener, application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
