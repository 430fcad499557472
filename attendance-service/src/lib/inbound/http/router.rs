use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::authenticate::authenticate;
use super::handlers::classrooms::create_classroom::create_classroom;
use super::handlers::classrooms::list_classrooms::list_classrooms;
use super::handlers::students::create_student::create_student;
use super::handlers::students::delete_student::delete_student;
use super::handlers::students::list_students::list_students;
use super::handlers::students::update_student::update_student;
use super::middleware::authenticate as auth_middleware;
use crate::domain::classroom::service::ClassroomService;
use crate::domain::student::service::StudentService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::InMemoryClassroomRepository;
use crate::outbound::repositories::InMemoryStudentRepository;
use crate::outbound::repositories::InMemoryUserRepository;

pub type AppUserService = UserService<InMemoryUserRepository>;
pub type AppStudentService = StudentService<InMemoryStudentRepository, InMemoryClassroomRepository>;
pub type AppClassroomService = ClassroomService<InMemoryClassroomRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub student_service: Arc<AppStudentService>,
    pub classroom_service: Arc<AppClassroomService>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new().route("/api/auth/login", post(authenticate));

    let protected_routes = Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/:student_id",
            put(update_student).delete(delete_student),
        )
        .route(
            "/api/classrooms",
            get(list_classrooms).post(create_classroom),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            // Headers are left out: they carry bearer tokens.
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
