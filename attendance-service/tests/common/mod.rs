use std::sync::Arc;

use attendance_service::bootstrap::seed_admin;
use attendance_service::bootstrap::seed_school;
use attendance_service::config::AdminConfig;
use attendance_service::domain::classroom::service::ClassroomService;
use attendance_service::domain::student::service::StudentService;
use attendance_service::domain::user::service::UserService;
use attendance_service::inbound::http::router::create_router;
use attendance_service::inbound::http::router::AppState;
use attendance_service::outbound::repositories::InMemoryClassroomRepository;
use attendance_service::outbound::repositories::InMemoryStudentRepository;
use attendance_service::outbound::repositories::InMemoryUserRepository;
use attendance_service::user::models::CreateUserCommand;
use attendance_service::user::models::EmailAddress;
use attendance_service::user::models::Role;
use attendance_service::user::ports::UserServicePort;
use auth::AuthConfig;
use auth::Authenticator;
use auth::Claims;
use auth::FixedClock;
use auth::JwtHandler;
use serde_json::json;

pub const SECRET: &[u8] = b"test-secret-key-for-token-signing";
pub const TOKEN_TTL_SECONDS: i64 = 3600;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Admin123!";
pub const DOCENTE_EMAIL: &str = "docente@example.com";
pub const DOCENTE_PASSWORD: &str = "Docente123!";
pub const ADMINISTRATIVO_EMAIL: &str = "administrativo@example.com";
pub const ADMINISTRATIVO_PASSWORD: &str = "Oficina123!";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    /// Shared with the server; move it forward to expire issued tokens.
    pub clock: Arc<FixedClock>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let auth_config = AuthConfig::from_parts(SECRET, TOKEN_TTL_SECONDS)
            .expect("Failed to build auth config");

        let clock = Arc::new(FixedClock::new(chrono::Utc::now().timestamp()));
        let authenticator = Arc::new(Authenticator::with_clock(&auth_config, clock.clone()));

        let classroom_repository = Arc::new(InMemoryClassroomRepository::new());
        let user_service = Arc::new(
            UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::clone(&authenticator),
            )
            .expect("Failed to create user service"),
        );
        let classroom_service = Arc::new(ClassroomService::new(Arc::clone(&classroom_repository)));
        let student_service = Arc::new(StudentService::new(
            Arc::new(InMemoryStudentRepository::new()),
            classroom_repository,
        ));

        seed_admin(
            user_service.as_ref(),
            &AdminConfig {
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
                display_name: "Administrador".to_string(),
            },
        )
        .await
        .expect("Failed to seed administrator");

        for (email, password, role, name) in [
            (DOCENTE_EMAIL, DOCENTE_PASSWORD, Role::Docente, "Docente"),
            (
                ADMINISTRATIVO_EMAIL,
                ADMINISTRATIVO_PASSWORD,
                Role::Administrativo,
                "Administrativo",
            ),
        ] {
            user_service
                .create_user(CreateUserCommand::new(
                    EmailAddress::new(email.to_string()).unwrap(),
                    role,
                    name.to_string(),
                    password.to_string(),
                ))
                .await
                .expect("Failed to seed user");
        }

        seed_school(classroom_service.as_ref(), student_service.as_ref())
            .await
            .expect("Failed to seed school data");

        let router = create_router(AppState {
            user_service,
            student_service,
            classroom_service,
            authenticator,
        });

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        let jwt_handler = JwtHandler::with_clock(&auth_config, clock.clone());

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler,
            clock,
        }
    }

    /// Log in and return the issued access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response carries no token")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Sign arbitrary claims with the server's secret
    pub fn sign(&self, claims: &Claims) -> String {
        self.jwt_handler
            .issue_default(claims)
            .expect("Failed to sign test token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(&format!("{}{}", self.address, path))
            .bearer_auth(token)
    }
}
