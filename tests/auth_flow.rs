#[cfg(test)]
mod tests {
    use serde_json::json;
    use shelf::api::auth::Credentials;
    use shelf::api::ApiClient;
    use shelf::libs::app::{App, Screen};
    use shelf::libs::auth::{AuthMode, AuthNotice, AuthOutcome};
    use shelf::libs::book::BookFilter;
    use shelf::libs::filter::QueryFilter;
    use shelf::libs::session::{SessionStore, SESSION_TOKEN_FILE};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct AuthTestContext {
        _temp_dir: TempDir,
        token_path: PathBuf,
        server: MockServer,
    }

    impl AuthTestContext {
        fn session(&self) -> SessionStore {
            SessionStore::at(&self.token_path)
        }

        fn app(&self) -> App {
            App::new(ApiClient::new(&self.server.uri(), self.session()).unwrap())
        }

        async fn mount_lists(&self) {
            Mock::given(method("GET"))
                .and(path("/books/"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": 1, "book_name": "1984", "author": "Orwell", "publisher": "Secker", "pages": 328}
                ])))
                .mount(&self.server)
                .await;
            Mock::given(method("GET"))
                .and(path("/tasks/"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": 1, "title": "Read 1984", "completed": false},
                    {"id": 2, "title": "Return library card", "completed": true}
                ])))
                .mount(&self.server)
                .await;
        }

        async fn mount_login(&self, token: &str) {
            Mock::given(method("POST"))
                .and(path("/login"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": token, "token_type": "bearer"})))
                .mount(&self.server)
                .await;
        }
    }

    impl AsyncTestContext for AuthTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let token_path = temp_dir.path().join(SESSION_TOKEN_FILE);
            AuthTestContext {
                _temp_dir: temp_dir,
                token_path,
                server: MockServer::start().await,
            }
        }

        async fn teardown(self) {}
    }

    // === START ===

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_start_without_token_shows_auth(ctx: &mut AuthTestContext) {
        let mut app = ctx.app();
        app.start().await;

        assert_eq!(app.screen(), Screen::Auth);
        assert_eq!(app.auth().mode(), AuthMode::Login);
        assert!(app.books().items().is_empty());
        assert!(ctx.server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_start_with_token_loads_both_panels(ctx: &mut AuthTestContext) {
        ctx.session().set_token("stored-token").unwrap();
        ctx.mount_lists().await;

        let mut app = ctx.app();
        app.start().await;

        assert_eq!(app.screen(), Screen::App);
        assert_eq!(app.books().items().len(), 1);
        assert_eq!(app.tasks().items().len(), 2);
    }

    // === LOGIN ===

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_login_opens_app_and_loads_panels(ctx: &mut AuthTestContext) {
        ctx.mount_login("fresh-token").await;
        Mock::given(method("GET"))
            .and(path("/books/"))
            .and(header("Authorization", "Bearer fresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&ctx.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tasks/"))
            .and(header("Authorization", "Bearer fresh-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 3, "title": "Plan", "completed": false}])))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        let outcome = app.submit_auth(&Credentials::new("alice", "s3cret")).await;

        assert_eq!(outcome, Some(AuthOutcome::LoggedIn));
        assert_eq!(app.screen(), Screen::App);
        assert_eq!(ctx.session().token(), Some("fresh-token".to_string()));
        assert_eq!(app.tasks().items()[0].title, "Plan");
    }

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_invalid_login_stays_on_auth(ctx: &mut AuthTestContext) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"Incorrect username or password"}"#))
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        let outcome = app.submit_auth(&Credentials::new("alice", "wrong")).await;

        assert_eq!(outcome, None);
        assert_eq!(app.screen(), Screen::Auth);
        assert_eq!(app.auth().mode(), AuthMode::Login);
        assert_eq!(app.auth().error(), Some(r#"{"detail":"Incorrect username or password"}"#));
        assert_eq!(ctx.session().token(), None);
    }

    // === REGISTER ===

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_register_returns_to_login_mode(ctx: &mut AuthTestContext) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(json!({"username": "bob", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "username": "bob"})))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        app.set_auth_mode(AuthMode::Register);
        let outcome = app.submit_auth(&Credentials::new("bob", "pw")).await;

        assert_eq!(outcome, Some(AuthOutcome::Registered));
        assert_eq!(app.screen(), Screen::Auth);
        assert_eq!(app.auth().mode(), AuthMode::Login);
        assert_eq!(
            app.auth().notice(),
            Some(&AuthNotice::Info("Registered! Please log in.".to_string()))
        );
        assert_eq!(ctx.session().token(), None);
    }

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_failed_register_keeps_register_mode(ctx: &mut AuthTestContext) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Username already registered"))
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        app.set_auth_mode(AuthMode::Register);
        let outcome = app.submit_auth(&Credentials::new("bob", "pw")).await;

        assert_eq!(outcome, None);
        assert_eq!(app.auth().mode(), AuthMode::Register);
        assert_eq!(app.auth().error(), Some("Username already registered"));
    }

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_register_then_login(ctx: &mut AuthTestContext) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "username": "carol"})))
            .mount(&ctx.server)
            .await;
        ctx.mount_login("carol-token").await;
        ctx.mount_lists().await;

        let mut app = ctx.app();
        app.toggle_auth_mode();
        let credentials = Credentials::new("carol", "pw");

        assert_eq!(app.submit_auth(&credentials).await, Some(AuthOutcome::Registered));
        assert_eq!(app.submit_auth(&credentials).await, Some(AuthOutcome::LoggedIn));
        assert_eq!(app.screen(), Screen::App);
        assert_eq!(app.auth().notice(), None);
        assert_eq!(app.books().items()[0].book_name, "1984");
    }

    #[test]
    fn test_toggle_labels() {
        let login = AuthMode::Login;
        assert_eq!(login.title(), "Login");
        assert_eq!(login.submit_label(), "Login");
        assert_eq!(login.toggle_label(), "Register");

        let register = login.toggled();
        assert_eq!(register, AuthMode::Register);
        assert_eq!(register.title(), "Register");
        assert_eq!(register.submit_label(), "Sign Up");
        assert_eq!(register.toggle_label(), "Login");
        assert_eq!(register.toggled(), AuthMode::Login);
    }

    // === LOGOUT ===

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_logout_clears_token(ctx: &mut AuthTestContext) {
        ctx.session().set_token("stored-token").unwrap();
        ctx.mount_lists().await;

        let mut app = ctx.app();
        app.start().await;
        assert_eq!(app.screen(), Screen::App);

        app.logout().unwrap();

        assert_eq!(app.screen(), Screen::Auth);
        assert_eq!(ctx.session().token(), None);
        assert!(!ctx.token_path.exists());
    }

    // === PANEL ISOLATION ===

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_failure_in_one_panel_leaves_the_other(ctx: &mut AuthTestContext) {
        ctx.session().set_token("stored-token").unwrap();
        Mock::given(method("GET"))
            .and(path("/books/"))
            .respond_with(ResponseTemplate::new(503).set_body_string("books are down"))
            .mount(&ctx.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tasks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "title": "Still here", "completed": false}])))
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        app.start().await;

        assert_eq!(app.books().error(), Some("books are down"));
        assert!(app.books().items().is_empty());
        assert_eq!(app.tasks().error(), None);
        assert_eq!(app.tasks().items()[0].title, "Still here");
    }

    #[test_context(AuthTestContext)]
    #[tokio::test]
    async fn test_relogin_shows_unfiltered_list_without_filter_summary(ctx: &mut AuthTestContext) {
        ctx.session().set_token("stored-token").unwrap();
        ctx.mount_login("again-token").await;
        Mock::given(method("GET"))
            .and(path("/books/"))
            .and(query_param("author", "Orwell"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "book_name": "1984", "author": "Orwell", "publisher": "Secker", "pages": 328}
            ])))
            .mount(&ctx.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/books/"))
            .and(query_param_is_missing("author"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "book_name": "1984", "author": "Orwell", "publisher": "Secker", "pages": 328},
                {"id": 2, "book_name": "Dune", "author": "Herbert", "publisher": "Chilton", "pages": 412}
            ])))
            .mount(&ctx.server)
            .await;
        Mock::given(method("GET"))
            .and(path("/tasks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&ctx.server)
            .await;

        let mut app = ctx.app();
        app.start().await;
        app.set_book_filters(BookFilter::by_author("Orwell"));
        app.apply_book_filters().await;
        assert_eq!(app.books().applied().summary(), Some("author=Orwell".to_string()));
        assert_eq!(app.books().items().len(), 1);

        app.logout().unwrap();
        app.submit_auth(&Credentials::new("alice", "s3cret")).await;

        assert_eq!(app.screen(), Screen::App);
        assert_eq!(app.books().items().len(), 2);
        assert_eq!(app.books().applied().summary(), None);
    }
}
