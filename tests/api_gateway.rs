#[cfg(test)]
mod tests {
    use serde_json::json;
    use shelf::api::auth::Credentials;
    use shelf::api::{ApiClient, ApiError, RequestOptions};
    use shelf::libs::book::Book;
    use shelf::libs::session::{SessionStore, SESSION_TOKEN_FILE};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct ApiTestContext {
        _temp_dir: TempDir,
        server: MockServer,
        api: ApiClient,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let server = MockServer::start().await;
            let session = SessionStore::at(temp_dir.path().join(SESSION_TOKEN_FILE));
            let api = ApiClient::new(&server.uri(), session).unwrap();
            ApiTestContext {
                _temp_dir: temp_dir,
                server,
                api,
            }
        }

        async fn teardown(self) {
            // Cleanup is automatic with TempDir
        }
    }

    fn orwell() -> serde_json::Value {
        json!({
            "id": 1,
            "book_name": "1984",
            "author": "George Orwell",
            "publisher": "Secker & Warburg",
            "pages": 328,
            "description": null
        })
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_bearer_token_is_attached(ctx: &mut ApiTestContext) {
        ctx.api.session().set_token("tok-123").unwrap();
        Mock::given(method("GET"))
            .and(path("/books/"))
            .and(header("Authorization", "Bearer tok-123"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([orwell()])))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let books: Vec<Book> = ctx.api.get("/books/").await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author, "George Orwell");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_no_authorization_without_token(ctx: &mut ApiTestContext) {
        Mock::given(method("GET"))
            .and(path("/books/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&ctx.server)
            .await;

        let books: Vec<Book> = ctx.api.get("/books/").await.unwrap();
        assert!(books.is_empty());

        let requests = ctx.server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_query_string_reaches_server(ctx: &mut ApiTestContext) {
        Mock::given(method("GET"))
            .and(path("/books/"))
            .and(query_param("author", "George Orwell"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([orwell()])))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let books: Vec<Book> = ctx.api.get("/books/?author=George%20Orwell").await.unwrap();
        assert_eq!(books.len(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_json_body_is_serialized(ctx: &mut ApiTestContext) {
        let payload = json!({"book_name": "Animal Farm", "author": "George Orwell", "publisher": "Secker & Warburg", "pages": 112});
        Mock::given(method("POST"))
            .and(path("/books/"))
            .and(body_json(&payload))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 2, "book_name": "Animal Farm", "author": "George Orwell", "publisher": "Secker & Warburg", "pages": 112})))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let book: Book = ctx.api.post("/books/", &payload).await.unwrap();
        assert_eq!(book.id, 2);
        assert_eq!(book.description, None);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_error_carries_response_body(ctx: &mut ApiTestContext) {
        Mock::given(method("GET"))
            .and(path("/tasks/"))
            .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"detail":"Invalid or expired token"}"#))
            .mount(&ctx.server)
            .await;

        let err = ctx.api.call("/tasks/", RequestOptions::get()).await.unwrap_err();
        assert_eq!(err, ApiError::RequestFailed(r#"{"detail":"Invalid or expired token"}"#.to_string()));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_error_falls_back_to_status_text(ctx: &mut ApiTestContext) {
        Mock::given(method("DELETE"))
            .and(path("/books/9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&ctx.server)
            .await;

        let err = ctx.api.delete("/books/9").await.unwrap_err();
        assert_eq!(err.message(), "Not Found");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_no_content_returns_nothing(ctx: &mut ApiTestContext) {
        Mock::given(method("DELETE"))
            .and(path("/tasks/4"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let body = ctx.api.call("/tasks/4", RequestOptions::delete()).await.unwrap();
        assert!(body.is_none());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_success_body_is_returned(ctx: &mut ApiTestContext) {
        Mock::given(method("POST"))
            .and(path("/tasks/4/complete"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Task marked as completed"})))
            .mount(&ctx.server)
            .await;

        let body = ctx.api.post_empty("/tasks/4/complete").await.unwrap();
        assert_eq!(body, Some(json!({"message": "Task marked as completed"})));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_login_is_form_encoded(ctx: &mut ApiTestContext) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("username=alice"))
            .and(body_string_contains("password=s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "tok-alice", "token_type": "bearer"})))
            .expect(1)
            .mount(&ctx.server)
            .await;

        let token = ctx.api.login(&Credentials::new("alice", "s3cret")).await.unwrap();
        assert_eq!(token, "tok-alice");
        // Storing the token is the auth form's job
        assert_eq!(ctx.api.session().token(), None);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_login_never_sends_stale_token(ctx: &mut ApiTestContext) {
        ctx.api.session().set_token("stale").unwrap();
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})))
            .mount(&ctx.server)
            .await;

        ctx.api.login(&Credentials::new("alice", "s3cret")).await.unwrap();

        let requests = ctx.server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_register_sends_json(ctx: &mut ApiTestContext) {
        Mock::given(method("POST"))
            .and(path("/register"))
            .and(body_json(json!({"username": "bob", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "username": "bob"})))
            .expect(1)
            .mount(&ctx.server)
            .await;

        assert!(ctx.api.register(&Credentials::new("bob", "pw")).await.is_ok());
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_health(ctx: &mut ApiTestContext) {
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ARG API Server is running!"})))
            .mount(&ctx.server)
            .await;

        let health = ctx.api.health().await.unwrap();
        assert_eq!(health.message, "ARG API Server is running!");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_request_failed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let session = SessionStore::at(temp_dir.path().join(SESSION_TOKEN_FILE));
        let api = ApiClient::new("http://127.0.0.1:9", session).unwrap();

        let result: Result<Vec<Book>, ApiError> = api.get("/books/").await;
        assert!(matches!(result, Err(ApiError::RequestFailed(message)) if !message.is_empty()));
    }
}
