mod common;

#[cfg(test)]
pub mod web_tests {
    use std::fs;

    use actix_web::{App, http::StatusCode, test};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use portfolio::web::{ServerConfig, configure, middleware::SecurityHeaders};

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>portfolio</body></html>";

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        fs::write(dir.path().join("portfolio_bg.wasm"), b"\0asm").unwrap();
        dir
    }

    #[actix_web::test]
    async fn test_client_routes_fall_back_to_index() {
        let dir = site();
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::new(Some("https://abc.supabase.co")))
                .configure(configure(dir.path().to_path_buf())),
        )
        .await;

        for path in ["/", "/admin", "/blog/hello-world"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "{path}");
            assert_eq!(res.headers().get("x-frame-options").unwrap(), "DENY");
            let csp = res.headers().get("content-security-policy").unwrap().to_str().unwrap();
            assert!(csp.contains("https://abc.supabase.co"));
            let body = test::read_body(res).await;
            assert_eq!(body, INDEX_HTML.as_bytes());
        }
    }

    #[actix_web::test]
    async fn test_bundle_files_are_served() {
        let dir = site();
        let app =
            test::init_service(App::new().configure(configure(dir.path().to_path_buf()))).await;

        let req = test::TestRequest::get().uri("/portfolio_bg.wasm").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, &b"\0asm"[..]);
    }

    #[::core::prelude::v1::test]
    fn test_server_config_defaults_and_overrides() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.index_file(), std::path::PathBuf::from("./dist/index.html"));
        assert_eq!(config.backend_origin, None);

        let config = ServerConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("127.0.0.1:3000".into()),
            "SITE_ROOT" => Some("/srv/site".into()),
            "PORTFOLIO_SUPABASE_URL" => Some("https://abc.supabase.co/rest".into()),
            _ => None,
        });
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.site_root, std::path::PathBuf::from("/srv/site"));
        assert_eq!(config.backend_origin.as_deref(), Some("https://abc.supabase.co"));
    }
}
