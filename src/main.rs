#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio::telemetry::init();
    leptos::mount::mount_to_body(portfolio::frontend::App);
}

#[cfg(not(target_arch = "wasm32"))]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_web::{App, HttpServer};
    use portfolio::web::{self, ServerConfig, middleware::SecurityHeaders};

    dotenvy::dotenv().ok();
    portfolio::telemetry::init();

    let config = ServerConfig::from_env();
    if !config.index_file().is_file() {
        tracing::warn!(
            root = %config.site_root.display(),
            "no index.html; run `trunk build --release --features csr` first"
        );
    }
    tracing::info!(
        addr = %config.bind_addr,
        root = %config.site_root.display(),
        "serving portfolio"
    );

    let headers = SecurityHeaders::new(config.backend_origin.as_deref());
    let root = config.site_root.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(headers.clone())
            .configure(web::configure(root.clone()))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
