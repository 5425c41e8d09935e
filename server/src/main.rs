mod routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "showcase server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let (app, addr) = routes::app()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;

    tracing::info!(%addr, "showcase listening");
    axum::serve(listener, app).await.map_err(|e| format!("serve: {e}"))
}
