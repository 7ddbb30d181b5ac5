use anyhow::Result;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve(page: String, port: u16) -> Result<()> {
    let page: Arc<str> = page.into();
    let app = Router::new().route("/", get(index)).with_state(page);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Tessel preview running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index(State(page): State<Arc<str>>) -> Html<String> {
    Html(page.to_string())
}
