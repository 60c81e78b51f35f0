use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod estado;
pub mod models;
pub mod routes;
pub mod servicos;
pub mod views;

use estado::Contexto;

// 404 para rotas que não existem no sistema
async fn handle_404() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn app(contexto: Contexto) -> Router {
    // Middleware CORS para permitir testes locais a partir de outras origens
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Página única: o estado decide qual tela renderizar
        .route("/", get(routes::pagina::index))
        // Navegação e sessão
        .route("/acessar", post(routes::auth::acessar))
        .route("/voltar", post(routes::auth::voltar))
        .route("/entrar", post(routes::auth::entrar))
        .route("/sair", post(routes::auth::sair))
        // Agendamento
        .route("/agendar", post(routes::agendamento::agendar))
        // Arquivos estáticos (CSS)
        .nest_service("/static", ServeDir::new("static"))
        // 404 handler
        .fallback(handle_404)
        .with_state(contexto)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
