use dotenvy::dotenv;
use std::env;

use helpdesk_pro::app;
use helpdesk_pro::estado::Contexto;

#[tokio::main]
async fn main() {
    // Carrega variáveis de ambiente do arquivo .env
    dotenv().ok();

    // Logs estruturados; nível ajustável via RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG")
                .unwrap_or_else(|_| "helpdesk_pro=info,tower_http=info".to_string()),
        )
        .init();

    // Estado em memória + colaboradores de demonstração
    let contexto = Contexto::padrao();
    let app = app(contexto);

    // Endereço configurável; padrão localhost:3000
    let addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    tracing::info!("🚀 HelpDesk Pro rodando em http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Falha ao abrir a porta do servidor");

    axum::serve(listener, app)
        .await
        .expect("Falha ao executar o servidor");
}
