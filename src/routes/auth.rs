use axum::{extract::State, response::Redirect, Form};

use crate::estado::Contexto;
use crate::models::auth::PatchLogin;

// Home -> Login
pub async fn acessar(State(ctx): State<Contexto>) -> Redirect {
    ctx.estado.lock().await.acessar();
    Redirect::to("/")
}

// Login -> Home
pub async fn voltar(State(ctx): State<Contexto>) -> Redirect {
    ctx.estado.lock().await.voltar();
    Redirect::to("/")
}

// Aplica o rascunho enviado e tenta autenticar
pub async fn entrar(State(ctx): State<Contexto>, Form(patch): Form<PatchLogin>) -> Redirect {
    let mut estado = ctx.estado.lock().await;
    estado.login.aplicar(patch);
    estado.entrar(ctx.identidade.as_ref());
    Redirect::to("/")
}

// Encerra a sessão, sem confirmação
pub async fn sair(State(ctx): State<Contexto>) -> Redirect {
    ctx.estado.lock().await.sair();
    Redirect::to("/")
}
