use axum::{extract::State, response::Html};

use crate::estado::{Contexto, Tela};
use crate::views;

// Página única do sistema: o estado decide qual tela aparece
pub async fn index(State(ctx): State<Contexto>) -> Html<String> {
    let mut estado = ctx.estado.lock().await;
    let notificacoes = estado.drenar_notificacoes();

    let (titulo, corpo) = match estado.tela() {
        Tela::Home => ("HelpDesk Pro", views::home::render()),
        Tela::Login => ("Login | HelpDesk Pro", views::login::render(&estado.login)),
        Tela::Agendamento => (
            "Agendamento | HelpDesk Pro",
            views::agendamento::render(&estado.sessao, &estado.agendamento),
        ),
    };

    Html(views::layout::documento(titulo, &corpo, &notificacoes))
}
