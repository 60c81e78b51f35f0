use axum::{extract::State, response::Redirect, Form};

use crate::estado::Contexto;
use crate::models::agendamento::PatchAgendamento;

// Aplica o rascunho enviado e registra o agendamento na agenda
pub async fn agendar(
    State(ctx): State<Contexto>,
    Form(patch): Form<PatchAgendamento>,
) -> Redirect {
    let mut estado = ctx.estado.lock().await;
    estado.agendamento.aplicar(patch);
    estado.agendar(ctx.agenda.as_ref());
    Redirect::to("/")
}
