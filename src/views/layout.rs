use crate::models::notificacao::{Notificacao, Variante};

// Escapa conteúdo vindo do usuário antes de interpolar no HTML
pub fn escapar(texto: &str) -> String {
    texto
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Toasts auto-dispensáveis via animação CSS; cada um aparece uma única vez
fn toasts(notificacoes: &[Notificacao]) -> String {
    if notificacoes.is_empty() {
        return String::new();
    }

    let mut itens = String::new();
    for notificacao in notificacoes {
        let classe = match notificacao.variante {
            Variante::Padrao => "toast",
            Variante::Destrutiva => "toast toast-destrutivo",
        };
        let descricao = notificacao
            .descricao
            .as_deref()
            .map(|texto| format!("<p>{}</p>", escapar(texto)))
            .unwrap_or_default();

        itens.push_str(&format!(
            r#"<div class="{classe}"><strong>{titulo}</strong>{descricao}</div>"#,
            titulo = escapar(&notificacao.titulo),
        ));
    }

    format!(r#"<div class="toasts">{itens}</div>"#)
}

pub fn documento(titulo: &str, corpo: &str, notificacoes: &[Notificacao]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{titulo}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
{toasts}
{corpo}
</body>
</html>"#,
        titulo = escapar(titulo),
        toasts = toasts(notificacoes),
        corpo = corpo,
    )
}
