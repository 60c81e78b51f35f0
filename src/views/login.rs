use crate::models::auth::FormLogin;
use crate::views::layout::escapar;

// Tela de login; o rascunho é reapresentado após uma tentativa recusada
pub fn render(form: &FormLogin) -> String {
    format!(
        r#"<main class="centralizado">
    <div class="card card-login">
        <div class="card-login-topo">
            <span class="escudo escudo-grande">🛡️</span>
            <h2>Login</h2>
            <p>Acesse o sistema de suporte técnico</p>
        </div>

        <form method="post" action="/entrar" class="formulario">
            <div class="campo">
                <label for="email">Email</label>
                <input id="email" name="email" type="email" placeholder="seu@email.com" value="{email}" required>
            </div>
            <div class="campo">
                <label for="senha">Senha</label>
                <input id="senha" name="senha" type="password" placeholder="Digite sua senha" required>
            </div>
            <button type="submit" class="botao botao-primario botao-largo">Entrar</button>
        </form>

        <div class="dica">
            <p class="dica-titulo">Dados para teste:</p>
            <p>Email: admin@empresa.com</p>
            <p>Senha: 123456</p>
        </div>

        <form method="post" action="/voltar" class="voltar">
            <button type="submit" class="botao botao-fantasma">&larr; Voltar ao início</button>
        </form>
    </div>
</main>"#,
        email = escapar(&form.email),
    )
}
