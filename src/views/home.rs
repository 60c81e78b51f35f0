// Página de apresentação: cabeçalho, destaque, cartões de recursos e chamada
// para o login
pub fn render() -> String {
    r#"<header class="cabecalho">
    <div class="container cabecalho-conteudo">
        <div class="marca">
            <span class="escudo">🛡️</span>
            <h1>HelpDesk Pro</h1>
        </div>
        <form method="post" action="/acessar">
            <button type="submit" class="botao botao-primario">Acessar Sistema</button>
        </form>
    </div>
</header>

<main class="container">
    <section class="hero">
        <h2>Sistema de Suporte Técnico em TI</h2>
        <p>
            Agende seus atendimentos técnicos de forma rápida e eficiente.
            Nossa equipe está pronta para resolver seus problemas de TI.
        </p>
    </section>

    <section class="recursos">
        <div class="card card-recurso">
            <span class="icone">📅</span>
            <h3>Agendamento Fácil</h3>
            <p>Agende seus atendimentos técnicos em poucos cliques</p>
        </div>
        <div class="card card-recurso">
            <span class="icone">⏱️</span>
            <h3>Atendimento Rápido</h3>
            <p>Resolução ágil dos seus problemas de TI</p>
        </div>
        <div class="card card-recurso">
            <span class="icone">👤</span>
            <h3>Suporte Especializado</h3>
            <p>Técnicos qualificados para todas as suas necessidades</p>
        </div>
    </section>

    <section class="card chamada">
        <h3>Pronto para começar?</h3>
        <p>Acesse o sistema e agende seu próximo atendimento técnico</p>
        <form method="post" action="/acessar">
            <button type="submit" class="botao botao-primario botao-grande">Fazer Login</button>
        </form>
    </section>
</main>

<footer class="rodape">
    <p>&copy; 2024 HelpDesk Pro. Sistema de Suporte Técnico em TI.</p>
</footer>"#
        .to_string()
}
