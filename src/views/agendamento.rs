use crate::models::agendamento::FormAgendamento;
use crate::models::auth::Sessao;
use crate::views::layout::escapar;

// Tela de agendamento: formulário principal mais os cartões informativos de
// horários, tipos de atendimento e contato de emergência
pub fn render(sessao: &Sessao, form: &FormAgendamento) -> String {
    let nome = sessao
        .usuario
        .as_ref()
        .map(|usuario| usuario.nome.as_str())
        .unwrap_or("visitante");

    format!(
        r#"<header class="cabecalho">
    <div class="container cabecalho-conteudo">
        <div class="marca">
            <span class="escudo">🛡️</span>
            <h1>HelpDesk Pro</h1>
        </div>
        <div class="sessao">
            <span>Olá, {nome}</span>
            <form method="post" action="/sair">
                <button type="submit" class="botao botao-contorno">Sair</button>
            </form>
        </div>
    </div>
</header>

<main class="container">
    <section class="titulo-pagina">
        <h2>Agendar Atendimento Técnico</h2>
        <p>Preencha o formulário abaixo para agendar seu atendimento</p>
    </section>

    <div class="colunas">
        <div class="card">
            <h3>Dados do Agendamento</h3>
            <p class="subtitulo">Informe os detalhes do seu atendimento técnico</p>

            <form method="post" action="/agendar" class="formulario">
                <div class="campos-lado-a-lado">
                    <div class="campo">
                        <label for="data">Data</label>
                        <input id="data" name="data" type="date" value="{data}" required>
                    </div>
                    <div class="campo">
                        <label for="hora">Hora</label>
                        <input id="hora" name="hora" type="time" value="{hora}" required>
                    </div>
                </div>
                <div class="campo">
                    <label for="descricao">Descrição do Problema</label>
                    <textarea id="descricao" name="descricao" rows="4"
                        placeholder="Descreva detalhadamente o problema que precisa ser resolvido..."
                        required>{descricao}</textarea>
                </div>
                <button type="submit" class="botao botao-confirmar botao-largo">✔ Confirmar Agendamento</button>
            </form>
        </div>

        <div class="lateral">
            <div class="card">
                <h3>Horários de Atendimento</h3>
                <div class="linha"><span>Segunda a Sexta:</span><span>08:00 - 18:00</span></div>
                <div class="linha"><span>Sábado:</span><span>08:00 - 12:00</span></div>
                <div class="linha"><span>Domingo:</span><span>Fechado</span></div>
            </div>

            <div class="card">
                <h3>Tipos de Atendimento</h3>
                <ul class="lista-servicos">
                    <li>Instalação de Software</li>
                    <li>Manutenção de Hardware</li>
                    <li>Configuração de Rede</li>
                    <li>Suporte Remoto</li>
                    <li>Backup e Recuperação</li>
                </ul>
            </div>

            <div class="card">
                <h3>Contato de Emergência</h3>
                <p class="subtitulo">Para situações urgentes fora do horário comercial:</p>
                <p class="contato">📞 (11) 9999-9999</p>
                <p class="contato">📧 emergencia@helpdesk.com</p>
            </div>
        </div>
    </div>
</main>"#,
        nome = escapar(nome),
        data = escapar(&form.data),
        hora = escapar(&form.hora),
        descricao = escapar(&form.descricao),
    )
}
