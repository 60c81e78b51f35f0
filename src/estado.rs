use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::agendamento::FormAgendamento;
use crate::models::auth::{FormLogin, Sessao};
use crate::models::notificacao::Notificacao;
use crate::servicos::{AgendaLocal, IdentidadeDemo, ServicoAgendamento, ServicoIdentidade};

// As três telas do sistema; exatamente uma ativa por vez
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tela {
    #[default]
    Home,
    Login,
    Agendamento,
}

// Dono único de todo o estado da aplicação. As transições abaixo são a única
// "navegação" que existe; não há rotas além da página única.
#[derive(Debug, Default)]
pub struct AppState {
    tela: Tela,
    pub sessao: Sessao,
    pub login: FormLogin,
    pub agendamento: FormAgendamento,
    notificacoes: Vec<Notificacao>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // Tela ativa para renderização. A tela de agendamento exige sessão
    // autenticada; sem ela o render cai para a home.
    pub fn tela(&self) -> Tela {
        if self.tela == Tela::Agendamento && !self.sessao.autenticado {
            Tela::Home
        } else {
            self.tela
        }
    }

    // Home -> Login; qualquer outra origem é ignorada, a tabela de
    // transições não prevê mais nada
    pub fn acessar(&mut self) {
        if self.tela() != Tela::Home {
            return;
        }
        self.tela = Tela::Login;
    }

    // Login -> Home; descarta o rascunho de login
    pub fn voltar(&mut self) {
        if self.tela() != Tela::Login {
            return;
        }
        self.tela = Tela::Home;
        self.login = FormLogin::default();
    }

    // Login -> Agendamento quando o serviço de identidade aceita o par
    // email/senha do rascunho; em caso de falha nada muda além do toast
    pub fn entrar(&mut self, identidade: &dyn ServicoIdentidade) {
        if self.tela() != Tela::Login {
            return;
        }
        tracing::info!(email = %self.login.email, "Tentativa de login");

        match identidade.autenticar(&self.login.email, &self.login.senha) {
            Ok(usuario) => {
                self.sessao = Sessao {
                    autenticado: true,
                    usuario: Some(usuario),
                };
                self.tela = Tela::Agendamento;
                self.notificar(Notificacao::sucesso(
                    "Login realizado com sucesso!",
                    "Bem-vindo ao sistema de suporte técnico.",
                ));
            }
            Err(erro) => {
                tracing::warn!(%erro, "Login recusado");
                self.notificar(Notificacao::erro(
                    "Erro no login",
                    "Email ou senha incorretos.",
                ));
            }
        }
    }

    // Envia o rascunho de agendamento para a agenda e zera o formulário.
    // O comprovante é apenas confirmado ao usuário, nunca armazenado.
    pub fn agendar(&mut self, agenda: &dyn ServicoAgendamento) {
        if self.tela() != Tela::Agendamento {
            return;
        }
        if !self.agendamento.completo() {
            self.notificar(Notificacao::erro(
                "Dados incompletos",
                "Preencha data, hora e descrição do problema.",
            ));
            return;
        }

        match agenda.criar(&self.agendamento) {
            Ok(_confirmacao) => {
                self.notificar(Notificacao::sucesso(
                    "Agendamento realizado!",
                    &format!(
                        "Seu atendimento foi agendado para {} às {}.",
                        self.agendamento.data, self.agendamento.hora
                    ),
                ));
                self.agendamento = FormAgendamento::default();
            }
            Err(erro) => {
                tracing::error!(%erro, "Falha ao registrar agendamento");
                self.notificar(Notificacao::erro(
                    "Erro no agendamento",
                    "Não foi possível registrar o atendimento.",
                ));
            }
        }
    }

    // Agendamento -> Home; limpa sessão e rascunho de login, sem confirmação
    pub fn sair(&mut self) {
        self.sessao = Sessao::default();
        self.login = FormLogin::default();
        self.tela = Tela::Home;
        self.notificar(Notificacao::sucesso("Logout realizado", "Até logo!"));
    }

    pub fn notificar(&mut self, notificacao: Notificacao) {
        self.notificacoes.push(notificacao);
    }

    // Devolve e limpa a fila; cada toast é renderizado uma única vez
    pub fn drenar_notificacoes(&mut self) -> Vec<Notificacao> {
        std::mem::take(&mut self.notificacoes)
    }
}

pub type Estado = Arc<Mutex<AppState>>;

// Estado compartilhado + colaboradores injetados nos handlers
#[derive(Clone)]
pub struct Contexto {
    pub estado: Estado,
    pub identidade: Arc<dyn ServicoIdentidade>,
    pub agenda: Arc<dyn ServicoAgendamento>,
}

impl Contexto {
    pub fn new(
        identidade: Arc<dyn ServicoIdentidade>,
        agenda: Arc<dyn ServicoAgendamento>,
    ) -> Self {
        Contexto {
            estado: Arc::new(Mutex::new(AppState::new())),
            identidade,
            agenda,
        }
    }

    // Colaboradores de demonstração: par literal + agenda que só confirma
    pub fn padrao() -> Self {
        Self::new(Arc::new(IdentidadeDemo), Arc::new(AgendaLocal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notificacao::Variante;

    fn estado_logado() -> AppState {
        let mut estado = AppState::new();
        estado.acessar();
        estado.login.email = "admin@empresa.com".to_string();
        estado.login.senha = "123456".to_string();
        estado.entrar(&IdentidadeDemo);
        estado
    }

    #[test]
    fn credenciais_erradas_mantem_tela_e_sessao() {
        let casos = [
            ("admin@empresa.com", "000000"),
            ("alguem@empresa.com", "123456"),
            ("", ""),
        ];

        for (email, senha) in casos {
            let mut estado = AppState::new();
            estado.acessar();
            estado.login.email = email.to_string();
            estado.login.senha = senha.to_string();

            estado.entrar(&IdentidadeDemo);

            assert_eq!(estado.tela(), Tela::Login);
            assert!(!estado.sessao.autenticado);
            assert_eq!(estado.sessao.usuario, None);

            let notificacoes = estado.drenar_notificacoes();
            assert_eq!(notificacoes.len(), 1);
            assert_eq!(notificacoes[0].variante, Variante::Destrutiva);
        }
    }

    #[test]
    fn credenciais_corretas_abrem_o_agendamento() {
        let mut estado = estado_logado();

        assert_eq!(estado.tela(), Tela::Agendamento);
        assert!(estado.sessao.autenticado);

        let usuario = estado.sessao.usuario.as_ref().expect("sessão sem usuário");
        assert_eq!(usuario.nome, "Administrador");
        assert_eq!(usuario.email, "admin@empresa.com");

        let notificacoes = estado.drenar_notificacoes();
        assert_eq!(notificacoes.len(), 1);
        assert_eq!(notificacoes[0].variante, Variante::Padrao);
        assert_eq!(notificacoes[0].titulo, "Login realizado com sucesso!");
    }

    #[test]
    fn sair_e_idempotente_para_a_sessao() {
        let mut estado = estado_logado();
        estado.sair();

        assert_eq!(estado.tela(), Tela::Home);
        assert_eq!(estado.sessao, Sessao::default());

        // Não alcançável pela interface, mas o contrato vale mesmo assim
        estado.sair();
        assert_eq!(estado.tela(), Tela::Home);
        assert_eq!(estado.sessao, Sessao::default());
    }

    #[test]
    fn agendar_confirma_e_zera_o_formulario() {
        let mut estado = estado_logado();
        estado.drenar_notificacoes();

        estado.agendamento.data = "2024-06-01".to_string();
        estado.agendamento.hora = "14:30".to_string();
        estado.agendamento.descricao = "printer jam".to_string();

        estado.agendar(&AgendaLocal);

        let notificacoes = estado.drenar_notificacoes();
        assert_eq!(notificacoes.len(), 1);
        let texto = notificacoes[0].descricao.as_deref().unwrap_or_default();
        assert!(texto.contains("2024-06-01"), "descrição: {texto}");
        assert!(texto.contains("14:30"), "descrição: {texto}");

        assert_eq!(estado.agendamento, FormAgendamento::default());
        assert_eq!(estado.tela(), Tela::Agendamento);
    }

    #[test]
    fn agendar_incompleto_preserva_o_rascunho() {
        let mut estado = estado_logado();
        estado.drenar_notificacoes();

        estado.agendamento.data = "2024-06-01".to_string();
        estado.agendar(&AgendaLocal);

        let notificacoes = estado.drenar_notificacoes();
        assert_eq!(notificacoes.len(), 1);
        assert_eq!(notificacoes[0].variante, Variante::Destrutiva);
        assert_eq!(estado.agendamento.data, "2024-06-01");
    }

    #[test]
    fn ida_e_volta_ao_login_restaura_o_estado_inicial() {
        let mut estado = AppState::new();
        estado.acessar();
        estado.login.email = "qualquer@empresa.com".to_string();
        estado.login.senha = "rascunho".to_string();

        estado.voltar();

        assert_eq!(estado.tela(), Tela::Home);
        assert_eq!(estado.sessao, Sessao::default());
        assert_eq!(estado.login, FormLogin::default());
    }

    #[test]
    fn ciclo_completo_volta_ao_estado_inicial() {
        let mut estado = estado_logado();

        // Quantidade de envios no meio do caminho não importa
        for dia in 1..=3 {
            estado.agendamento.data = format!("2024-06-0{dia}");
            estado.agendamento.hora = "09:00".to_string();
            estado.agendamento.descricao = "sem rede".to_string();
            estado.agendar(&AgendaLocal);
        }

        estado.sair();

        assert_eq!(estado.tela(), Tela::Home);
        assert_eq!(estado.sessao, Sessao::default());
        assert_eq!(estado.login, FormLogin::default());
    }

    #[test]
    fn acessar_do_agendamento_nao_leva_ao_login() {
        let mut estado = estado_logado();

        // Sem um sair() no meio, o login não é alcançável
        estado.acessar();

        assert_ne!(estado.tela(), Tela::Login);
        assert_eq!(estado.tela(), Tela::Agendamento);
        assert!(estado.sessao.autenticado);
    }

    #[test]
    fn voltar_fora_do_login_e_ignorado() {
        let mut estado = estado_logado();
        estado.voltar();

        assert_eq!(estado.tela(), Tela::Agendamento);
        assert!(estado.sessao.autenticado);

        let mut inicial = AppState::new();
        inicial.voltar();
        assert_eq!(inicial.tela(), Tela::Home);
    }

    #[test]
    fn entrar_fora_do_login_e_ignorado() {
        let mut estado = AppState::new();
        estado.login.email = "admin@empresa.com".to_string();
        estado.login.senha = "123456".to_string();

        // Ainda na home: nenhuma autenticação acontece
        estado.entrar(&IdentidadeDemo);

        assert_eq!(estado.tela(), Tela::Home);
        assert!(!estado.sessao.autenticado);
        assert!(estado.drenar_notificacoes().is_empty());
    }

    #[test]
    fn agendar_sem_sessao_e_ignorado() {
        let mut estado = AppState::new();
        estado.agendamento.data = "2024-06-01".to_string();
        estado.agendamento.hora = "14:30".to_string();
        estado.agendamento.descricao = "sem rede".to_string();

        estado.agendar(&AgendaLocal);

        // Nem confirmação nem limpeza do rascunho
        assert!(estado.drenar_notificacoes().is_empty());
        assert_eq!(estado.agendamento.data, "2024-06-01");
    }

    #[test]
    fn agendamento_sem_sessao_renderiza_a_home() {
        let mut estado = estado_logado();

        // Simula um estado inconsistente: tela de agendamento sem sessão
        estado.sessao = Sessao::default();

        assert_eq!(estado.tela(), Tela::Home);
    }
}
