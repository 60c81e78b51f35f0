use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::agendamento::{Confirmacao, FormAgendamento};
use crate::models::auth::Usuario;

// Credenciais de demonstração; em produção seria uma chamada a um serviço de
// identidade de verdade
pub const EMAIL_DEMO: &str = "admin@empresa.com";
pub const SENHA_DEMO: &str = "123456";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErroAutenticacao {
    #[error("Email ou senha incorretos")]
    CredenciaisInvalidas,
}

#[derive(Debug, Error)]
pub enum ErroAgendamento {
    #[error("Agenda indisponível: {0}")]
    Indisponivel(String),
}

// Ponto de troca para um backend de identidade real; a máquina de estados só
// conhece este contrato
pub trait ServicoIdentidade: Send + Sync {
    fn autenticar(&self, email: &str, senha: &str) -> Result<Usuario, ErroAutenticacao>;
}

pub trait ServicoAgendamento: Send + Sync {
    fn criar(&self, pedido: &FormAgendamento) -> Result<Confirmacao, ErroAgendamento>;
}

// Comparação literal, sem hash e sem limite de tentativas
pub struct IdentidadeDemo;

impl ServicoIdentidade for IdentidadeDemo {
    fn autenticar(&self, email: &str, senha: &str) -> Result<Usuario, ErroAutenticacao> {
        if email == EMAIL_DEMO && senha == SENHA_DEMO {
            Ok(Usuario {
                nome: "Administrador".to_string(),
                email: email.to_string(),
            })
        } else {
            Err(ErroAutenticacao::CredenciaisInvalidas)
        }
    }
}

// Apenas registra o pedido e devolve um comprovante; nada é persistido
pub struct AgendaLocal;

impl ServicoAgendamento for AgendaLocal {
    fn criar(&self, pedido: &FormAgendamento) -> Result<Confirmacao, ErroAgendamento> {
        let confirmacao = Confirmacao {
            id: Uuid::new_v4(),
            criado_em: Utc::now(),
        };

        tracing::info!(
            data = %pedido.data,
            hora = %pedido.hora,
            descricao = %pedido.descricao,
            confirmacao = %confirmacao.id,
            "Agendamento confirmado"
        );

        Ok(confirmacao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autenticar_aceita_o_par_exato() {
        let usuario = IdentidadeDemo
            .autenticar(EMAIL_DEMO, SENHA_DEMO)
            .expect("credenciais de demonstração devem autenticar");

        assert_eq!(usuario.nome, "Administrador");
        assert_eq!(usuario.email, EMAIL_DEMO);
    }

    #[test]
    fn autenticar_recusa_qualquer_outro_par() {
        let casos = [
            ("admin@empresa.com", "senha-errada"),
            ("outro@empresa.com", "123456"),
            ("ADMIN@EMPRESA.COM", "123456"), // sensível a maiúsculas
            ("admin@empresa.com ", "123456"), // sem normalização de espaços
            ("", ""),
        ];

        for (email, senha) in casos {
            assert_eq!(
                IdentidadeDemo.autenticar(email, senha),
                Err(ErroAutenticacao::CredenciaisInvalidas),
                "não deveria autenticar: {email:?}/{senha:?}"
            );
        }
    }

    #[test]
    fn agenda_local_sempre_confirma() {
        let pedido = FormAgendamento {
            data: "2024-06-01".to_string(),
            hora: "14:30".to_string(),
            descricao: "impressora travada".to_string(),
        };

        assert!(AgendaLocal.criar(&pedido).is_ok());
    }
}
