use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

// Rascunho do formulário de agendamento; consumido no envio e zerado em seguida
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormAgendamento {
    pub data: String, // Formato: "YYYY-MM-DD"
    pub hora: String, // Formato: "HH:MM"
    pub descricao: String,
}

#[derive(Debug, Deserialize)]
pub struct PatchAgendamento {
    pub data: Option<String>,
    pub hora: Option<String>,
    pub descricao: Option<String>,
}

impl FormAgendamento {
    pub fn aplicar(&mut self, patch: PatchAgendamento) {
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(hora) = patch.hora {
            self.hora = hora;
        }
        if let Some(descricao) = patch.descricao {
            self.descricao = descricao;
        }
    }

    // Todos os campos são obrigatórios no envio
    pub fn completo(&self) -> bool {
        !self.data.is_empty() && !self.hora.is_empty() && !self.descricao.is_empty()
    }
}

// Comprovante devolvido pelo serviço de agenda; registrado no log, nunca persistido
#[derive(Debug, Clone)]
pub struct Confirmacao {
    pub id: Uuid,
    pub criado_em: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completo_exige_os_tres_campos() {
        let mut form = FormAgendamento::default();
        assert!(!form.completo());

        form.aplicar(PatchAgendamento {
            data: Some("2024-06-01".to_string()),
            hora: Some("14:30".to_string()),
            descricao: None,
        });
        assert!(!form.completo());

        form.aplicar(PatchAgendamento {
            data: None,
            hora: None,
            descricao: Some("impressora travada".to_string()),
        });
        assert!(form.completo());
    }
}
