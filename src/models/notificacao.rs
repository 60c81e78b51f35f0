// Mensagens transitórias exibidas como toast; efeito colateral, não fazem
// parte do estado de navegação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variante {
    Padrao,
    Destrutiva,
}

#[derive(Debug, Clone)]
pub struct Notificacao {
    pub titulo: String,
    pub descricao: Option<String>,
    pub variante: Variante,
}

impl Notificacao {
    pub fn sucesso(titulo: &str, descricao: &str) -> Self {
        Notificacao {
            titulo: titulo.to_string(),
            descricao: Some(descricao.to_string()),
            variante: Variante::Padrao,
        }
    }

    pub fn erro(titulo: &str, descricao: &str) -> Self {
        Notificacao {
            titulo: titulo.to_string(),
            descricao: Some(descricao.to_string()),
            variante: Variante::Destrutiva,
        }
    }
}
