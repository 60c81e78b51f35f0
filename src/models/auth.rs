use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usuario {
    pub nome: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sessao {
    pub autenticado: bool,
    pub usuario: Option<Usuario>,
}

// Rascunho do formulário de login; nunca é armazenado além da sessão atual
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormLogin {
    pub email: String,
    pub senha: String,
}

#[derive(Debug, Deserialize)]
pub struct PatchLogin {
    pub email: Option<String>,
    pub senha: Option<String>,
}

impl FormLogin {
    // Atualização parcial campo a campo, como o formulário envia
    pub fn aplicar(&mut self, patch: PatchLogin) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(senha) = patch.senha {
            self.senha = senha;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aplicar_mantem_campos_ausentes() {
        let mut form = FormLogin {
            email: "admin@empresa.com".to_string(),
            senha: "123456".to_string(),
        };

        form.aplicar(PatchLogin {
            email: None,
            senha: Some("outra".to_string()),
        });

        assert_eq!(form.email, "admin@empresa.com");
        assert_eq!(form.senha, "outra");
    }
}
