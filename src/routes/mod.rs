pub mod agendamento;
pub mod auth;
pub mod pagina;
