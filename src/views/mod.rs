pub mod agendamento;
pub mod home;
pub mod layout;
pub mod login;
