pub mod alunos;
pub mod health;
pub mod response;
