//! Objetos domain: lost-item records, owner secrets, denuncia workflow

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    AcaoDenuncia, Admin, DadosCriacao, NovoObjeto, Objeto, StatusObjeto, JANELA_EXPIRANDO_DIAS,
};
pub use domain::validation;
// Re-export repository types
pub use repository::{AdminRepository, ObjetoRepository, ObjetosRepositories};

// Re-export API types
pub use api::routes;
pub use api::ObjetosState;
