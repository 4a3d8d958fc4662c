//! Route definitions for the Objetos domain API

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{admin, auth, objetos, sistema};
use super::state::ObjetosState;

/// Create system/info routes
fn sistema_routes() -> Router<ObjetosState> {
    Router::new().route("/", get(sistema::info))
}

/// Create public object routes
fn objeto_routes() -> Router<ObjetosState> {
    Router::new()
        .route(
            "/objetos",
            get(objetos::list_objetos).post(objetos::create_objeto),
        )
        .route(
            "/objetos/{id}",
            get(objetos::get_objeto)
                .put(objetos::update_objeto)
                .delete(objetos::delete_objeto),
        )
        .route("/objetos/{id}/validar", post(objetos::validar_palavra_passe))
        .route(
            "/objetos/local/{local}/categoria/{categoria}",
            get(objetos::list_objetos_filtrado),
        )
}

/// Create admin login route
fn auth_routes() -> Router<ObjetosState> {
    Router::new().route("/login", post(auth::login))
}

/// Create admin review routes (bearer token required per handler)
fn admin_routes() -> Router<ObjetosState> {
    Router::new()
        .route("/admin/objetos", get(admin::list_todos))
        .route("/admin/objetos/{id}", delete(admin::remover_objeto))
        .route("/admin/denuncias", get(admin::list_denuncias))
        .route("/admin/objetos/{id}/denunciar", post(admin::denunciar))
        .route(
            "/admin/objetos/{id}/resolver-denuncia",
            post(admin::resolver_denuncia),
        )
}

/// Create all Objetos domain API routes
pub fn routes() -> Router<ObjetosState> {
    Router::new()
        .merge(sistema_routes())
        .merge(objeto_routes())
        .merge(auth_routes())
        .merge(admin_routes())
}
