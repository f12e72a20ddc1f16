use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, system};

/// Every route of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/refresh",
            post(system::handlers::auth::refresh),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        .merge(protected_routes())
}

/// Routes that need a valid access token
fn protected_routes() -> Router {
    Router::new()
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user),
        )
        // ========================================
        // CATALOG
        // ========================================
        .route(
            "/crud/editoriales",
            get(handlers::a001_publisher::list_all).post(handlers::a001_publisher::upsert),
        )
        .route(
            "/crud/editoriales/:id",
            get(handlers::a001_publisher::get_by_id),
        )
        .route(
            "/crud/editoriales/:id/estado",
            put(handlers::a001_publisher::toggle_active),
        )
        .route(
            "/crud/editoriales/:id/libros-pendientes",
            get(handlers::a001_publisher::pending_books),
        )
        .route(
            "/crud/editoriales-con-pedidos",
            get(handlers::a001_publisher::list_with_orders),
        )
        .route(
            "/crud/editoriales-con-pendientes",
            get(handlers::a001_publisher::list_with_pending),
        )
        .route(
            "/crud/libros",
            get(handlers::a002_book::list_all).post(handlers::a002_book::upsert),
        )
        .route(
            "/crud/libros/:id/estado",
            put(handlers::a002_book::toggle_active),
        )
        .route(
            "/crud/cursos",
            get(handlers::a003_course::list_all).post(handlers::a003_course::upsert),
        )
        .route("/crud/cursos/libros", post(handlers::a003_course::assign))
        .route("/crud/cursos/:id/libros", get(handlers::a003_course::books))
        .route(
            "/crud/cursos/:id/libros/:book_id",
            delete(handlers::a003_course::unassign),
        )
        // ========================================
        // ORDERS
        // ========================================
        .route(
            "/pedidos/editoriales/:id/pedidos",
            get(handlers::a004_order::list_by_publisher),
        )
        .route("/pedidos/add", post(handlers::a004_order::create))
        .route(
            "/pedidos/unidades-recibidas",
            put(handlers::a004_order::register_receipt),
        )
        .route("/pedidos/:id", get(handlers::a004_order::get_detail))
        // ========================================
        // RESERVATIONS
        // ========================================
        .route(
            "/reservas",
            get(handlers::a005_reservation::list_all).post(handlers::a005_reservation::create),
        )
        .route(
            "/reservas/:id/estado",
            put(handlers::a005_reservation::toggle_active),
        )
        .route(
            "/reservas/:id/entregar/:book_id",
            put(handlers::a005_reservation::deliver),
        )
        .route(
            "/periodo-reservas",
            get(handlers::a006_reservation_period::get).put(handlers::a006_reservation_period::set),
        )
        .layer(middleware::from_fn(system::auth::middleware::require_auth))
}
