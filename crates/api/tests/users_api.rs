//! HTTP-level integration tests for user accounts.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_user, location, messages, test_pool, Browser};
use inventario_api::auth::password::verify_password;
use inventario_db::repositories::UserRepo;
use inventario_db::DbPool;

async fn logged_in_as_ana(pool: &DbPool) -> Browser {
    create_user(pool, "Ana", "ana@x.com", "secret123").await;
    let mut browser = Browser::new(build_test_app(pool.clone()));
    browser.login("ana@x.com", "secret123").await;
    browser.get("/dashboard").await;
    browser
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_anonymous_visitor_can_register() {
    let pool = test_pool().await;
    let mut browser = Browser::new(build_test_app(pool.clone()));

    let form = browser.get("/agregar_usuario").await;
    assert_eq!(form.status(), StatusCode::OK);
    assert_eq!(body_json(form).await["view"], "agregar_usuario");

    let response = browser
        .post_form(
            "/agregar_usuario",
            &[
                ("nombre", "Beto"),
                ("correo", "beto@x.com"),
                ("contrasena", "hunter22"),
                ("rol", "admin"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/usuarios");

    let user = UserRepo::find_by_email(&pool, "beto@x.com")
        .await
        .unwrap()
        .expect("registered user should exist");
    assert_eq!(user.name, "Beto");
    assert_eq!(user.role, "usuario", "client-supplied role must be ignored");
    assert_ne!(user.password_hash, "hunter22");
    assert!(verify_password("hunter22", &user.password_hash));
}

#[tokio::test]
async fn test_original_create_path_also_registers() {
    let pool = test_pool().await;
    let mut browser = Browser::new(build_test_app(pool.clone()));

    let response = browser
        .post_form(
            "/usuarios/crear",
            &[
                ("nombre", "Beto"),
                ("correo", "beto@x.com"),
                ("contrasena", "hunter22"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_email_registration_is_409() {
    let pool = test_pool().await;
    create_user(&pool, "Ana", "ana@x.com", "secret123").await;
    let mut browser = Browser::new(build_test_app(pool.clone()));

    let response = browser
        .post_form(
            "/agregar_usuario",
            &[
                ("nombre", "Otra Ana"),
                ("correo", "ana@x.com"),
                ("contrasena", "whatever1"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "el correo ya está registrado");
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// List / view
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_user_pages_never_expose_password_hash() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let ana = UserRepo::find_by_email(&pool, "ana@x.com").await.unwrap().unwrap();

    let list = body_json(browser.get("/usuarios").await).await;
    assert_eq!(list["view"], "usuarios");
    assert_eq!(list["data"][0]["nombre"], "Ana");
    assert_eq!(list["data"][0]["correo"], "ana@x.com");
    assert_eq!(list["data"][0]["rol"], "usuario");
    assert!(list["data"][0].get("password_hash").is_none());

    let view = body_json(browser.get(&format!("/usuario/{}", ana.id)).await).await;
    assert_eq!(view["view"], "ver_usuario");
    assert!(!view.to_string().contains(&ana.password_hash));
}

// ---------------------------------------------------------------------------
// Edit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_edit_with_blank_password_keeps_hash() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let before = UserRepo::find_by_email(&pool, "ana@x.com").await.unwrap().unwrap();

    let response = browser
        .post_form(
            &format!("/editar_usuario/{}", before.id),
            &[
                ("nombre", "Ana María"),
                ("correo", "ana@x.com"),
                ("contrasena", ""),
                ("rol", "admin"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/usuarios");

    let after = UserRepo::find_by_id(&pool, before.id).await.unwrap().unwrap();
    assert_eq!(after.name, "Ana María");
    assert_eq!(after.role, "admin");
    assert_eq!(after.password_hash, before.password_hash);

    let list = body_json(browser.get("/usuarios").await).await;
    assert_eq!(messages(&list), vec!["Usuario actualizado exitosamente."]);
}

#[tokio::test]
async fn test_edit_with_new_password_rehashes() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let ana = UserRepo::find_by_email(&pool, "ana@x.com").await.unwrap().unwrap();

    browser
        .post_form(
            &format!("/usuarios/editar/{}", ana.id),
            &[
                ("nombre", "Ana"),
                ("correo", "ana@x.com"),
                ("contrasena", "nueva456"),
                ("rol", "usuario"),
            ],
        )
        .await;

    let after = UserRepo::find_by_id(&pool, ana.id).await.unwrap().unwrap();
    assert!(verify_password("nueva456", &after.password_hash));
    assert!(!verify_password("secret123", &after.password_hash));
}

#[tokio::test]
async fn test_edit_to_taken_email_stays_on_form() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let beto = create_user(&pool, "Beto", "beto@x.com", "hunter22").await;

    let response = browser
        .post_form(
            &format!("/editar_usuario/{}", beto.id),
            &[
                ("nombre", "Beto Cambiado"),
                ("correo", "ana@x.com"),
                ("rol", "usuario"),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_json(response).await;
    assert_eq!(page["view"], "editar_usuario");
    assert_eq!(page["data"]["nombre"], "Beto");
    assert_eq!(page["messages"][0]["category"], "danger");
    assert_eq!(
        page["messages"][0]["message"],
        "Error al actualizar el usuario: el correo ya está registrado"
    );

    let stored = UserRepo::find_by_id(&pool, beto.id).await.unwrap().unwrap();
    assert_eq!(stored, beto);
}

#[tokio::test]
async fn test_edit_requires_login() {
    let pool = test_pool().await;
    let ana = create_user(&pool, "Ana", "ana@x.com", "secret123").await;
    let mut browser = Browser::new(build_test_app(pool.clone()));

    let response = browser
        .post_form(
            &format!("/editar_usuario/{}", ana.id),
            &[("nombre", "Hacked"), ("correo", "ana@x.com"), ("rol", "admin")],
        )
        .await;
    assert_eq!(location(&response), "/login");

    let stored = UserRepo::find_by_id(&pool, ana.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ana");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_delete_user() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let beto = create_user(&pool, "Beto", "beto@x.com", "hunter22").await;

    let response = browser
        .post_form(&format!("/eliminar_usuario/{}", beto.id), &[])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/usuarios");
    assert!(UserRepo::find_by_id(&pool, beto.id).await.unwrap().is_none());

    let list = body_json(browser.get("/usuarios").await).await;
    assert_eq!(messages(&list), vec!["Usuario eliminado exitosamente"]);
}

#[tokio::test]
async fn test_deleting_yourself_ends_your_session() {
    let pool = test_pool().await;
    let mut browser = logged_in_as_ana(&pool).await;
    let ana = UserRepo::find_by_email(&pool, "ana@x.com").await.unwrap().unwrap();

    browser
        .post_form(&format!("/usuarios/eliminar/{}", ana.id), &[])
        .await;

    let response = browser.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}
