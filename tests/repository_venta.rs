//! Run with `cargo test -- --ignored` against a PostgreSQL `DATABASE_URL`.

mod common;

use microservicios::application::seeder::{SeedOutcome, Seeder};
use microservicios::domain::entities::NewVenta;
use microservicios::domain::repositories::VentaRepository;
use microservicios::error::AppError;
use microservicios::infrastructure::persistence::{PgUsuarioRepository, PgVentaRepository};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::PgPool;
use std::sync::Arc;

fn new_venta(id_usuario: i32, nro_boleta: i32) -> NewVenta {
    NewVenta {
        id_usuario,
        nro_boleta,
        fecha_compra: "25/12/2025".to_string(),
        producto: "PerfumeTest".to_string(),
        cantidad: 5,
        total: 99999,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_without_existing_usuario(pool: PgPool) {
    let repo = PgVentaRepository::new(Arc::new(pool));

    let venta = repo.insert(new_venta(100, 56985)).await.unwrap();

    assert!(venta.id > 0);
    assert_eq!(venta.id_usuario, 100);
    assert_eq!(repo.find_by_id(venta.id).await.unwrap(), Some(venta));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_unique_boleta_is_conflict(pool: PgPool) {
    let repo = PgVentaRepository::new(Arc::new(pool));

    repo.insert(new_venta(1, 10)).await.unwrap();
    let err = repo.insert(new_venta(2, 10)).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
    assert_eq!(err.constraint(), Some("venta_nro_boleta_key"));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_id_usuario(pool: PgPool) {
    let repo = PgVentaRepository::new(Arc::new(pool));
    repo.insert(new_venta(5, 1)).await.unwrap();
    repo.insert(new_venta(6, 2)).await.unwrap();
    repo.insert(new_venta(5, 3)).await.unwrap();

    let ventas = repo.find_by_id_usuario(5).await.unwrap();

    assert_eq!(ventas.len(), 2);
    assert!(ventas[0].id < ventas[1].id);
    assert!(repo.find_by_id_usuario(99).await.unwrap().is_empty());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_update_and_delete(pool: PgPool) {
    let repo = PgVentaRepository::new(Arc::new(pool));
    let venta = repo.insert(new_venta(5, 1)).await.unwrap();

    let updated = repo
        .update(venta.id, new_venta(7, 2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.id_usuario, 7);
    assert_eq!(updated.nro_boleta, 2);

    assert!(repo.delete_by_id(venta.id).await.unwrap());
    assert!(repo.find_by_id(venta.id).await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_seeder_fills_empty_tables_once(pool: PgPool) {
    let pool = Arc::new(pool);
    let seeder = Seeder::new(
        Arc::new(PgUsuarioRepository::new(pool.clone())),
        Arc::new(PgVentaRepository::new(pool.clone())),
    );
    let mut rng = StdRng::seed_from_u64(3);
    let today = chrono::NaiveDate::from_ymd_opt(2025, 6, 26).unwrap();

    assert_eq!(
        seeder.seed_ventas(&mut rng, 30, today).await.unwrap(),
        SeedOutcome::NoUsuarios
    );
    assert_eq!(
        seeder.seed_usuarios(&mut rng, 20).await.unwrap(),
        SeedOutcome::Inserted(20)
    );
    assert_eq!(
        seeder.seed_ventas(&mut rng, 30, today).await.unwrap(),
        SeedOutcome::Inserted(30)
    );
    assert_eq!(
        seeder.seed_usuarios(&mut rng, 20).await.unwrap(),
        SeedOutcome::AlreadySeeded(20)
    );
}
