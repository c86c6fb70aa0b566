#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};

use microservicios::api::hateoas::LinkBuilder;
use microservicios::config::ServiceKind;
use microservicios::domain::entities::{NewUsuario, NewVenta, Usuario, Venta};
use microservicios::domain::repositories::{UsuarioRepository, VentaRepository};
use microservicios::error::AppError;
use microservicios::infrastructure::persistence::{PgUsuarioRepository, PgVentaRepository};
use microservicios::routes::service_router;
use microservicios::state::AppState;

pub const USUARIOS_BASE: &str = "http://usuarios.test:8090";
pub const VENTAS_BASE: &str = "http://ventas.test:9090";

/// In-memory usuario store with the same unique constraints as the table.
#[derive(Default)]
pub struct InMemoryUsuarioRepository {
    rows: Mutex<(i32, Vec<Usuario>)>,
}

impl InMemoryUsuarioRepository {
    fn check_unique(rows: &[Usuario], data: &NewUsuario, skip: Option<i32>) -> Result<(), AppError> {
        for u in rows.iter().filter(|u| Some(u.id) != skip) {
            if u.rut == data.rut {
                return Err(unique_violation("usuario_rut_key"));
            }
            if u.correo == data.correo {
                return Err(unique_violation("usuario_correo_key"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn find_all(&self) -> Result<Vec<Usuario>, AppError> {
        Ok(self.rows.lock().unwrap().1.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Usuario>, AppError> {
        Ok(self.rows.lock().unwrap().1.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, data: NewUsuario) -> Result<Usuario, AppError> {
        let mut guard = self.rows.lock().unwrap();
        Self::check_unique(&guard.1, &data, None)?;
        guard.0 += 1;
        let usuario = Usuario::from_data(guard.0, data);
        guard.1.push(usuario.clone());
        Ok(usuario)
    }

    async fn update(&self, id: i32, data: NewUsuario) -> Result<Option<Usuario>, AppError> {
        let mut guard = self.rows.lock().unwrap();
        Self::check_unique(&guard.1, &data, Some(id))?;
        match guard.1.iter_mut().find(|u| u.id == id) {
            Some(existing) => {
                *existing = Usuario::from_data(id, data);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let mut guard = self.rows.lock().unwrap();
        let before = guard.1.len();
        guard.1.retain(|u| u.id != id);
        Ok(guard.1.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().1.len() as i64)
    }
}

/// In-memory venta store enforcing the unique receipt number.
#[derive(Default)]
pub struct InMemoryVentaRepository {
    rows: Mutex<(i32, Vec<Venta>)>,
}

impl InMemoryVentaRepository {
    fn check_unique(rows: &[Venta], data: &NewVenta, skip: Option<i32>) -> Result<(), AppError> {
        if rows
            .iter()
            .any(|v| Some(v.id) != skip && v.nro_boleta == data.nro_boleta)
        {
            return Err(unique_violation("venta_nro_boleta_key"));
        }
        Ok(())
    }
}

#[async_trait]
impl VentaRepository for InMemoryVentaRepository {
    async fn find_all(&self) -> Result<Vec<Venta>, AppError> {
        Ok(self.rows.lock().unwrap().1.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venta>, AppError> {
        Ok(self.rows.lock().unwrap().1.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_id_usuario(&self, id_usuario: i32) -> Result<Vec<Venta>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .1
            .iter()
            .filter(|v| v.id_usuario == id_usuario)
            .cloned()
            .collect())
    }

    async fn insert(&self, data: NewVenta) -> Result<Venta, AppError> {
        let mut guard = self.rows.lock().unwrap();
        Self::check_unique(&guard.1, &data, None)?;
        guard.0 += 1;
        let venta = Venta::from_data(guard.0, data);
        guard.1.push(venta.clone());
        Ok(venta)
    }

    async fn update(&self, id: i32, data: NewVenta) -> Result<Option<Venta>, AppError> {
        let mut guard = self.rows.lock().unwrap();
        Self::check_unique(&guard.1, &data, Some(id))?;
        match guard.1.iter_mut().find(|v| v.id == id) {
            Some(existing) => {
                *existing = Venta::from_data(id, data);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let mut guard = self.rows.lock().unwrap();
        let before = guard.1.len();
        guard.1.retain(|v| v.id != id);
        Ok(guard.1.len() < before)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().1.len() as i64)
    }
}

/// Store that fails every call, for 500 paths.
pub struct FailingUsuarioRepository;

#[async_trait]
impl UsuarioRepository for FailingUsuarioRepository {
    async fn find_all(&self) -> Result<Vec<Usuario>, AppError> {
        Err(db_down())
    }
    async fn find_by_id(&self, _id: i32) -> Result<Option<Usuario>, AppError> {
        Err(db_down())
    }
    async fn insert(&self, _data: NewUsuario) -> Result<Usuario, AppError> {
        Err(db_down())
    }
    async fn update(&self, _id: i32, _data: NewUsuario) -> Result<Option<Usuario>, AppError> {
        Err(db_down())
    }
    async fn delete_by_id(&self, _id: i32) -> Result<bool, AppError> {
        Err(db_down())
    }
    async fn count(&self) -> Result<i64, AppError> {
        Err(db_down())
    }
}

fn unique_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": constraint }),
    )
}

fn db_down() -> AppError {
    AppError::internal("Database error", json!({}))
}

pub fn test_links() -> LinkBuilder {
    LinkBuilder::new(None)
        .with_service(ServiceKind::Usuario, USUARIOS_BASE)
        .with_service(ServiceKind::Venta, VENTAS_BASE)
}

pub fn create_test_state(service: ServiceKind) -> AppState {
    AppState::new(
        service,
        Arc::new(InMemoryUsuarioRepository::default()),
        Arc::new(InMemoryVentaRepository::default()),
        test_links(),
    )
}

pub fn create_pg_state(pool: PgPool, service: ServiceKind) -> AppState {
    let pool = Arc::new(pool);
    AppState::new(
        service,
        Arc::new(PgUsuarioRepository::new(pool.clone())),
        Arc::new(PgVentaRepository::new(pool)),
        test_links(),
    )
}

/// Application routes for `state`, with the production middleware.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(service_router(state)).unwrap()
}

pub fn usuario_body(rut: &str, correo: &str) -> serde_json::Value {
    json!({
        "rut": rut,
        "nombres": "Hector",
        "apellidos": "Robledo",
        "correo": correo
    })
}

pub fn venta_body(id_usuario: i32, nro_boleta: i32) -> serde_json::Value {
    json!({
        "id_usuario": id_usuario,
        "nro_boleta": nro_boleta,
        "fecha_compra": "25/12/2025",
        "producto": "PerfumeTest",
        "cantidad": 5,
        "total": 99999
    })
}
