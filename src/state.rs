//! Shared state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::api::assemblers::{UsuarioAssembler, VentaAssembler};
use crate::api::hateoas::LinkBuilder;
use crate::application::services::{UsuarioService, VentaService};
use crate::config::{Config, ServiceKind};
use crate::domain::repositories::{UsuarioRepository, VentaRepository};
use crate::infrastructure::persistence::{PgUsuarioRepository, PgVentaRepository};

/// Application state, cheap to clone.
///
/// Both services share one database. `service` decides which routes are
/// mounted and which table the health check probes.
#[derive(Clone)]
pub struct AppState {
    pub service: ServiceKind,
    pub usuario_service: Arc<UsuarioService>,
    pub venta_service: Arc<VentaService>,
    pub usuario_assembler: Arc<UsuarioAssembler>,
    pub venta_assembler: Arc<VentaAssembler>,
    pub links: Arc<LinkBuilder>,
}

impl AppState {
    pub fn new(
        service: ServiceKind,
        usuario_repository: Arc<dyn UsuarioRepository>,
        venta_repository: Arc<dyn VentaRepository>,
        links: LinkBuilder,
    ) -> Self {
        Self {
            service,
            usuario_service: Arc::new(UsuarioService::new(usuario_repository)),
            venta_service: Arc::new(VentaService::new(venta_repository)),
            usuario_assembler: Arc::new(UsuarioAssembler::new(links.clone())),
            venta_assembler: Arc::new(VentaAssembler::new(links.clone())),
            links: Arc::new(links),
        }
    }

    /// Wires PostgreSQL repositories and links from configuration.
    pub fn from_pool(pool: Arc<PgPool>, config: &Config) -> Self {
        Self::new(
            config.service,
            Arc::new(PgUsuarioRepository::new(pool.clone())),
            Arc::new(PgVentaRepository::new(pool)),
            LinkBuilder::from_config(config),
        )
    }
}
