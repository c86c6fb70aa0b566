//! Test-data generation for empty stores.
//!
//! Generation is a pure function of the RNG so it can be reproduced under a
//! fixed seed; [`Seeder`] persists the generated rows through the
//! repositories.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;

use crate::domain::entities::{NewUsuario, NewVenta};
use crate::domain::repositories::{UsuarioRepository, VentaRepository};
use crate::error::AppError;
use crate::utils::rut;

/// Number of users inserted by a default seed run.
pub const USUARIOS_SEED_COUNT: usize = 20;

/// Number of sales inserted by a default seed run.
pub const VENTAS_SEED_COUNT: usize = 30;

const RUT_BODY_RANGE: std::ops::Range<u32> = 10_000_000..19_000_000;
const BOLETA_RANGE: std::ops::Range<i32> = 100_000..1_000_000;
const PRICE_RANGE: std::ops::Range<i32> = 1_000..6_000;
const MAX_CANTIDAD: i32 = 5;
const MAX_DAYS_AGO: u64 = 30;
const MAX_EMAIL_ATTEMPTS: usize = 50;

/// Largest batch of users with distinct RUTs a single run can produce.
pub const MAX_USUARIOS_SEED_COUNT: usize = (RUT_BODY_RANGE.end - RUT_BODY_RANGE.start) as usize;

/// Largest batch of sales with distinct receipt numbers a single run can produce.
pub const MAX_VENTAS_SEED_COUNT: usize = (BOLETA_RANGE.end - BOLETA_RANGE.start) as usize;

const PRODUCTOS: &[&str] = &[
    "Perfume Floral",
    "Crema Hidratante",
    "Shampoo Herbal",
    "Jabón Artesanal",
    "Bálsamo Labial",
    "Aceite Corporal",
    "Protector Solar",
    "Colonia Cítrica",
    "Sérum Facial",
    "Exfoliante de Café",
    "Mascarilla de Arcilla",
    "Loción Corporal",
];

/// Result of a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Rows were generated and this many were stored.
    Inserted(usize),
    /// The store already held rows, nothing was generated.
    AlreadySeeded(i64),
    /// Sales need existing users and there were none.
    NoUsuarios,
}

/// Generates `count` users with RUTs and emails unique within the batch.
///
/// Every RUT carries a correct check digit. `count` is capped at
/// [`MAX_USUARIOS_SEED_COUNT`].
pub fn generate_usuarios<R: Rng>(rng: &mut R, count: usize) -> Vec<NewUsuario> {
    let count = capped_count(count, MAX_USUARIOS_SEED_COUNT, "usuarios");
    let mut used_ruts = HashSet::with_capacity(count);
    let mut used_correos = HashSet::with_capacity(count);
    let mut usuarios = Vec::with_capacity(count);

    for i in 0..count {
        let rut = loop {
            let candidate = rut::format(rng.random_range(RUT_BODY_RANGE));
            if used_ruts.insert(candidate.clone()) {
                break candidate;
            }
        };

        let correo = unique_email(rng, &mut used_correos, i);

        usuarios.push(NewUsuario {
            rut,
            nombres: FirstName(EN).fake_with_rng(rng),
            apellidos: LastName(EN).fake_with_rng(rng),
            correo,
        });
    }

    usuarios
}

fn unique_email<R: Rng>(rng: &mut R, used: &mut HashSet<String>, index: usize) -> String {
    for _ in 0..MAX_EMAIL_ATTEMPTS {
        let candidate: String = SafeEmail(EN).fake_with_rng(rng);
        if used.insert(candidate.clone()) {
            return candidate;
        }
    }

    // The faker space is large; this only triggers on pathological seeds.
    let fallback = format!("usuario{index}@example.com");
    used.insert(fallback.clone());
    fallback
}

/// Generates `count` sales spread over the given user ids.
///
/// Receipt numbers are unique within the batch, dates fall in the 30 days up
/// to `today`, and `total` is `cantidad` times a random unit price.
/// Returns an empty list when `usuario_ids` is empty. `count` is capped at
/// [`MAX_VENTAS_SEED_COUNT`].
pub fn generate_ventas<R: Rng>(
    rng: &mut R,
    usuario_ids: &[i32],
    count: usize,
    today: NaiveDate,
) -> Vec<NewVenta> {
    if usuario_ids.is_empty() {
        return Vec::new();
    }

    let count = capped_count(count, MAX_VENTAS_SEED_COUNT, "ventas");
    let mut used_boletas = HashSet::with_capacity(count);
    let mut ventas = Vec::with_capacity(count);

    for _ in 0..count {
        let nro_boleta = loop {
            let candidate = rng.random_range(BOLETA_RANGE);
            if used_boletas.insert(candidate) {
                break candidate;
            }
        };

        let cantidad = rng.random_range(1..=MAX_CANTIDAD);
        let precio = rng.random_range(PRICE_RANGE);
        let days_ago = rng.random_range(0..MAX_DAYS_AGO);
        let fecha = today.checked_sub_days(Days::new(days_ago)).unwrap_or(today);

        ventas.push(NewVenta {
            id_usuario: usuario_ids[rng.random_range(0..usuario_ids.len())],
            nro_boleta,
            fecha_compra: fecha.to_string(),
            producto: PRODUCTOS[rng.random_range(0..PRODUCTOS.len())].to_string(),
            cantidad,
            total: cantidad * precio,
        });
    }

    ventas
}

fn capped_count(requested: usize, max: usize, what: &str) -> usize {
    if requested > max {
        tracing::warn!(requested, max, what, "Seed count exceeds the unique key range, capping");
        max
    } else {
        requested
    }
}

/// Persists generated test data through the repositories.
pub struct Seeder {
    usuarios: Arc<dyn UsuarioRepository>,
    ventas: Arc<dyn VentaRepository>,
}

impl Seeder {
    pub fn new(usuarios: Arc<dyn UsuarioRepository>, ventas: Arc<dyn VentaRepository>) -> Self {
        Self { usuarios, ventas }
    }

    /// Inserts `count` users unless any user already exists.
    ///
    /// Rows rejected by a unique constraint are skipped and logged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn seed_usuarios<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<SeedOutcome, AppError> {
        let existing = self.usuarios.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Usuarios already present, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded(existing));
        }

        let mut inserted = 0;
        for usuario in generate_usuarios(rng, count) {
            match self.usuarios.insert(usuario).await {
                Ok(_) => inserted += 1,
                Err(e @ AppError::Conflict { .. }) => {
                    tracing::warn!(constraint = ?e.constraint(), "Skipping duplicate seed usuario");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(inserted, "Usuario seed completed");
        Ok(SeedOutcome::Inserted(inserted))
    }

    /// Inserts `count` sales referencing existing users.
    ///
    /// Skipped when sales already exist or when there are no users to
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn seed_ventas<R: Rng>(
        &self,
        rng: &mut R,
        count: usize,
        today: NaiveDate,
    ) -> Result<SeedOutcome, AppError> {
        let existing = self.ventas.count().await?;
        if existing > 0 {
            tracing::info!(existing, "Ventas already present, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded(existing));
        }

        let usuario_ids: Vec<i32> = self
            .usuarios
            .find_all()
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();

        if usuario_ids.is_empty() {
            tracing::warn!("No usuarios found, cannot seed ventas");
            return Ok(SeedOutcome::NoUsuarios);
        }

        let mut inserted = 0;
        for venta in generate_ventas(rng, &usuario_ids, count, today) {
            match self.ventas.insert(venta).await {
                Ok(_) => inserted += 1,
                Err(e @ AppError::Conflict { .. }) => {
                    tracing::warn!(constraint = ?e.constraint(), "Skipping duplicate seed venta");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(inserted, "Venta seed completed");
        Ok(SeedOutcome::Inserted(inserted))
    }
}
