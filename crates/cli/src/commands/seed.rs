//! Database seeding command.
//!
//! Inserts the practice's standard service catalog so a fresh install has
//! content to show. Skips seeding when services already exist.

use santalena_site::db::ServiceRepository;
use santalena_site::models::NewService;

use super::CommandError;

/// Seed starter services into an empty database.
///
/// # Errors
///
/// Returns `CommandError` if the connection or an insert fails.
pub async fn run() -> Result<(), CommandError> {
    let pool = super::connect().await?;
    let services = ServiceRepository::new(&pool);

    if !services.list_all().await?.is_empty() {
        tracing::info!("Services already present; nothing to seed");
        return Ok(());
    }

    for service in starter_services() {
        let created = services.create(&service).await?;
        tracing::info!(id = %created.id, title = %created.title, "Seeded service");
    }

    tracing::info!("Seeding complete");
    Ok(())
}

/// The practice's standard service catalog.
fn starter_services() -> Vec<NewService> {
    let catalog = [
        (
            "Massagem Relaxante",
            "Massagem corporal com movimentos suaves para aliviar o estresse e a tensão muscular.",
            "spa",
            "50 min",
            "R$ 120",
        ),
        (
            "Massagem Modeladora",
            "Técnica vigorosa que auxilia na redução de medidas e na melhora do contorno corporal.",
            "hands",
            "50 min",
            "R$ 140",
        ),
        (
            "Drenagem Linfática",
            "Estimula o sistema linfático, reduzindo inchaço e retenção de líquidos.",
            "droplet",
            "60 min",
            "R$ 130",
        ),
        (
            "Massagem com Pedras Quentes",
            "Pedras vulcânicas aquecidas que relaxam profundamente a musculatura.",
            "stone",
            "60 min",
            "R$ 160",
        ),
        (
            "Shiatsu",
            "Técnica japonesa de pressão com os dedos ao longo dos meridianos do corpo.",
            "yin-yang",
            "50 min",
            "R$ 140",
        ),
        (
            "Liberação Miofascial",
            "Trabalho profundo sobre a fáscia muscular para recuperar mobilidade e aliviar dores.",
            "muscle",
            "50 min",
            "R$ 150",
        ),
    ];

    catalog
        .into_iter()
        .map(|(title, description, icon, duration, price)| NewService {
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            duration: duration.to_string(),
            price: price.to_string(),
            active: true,
        })
        .collect()
}
