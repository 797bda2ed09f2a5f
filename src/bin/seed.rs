//! Seeds a demo organization with an activation, districts, zones, agents,
//! and tracked links for local development. Idempotent-ish: re-running
//! against a seeded database fails on the unique email/slug constraints.

use dotenvy::dotenv;
use fieldlink::app::{
    self, db,
    domain::{Email, HashedPassword, OrganizationId, Password, Slug, UserId},
};
use sqlx::sqlite::SqlitePoolOptions;
use std::time::Duration;

const DEMO_EMAIL: &str = "demo@fieldlink.local";
const DEMO_PASSWORD: &str = "Fieldlink1demo";

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = app::config::Config::from_env()
        .expect("Failed to load config (check DATABASE_URL and other env vars)");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let user_id = UserId::new();
    let email = Email::new(DEMO_EMAIL.to_string()).expect("demo email is valid");
    let password = Password::new(DEMO_PASSWORD.to_string()).expect("demo password is valid");
    let password_hash = HashedPassword::from_password(&password).expect("hashing failed");

    db::users::insert(
        &pool,
        &db::NewUser {
            id: user_id.clone(),
            email,
            password_hash,
        },
    )
    .await
    .expect("Failed to insert demo user (already seeded?)");

    let org_id = OrganizationId::new();
    db::organizations::insert(
        &pool,
        &db::organizations::NewOrganization {
            id: org_id.clone(),
            name: "Demo Activations Ltd".to_string(),
            owner_user_id: user_id.clone(),
            plan: "free".to_string(),
        },
    )
    .await
    .expect("Failed to insert demo organization");

    db::profiles::insert(&pool, &user_id, Some(&org_id))
        .await
        .expect("Failed to insert demo profile");

    let activation_id = ulid::Ulid::new().to_string();
    db::activations::insert(
        &pool,
        &db::activations::NewActivation {
            id: activation_id.clone(),
            name: "Summer Street Push".to_string(),
            organization_id: org_id.clone(),
        },
    )
    .await
    .expect("Failed to insert demo activation");

    for district_name in ["North", "South"] {
        let district_id = ulid::Ulid::new().to_string();
        db::districts::insert(
            &pool,
            &db::districts::NewDistrict {
                id: district_id.clone(),
                name: district_name.to_string(),
                activation_id: activation_id.clone(),
                organization_id: org_id.as_str(),
            },
        )
        .await
        .expect("Failed to insert demo district");

        for zone_name in ["Station", "Mall"] {
            let zone_id = ulid::Ulid::new().to_string();
            db::zones::insert(
                &pool,
                &db::zones::NewZone {
                    id: zone_id.clone(),
                    name: format!("{} {}", district_name, zone_name),
                    district_id: district_id.clone(),
                    activation_id: activation_id.clone(),
                    organization_id: org_id.as_str(),
                },
            )
            .await
            .expect("Failed to insert demo zone");

            let agent = db::agents::NewAgent {
                id: ulid::Ulid::new().to_string(),
                display_name: format!("Agent {} {}", district_name, zone_name),
                organization_id: org_id.as_str(),
            };
            db::agents::insert(&pool, &agent)
                .await
                .expect("Failed to insert demo agent");
            db::agents::update_zone(&pool, &agent.id, Some(&zone_id))
                .await
                .expect("Failed to assign demo agent");
        }
    }

    let links = [
        ("promo1", "single", Some("https://example.com/landing"), None),
        ("promo2", "fallback", None, Some("https://example.com/store")),
    ];
    for (slug, strategy, single_url, fallback_url) in links {
        db::tracked_links::insert(
            &pool,
            &db::tracked_links::NewTrackedLink {
                id: ulid::Ulid::new().to_string(),
                slug: Slug::new(slug).expect("demo slug is valid"),
                organization_id: org_id.as_str(),
                destination_strategy: strategy.to_string(),
                single_url: single_url.map(str::to_string),
                fallback_url: fallback_url.map(str::to_string),
                is_active: true,
            },
        )
        .await
        .expect("Failed to insert demo link");
        println!("seeded {}/l/{}", config.app_url_base(), slug);
    }

    println!("seeded demo login: {} / {}", DEMO_EMAIL, DEMO_PASSWORD);
}
