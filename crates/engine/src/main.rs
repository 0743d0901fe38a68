//! Castle Kilmere - roll-call demonstration.
//!
//! Walks the standard cast through the spell, friendship, ELM and house rules
//! and reports every outcome through the log.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kilmere_domain::{
    catalog, Ghost, House, HouseName, Member, Professor, Pupil, HIGHLY_INTELLIGENT,
};
use kilmere_engine::infrastructure::announcer::TracingAnnouncer;
use kilmere_engine::infrastructure::settings::EngineSettings;
use kilmere_engine::App;

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    let settings = EngineSettings::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = App::new(settings.clock(), Arc::new(TracingAnnouncer));
    tracing::info!(as_of_year = app.as_of_year(), "Starting Castle Kilmere roll call");

    roll_call(&app)?;

    tracing::info!("Roll call finished");
    Ok(())
}

fn roll_call(app: &App) -> anyhow::Result<()> {
    let spells = &app.use_cases.spells;
    let members = &app.use_cases.members;
    let elms = &app.use_cases.elms;

    let levitation = catalog::stuporus_ratiato();
    let tickling = catalog::tickling_charm();
    let stickfast = catalog::stickfast_hex();
    let cruciatus = catalog::cruciatus_curse();

    let mut ron = Pupil::ron();
    let mut hermione = Pupil::hermione();
    let mut adrien = Pupil::adrien();
    let mut cassidy = Pupil::cassidy();
    cassidy.add_trait(HIGHLY_INTELLIGENT, true);
    let mirren = Professor::mirren();
    let mocking = Ghost::mocking();

    tracing::info!(
        pupil = %ron,
        current_year = ron.current_year(app.as_of_year()),
        known_spells = ron.known_spells().len(),
        "Roll call"
    );

    spells.learn.execute(&mut ron, &levitation);
    spells.learn.execute(&mut ron, &tickling);
    spells.learn.execute(&mut hermione, &tickling);
    spells.learn.execute(&mut cassidy, &tickling);

    spells.learn.execute(&mut ron, &stickfast);
    spells.learn.execute(&mut adrien, &stickfast);
    spells.learn.execute(&mut ron, &cruciatus);
    spells.learn.execute(&mut adrien, &cruciatus);

    spells.cast.execute(&ron, &levitation);
    spells.cast.execute(&ron, &stickfast);
    spells.cast.execute(&adrien, &stickfast);

    members.befriend.execute(&mut ron, &hermione);
    members.befriend.execute(&mut ron, &adrien);
    members.befriend.execute(&mut ron, &mirren);
    members.describe.friends(&ron);

    members.inspect_trait.execute(&cassidy, HIGHLY_INTELLIGENT);
    members.inspect_trait.execute(&ron, "brave");

    elms.record.execute(&mut hermione, &["Potions", "Exceptional"])?;
    elms.record.execute(&mut ron, &["Charms", "Poor"])?;
    if let Err(e) = elms.record.execute(&mut ron, &["Charms"]) {
        tracing::info!(error = %e, "Malformed ELM entry rejected as expected");
    }
    elms.clear.execute(&mut ron);

    let gryffindor = House::new(
        HouseName::Gryffindor,
        vec!["bravery".into(), "courage".into()],
        991,
        &mirren,
        &mocking,
    );
    app.use_cases.houses.age.execute(&gryffindor);

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
