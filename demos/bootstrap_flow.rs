//! Scripted menu session over the headless renderer.
//!
//! Run with `RUST_LOG=menuflow=debug cargo run --example bootstrap_flow` to
//! see the engine's own logging.

use menuflow::{EngineBuilder, EngineConfig, EngineStatus, HeadlessRenderer, MenuDocument};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DOCUMENT: &str = r#"{
    "state_machine": {
        "000": {"Tea": "001", "Coffee": "002"},
        "001": {"Green": "003", "Black": "003"},
        "002": "emit",
        "003": "emit"
    },
    "value_map": {"Coffee": "Espresso", "Green": "Sencha", "Black": "Assam"}
}"#;

const FRAME_MS: f64 = 16.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let document = MenuDocument::from_json(DOCUMENT)?;
    let config = EngineConfig::default();
    let mut engine = EngineBuilder::new()
        .renderer(HeadlessRenderer::new(&config))
        .config(config)
        .subscribe(|label: &str| println!("emitted: {label}"))
        .bootstrap(document)
        .build()?;

    let mut time = 0.0;
    engine.init(time);

    // Tea, then Black, then the translated "Assam", then Coffee.
    for pick in [0, 1, 0, 1] {
        time += FRAME_MS;
        engine.frame(time)?;

        let labels: Vec<&str> = engine
            .renderer()
            .visuals()
            .options
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        info!(?labels, pick, "choosing");

        let Some(pointer) = engine.renderer().pointer_over(pick) else {
            break;
        };
        engine.on_hover_enter();
        engine.on_pointer_move(pointer);
        time += FRAME_MS;
        engine.frame(time)?;
        engine.on_click();
        engine.on_hover_exit();

        while engine.status() != EngineStatus::Ready {
            time += FRAME_MS;
            engine.frame(time)?;
        }
    }

    time += FRAME_MS;
    let report = engine.frame(time)?;
    info!(commit = ?report.commit, status = report.status.name(), "session finished");
    Ok(())
}
