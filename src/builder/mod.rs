//! Builder API for ergonomic engine construction.
//!
//! # Example
//!
//! ```
//! use menuflow::builder::EngineBuilder;
//! use menuflow::config::EngineConfig;
//! use menuflow::document::MenuDocument;
//! use menuflow::render::HeadlessRenderer;
//!
//! let document = MenuDocument::from_json(
//!     r#"{"state_machine": {"000": {"yes": "001"}, "001": "emit"}, "value_map": {"yes": "OK"}}"#,
//! ).unwrap();
//!
//! let config = EngineConfig::default();
//! let mut engine = EngineBuilder::new()
//!     .renderer(HeadlessRenderer::new(&config))
//!     .config(config)
//!     .subscribe(|label: &str| println!("chose {label}"))
//!     .bootstrap(document)
//!     .build()
//!     .unwrap();
//!
//! engine.init(0.0);
//! engine.frame(16.0).unwrap();
//! ```

pub mod engine;
pub mod error;

pub use engine::EngineBuilder;
pub use error::BuildError;
