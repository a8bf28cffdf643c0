//! Menuflow: an animated choose-one menu driven by a state machine
//!
//! A menu is a [`Machine`]: a map from step identifiers to either a set of
//! labelled options or the terminal marker. The [`Engine`] shows the options
//! of the current step, lets the user lock one with a click, animates the
//! other options off screen and then commits the transition. Reaching a
//! terminal step emits the chosen label to every subscriber.
//!
//! # Core Concepts
//!
//! - **Machine**: Ordered options per step, with an explicit terminal variant
//! - **Selection**: Hover and click handling with lock-once semantics
//! - **Animation**: Idle glyph motion and the exit animation of losing options
//! - **Transition**: The commit point that advances, emits or swaps machines
//! - **Renderer**: The seam to whatever draws the menu
//!
//! # Example
//!
//! ```rust
//! use menuflow::{Engine, EngineConfig, EngineStatus, HeadlessRenderer};
//! use menuflow::{Machine, OptionsNode, StepValue};
//!
//! let machine = Machine::new()
//!     .with_step("000", OptionsNode::new().with_option("A", "001").with_option("B", "002"))
//!     .with_step("001", StepValue::Terminal)
//!     .with_step("002", StepValue::Terminal);
//!
//! let config = EngineConfig::default();
//! let mut engine = Engine::new(HeadlessRenderer::new(&config), config);
//! engine.subscribe(|label: &str| println!("picked {label}"));
//! engine.set_next_machine(machine);
//!
//! engine.init(0.0);
//! engine.frame(16.0).unwrap();
//! assert_eq!(engine.status(), EngineStatus::Active);
//!
//! // Point at "B" and click.
//! let pointer = engine.renderer().pointer_over(1).unwrap();
//! engine.on_hover_enter();
//! engine.on_pointer_move(pointer);
//! engine.frame(32.0).unwrap();
//! assert_eq!(engine.on_click(), Some(1));
//! ```

pub mod animation;
pub mod bootstrap;
pub mod builder;
pub mod config;
pub mod core;
pub mod document;
pub mod engine;
pub mod render;
pub mod selection;

// Re-export commonly used types
pub use bootstrap::Bootstrapper;
pub use builder::{BuildError, EngineBuilder};
pub use config::EngineConfig;
pub use core::{EngineStatus, Machine, OptionsNode, StepValue};
pub use document::{DocumentError, MenuDocument};
pub use engine::{Commit, Engine, EngineError, FrameReport, Subscriber, SubscriberError};
pub use render::{HeadlessRenderer, Renderer};
pub use selection::{Choice, PointerCoords, SelectionArbiter};
