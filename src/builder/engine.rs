//! Builder for constructing engines.

use crate::bootstrap::Bootstrapper;
use crate::builder::error::BuildError;
use crate::config::EngineConfig;
use crate::core::Machine;
use crate::document::MenuDocument;
use crate::engine::{Engine, Subscriber, Subscribers};
use crate::render::Renderer;

/// Builder for constructing engines with a fluent API.
pub struct EngineBuilder<R: Renderer> {
    renderer: Option<R>,
    config: EngineConfig,
    subscribers: Subscribers,
    machine: Option<Machine>,
    document: Option<MenuDocument>,
}

impl<R: Renderer> EngineBuilder<R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            renderer: None,
            config: EngineConfig::default(),
            subscribers: Subscribers::new(),
            machine: None,
            document: None,
        }
    }

    /// Set the renderer (required).
    pub fn renderer(mut self, renderer: R) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Replace the default configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Register an emission callback.
    pub fn subscribe<F: FnMut(&str) + 'static>(mut self, callback: F) -> Self {
        self.subscribers.push(callback);
        self
    }

    /// Register a stateful or fallible subscriber.
    pub fn subscriber<S: Subscriber + 'static>(mut self, subscriber: S) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Stage `machine` as the first machine to show.
    pub fn machine(mut self, machine: Machine) -> Self {
        self.machine = Some(machine);
        self
    }

    /// Run `document` through a [`Bootstrapper`].
    ///
    /// Takes precedence over [`machine`](Self::machine).
    pub fn bootstrap(mut self, document: MenuDocument) -> Self {
        self.document = Some(document);
        self
    }

    /// Build the engine.
    ///
    /// Subscribers are registered in the order they were added; a
    /// bootstrapper, if any, comes after them.
    pub fn build(self) -> Result<Engine<R>, BuildError> {
        let renderer = self.renderer.ok_or(BuildError::MissingRenderer)?;

        let mut engine = Engine::with_subscribers(renderer, self.config, self.subscribers);

        if let Some(machine) = self.machine {
            engine.set_next_machine(machine);
        }
        if let Some(document) = self.document {
            let stager = engine.stager();
            Bootstrapper::from_document(document, stager).install(&mut engine);
        }

        Ok(engine)
    }
}

impl<R: Renderer> Default for EngineBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineStatus, OptionsNode, StepValue};
    use crate::render::HeadlessRenderer;

    fn machine() -> Machine {
        Machine::new()
            .with_step("000", OptionsNode::new().with_option("A", "001"))
            .with_step("001", StepValue::Terminal)
    }

    #[test]
    fn builder_requires_renderer() {
        let result = EngineBuilder::<HeadlessRenderer>::new().build();

        assert!(matches!(result, Err(BuildError::MissingRenderer)));
    }

    #[test]
    fn fluent_api_builds_engine() {
        let config = EngineConfig::default();
        let engine = EngineBuilder::new()
            .renderer(HeadlessRenderer::new(&config))
            .config(config)
            .subscribe(|_label: &str| {})
            .machine(machine())
            .build()
            .unwrap();

        assert_eq!(engine.status(), EngineStatus::NotInit);
        assert!(engine.model().has_pending());
    }

    #[test]
    fn bootstrap_stages_document_machine() {
        let document = MenuDocument {
            state_machine: machine(),
            value_map: Default::default(),
        };

        let mut engine = EngineBuilder::new()
            .renderer(HeadlessRenderer::new(&EngineConfig::default()))
            .bootstrap(document)
            .build()
            .unwrap();

        engine.init(0.0);
        engine.frame(16.0).unwrap();
        assert_eq!(engine.model().machine(), &machine());
        assert_eq!(engine.subscriber_count(), 1);
    }
}
