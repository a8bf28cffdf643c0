//! Step transitions.
//!
//! [`evaluate`] is called once per frame. When the engine is in a settled
//! status and there is something to resolve, it commits exactly one
//! transition:
//!
//! 1. A staged machine is adopted and its root step shown. This wins over a
//!    locked choice, whichever arrived first.
//! 2. Otherwise the locked choice is resolved. A terminal target emits the
//!    chosen label to every subscriber and leaves no live step; anything
//!    else becomes the live step.
//! 3. The choice and on-screen options are cleared, the old visuals are
//!    destroyed if they were fully shown, and the new step's visuals are
//!    built.
//!
//! Every lookup that can fail is checked before the context is touched.
//! Subscribers run only after an emission is committed.

use super::context::EngineContext;
use super::error::EngineError;
use super::subscribers::Subscribers;
use crate::core::{CurrentOptions, EngineStatus, OptionLabel, StepId};
use crate::render::Renderer;
use tracing::{debug, info, warn};

/// What a committed transition did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commit {
    /// A staged machine replaced the live one
    MachineAdopted,
    /// The live step moved along an option
    Advanced { from: StepId, to: StepId },
    /// A terminal target was chosen and its label emitted
    Emitted {
        label: OptionLabel,
        /// Whether a subscriber staged a machine that was adopted in the
        /// same commit
        adopted_pending: bool,
    },
}

/// Evaluate and, if possible, commit one transition.
///
/// Returns `Ok(None)` when the status does not allow a transition or there
/// is nothing to resolve.
///
/// An emission is delivered at most once. The engine commits the emission
/// (no live step, visuals torn down, [`EngineStatus::Halted`]) before any
/// subscriber runs, so a failing subscriber is reported but the label is
/// never sent again. A machine staged during the emission that has no root
/// step stays staged and is reported by the next evaluation.
pub fn evaluate<R: Renderer>(
    ctx: &mut EngineContext,
    renderer: &mut R,
    subscribers: &mut Subscribers,
) -> Result<Option<Commit>, EngineError> {
    if !ctx.status.can_evaluate() {
        return Ok(None);
    }
    if !ctx.model.has_pending() && !ctx.model.has_options() {
        return Ok(None);
    }

    let was_ready = ctx.status == EngineStatus::Ready;

    if ctx.model.adopt_pending()? {
        info!(steps = ctx.model.machine().len(), "adopted staged machine");
        tear_down(ctx, renderer, was_ready);
        return Ok(Some(show(ctx, renderer, Commit::MachineAdopted)));
    }

    let Some(choice) = ctx.arbiter.locked() else {
        debug!("options on screen but no choice locked");
        return Ok(None);
    };

    let entry = ctx.model.option(choice)?.clone();
    let terminal = ctx.model.machine().resolve(&entry.target)?.is_terminal();

    if !terminal {
        let from = ctx.model.step().unwrap_or_default().to_string();
        ctx.model.set_step(&entry.target)?;
        debug!(%from, to = %entry.target, "advanced step");
        tear_down(ctx, renderer, was_ready);
        let commit = Commit::Advanced {
            from,
            to: entry.target,
        };
        return Ok(Some(show(ctx, renderer, commit)));
    }

    info!(label = %entry.label, "emitting choice");
    ctx.model.clear_step();
    tear_down(ctx, renderer, was_ready);
    ctx.status = EngineStatus::Halted;

    subscribers.notify_all(&entry.label)?;

    let adopted_pending = match ctx.model.adopt_pending() {
        Ok(adopted) => adopted,
        Err(err) => {
            warn!(%err, "machine staged during emission rejected");
            false
        }
    };
    if adopted_pending {
        info!("adopted machine staged during emission");
    }

    let commit = Commit::Emitted {
        label: entry.label,
        adopted_pending,
    };
    Ok(Some(show(ctx, renderer, commit)))
}

/// Clear the choice and on-screen options, and destroy fully shown visuals.
fn tear_down<R: Renderer>(ctx: &mut EngineContext, renderer: &mut R, was_ready: bool) {
    ctx.model.clear_options();
    ctx.arbiter.reset();
    if was_ready {
        renderer.destroy_visuals();
    }
}

/// Build visuals for the live step, or halt when it offers nothing.
fn show<R: Renderer>(ctx: &mut EngineContext, renderer: &mut R, commit: Commit) -> Commit {
    let labels = ctx.model.materialize();
    if labels.is_empty() {
        if ctx.model.current_options() == CurrentOptions::Terminal {
            warn!(step = ?ctx.model.step(), "live step is terminal, nothing to show");
        }
        warn!("engine halted, waiting for a staged machine");
        ctx.status = EngineStatus::Halted;
    } else {
        renderer.build_visuals(&labels);
        ctx.status = EngineStatus::Active;
    }
    debug!(?commit, status = ctx.status.name(), "transition committed");
    commit
}
