//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so a
//! single observer can watch any optlab solver.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that know their position in the trace
//! - [`HasObjective`]: events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use optlab_core::Observer;
//! use optlab_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() <= self.target).then(A::stop_early)
//!     }
//! }
//! ```

use optlab_solvers::{constrained, gradient, interval, newton};

/// An event that knows which iteration produced it.
pub trait HasIteration {
    /// Returns the zero-based index of the step in the trace.
    fn iter(&self) -> usize;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the best objective value the step produced.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- interval ---

impl HasIteration for interval::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for interval::Event<'_> {
    fn objective(&self) -> f64 {
        let step = self.step;
        let interior = step.y.fx.min(step.z.fx);
        step.center.map_or(interior, |center| interior.min(center.fx))
    }
}

impl CanStopEarly for interval::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- gradient ---

impl HasIteration for gradient::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for gradient::Event<'_> {
    fn objective(&self) -> f64 {
        self.step.f_next
    }
}

impl CanStopEarly for gradient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasIteration for newton::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for newton::Event<'_> {
    fn objective(&self) -> f64 {
        self.step.f_next
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- constrained ---

impl HasIteration for constrained::Event<'_> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasObjective for constrained::Event<'_> {
    /// The unpenalized objective `f(x*)`.
    fn objective(&self) -> f64 {
        self.step.fx
    }
}

impl CanStopEarly for constrained::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
