//! Core value types and traits for optlab.
//!
//! This crate defines the shared abstractions that the expression layer,
//! solvers, and observers build on:
//!
//! - [`Vec2`] and [`Matrix2`]: points, gradients, and Hessians in the
//!   two-variable domain
//! - [`Objective`], [`Differentiable`], [`TwiceDifferentiable`]: what a
//!   solver needs to know about the function it minimizes
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`FIBONACCI`]: the read-only Fibonacci table used by Fibonacci search
//! - [`rounding`]: fixed-decimal and significant-figure rounding for traces

mod fibonacci;
mod matrix;
mod objective;
mod observer;
mod vec2;

pub mod rounding;

pub use fibonacci::{FIBONACCI, FIBONACCI_LEN, fibonacci, fibonacci_index_at_least};
pub use matrix::{Matrix2, SingularMatrixError};
pub use objective::{Differentiable, Objective, TwiceDifferentiable};
pub use observer::Observer;
pub use vec2::Vec2;
