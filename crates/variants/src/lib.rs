//! Exercise variants for the optlab solvers.
//!
//! Each catalog is a fixed table of textbook problems: a function written in
//! the expression syntax of [`optlab_expr`] plus the starting data and
//! tolerances the exercise prescribes. A variant can hand back its compiled
//! function and a ready-to-use solver config, so running an exercise is two
//! calls:
//!
//! ```
//! use optlab_solvers::interval::golden_ratio;
//! use optlab_variants::one_dimensional;
//!
//! let variant = one_dimensional::get(1).unwrap();
//! let f = variant.function().unwrap();
//! let config = variant.config().unwrap();
//!
//! let solution = golden_ratio::minimize_unobserved(&f, variant.range, &config).unwrap();
//! assert!((solution.answer.min.x - 2.0).abs() < variant.epsilon);
//! ```
//!
//! Catalog entries are plain data. They are only checked by compiling and
//! evaluating the function, which the tests in this crate do for every
//! entry.

pub mod constrained;
pub mod gradient_descent;
pub mod newton;
pub mod one_dimensional;
