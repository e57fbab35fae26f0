//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best
//! practices, reducing linking overhead to 1x.
//!
//! Structure:
//! - unit: Single-component tests (stages, filters, chain semantics)
//! - integration: Full controller lifecycle driven through event surfaces

mod helpers;
