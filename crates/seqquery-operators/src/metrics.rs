//! Per-operator trace hook.
//!
//! This module purposefully avoids pulling heavy telemetry stacks; it only
//! emits `tracing` events when the feature is compiled in and the query
//! config asks for them.

use seqquery_core::config::QueryConfig;

#[cfg(feature = "tracing")]
pub fn emit_op(cfg: &QueryConfig, op: &'static str, key_values: &[(&str, usize)]) {
    if !cfg.trace_operators {
        return;
    }
    let span = tracing::span!(tracing::Level::TRACE, "seqquery", op);
    let _entered = span.enter();
    for (k, v) in key_values {
        tracing::trace!(op, %k, v, "operator");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit_op(_cfg: &QueryConfig, _op: &'static str, _key_values: &[(&str, usize)]) { /* no-op */
}
