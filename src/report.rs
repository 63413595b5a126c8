//! Read-only text projections of a patch.
//!
//! These views render the model for humans: a per-module listing of
//! inputs, outputs and parameters, and a global listing of all
//! connections grouped by kind. They never mutate the patch.

use crate::error::{PatchbookError, Result};
use crate::patch::{Patch, OPERATOR_KINDS};

/// Render the detail view for one module.
///
/// Fails with [`PatchbookError::UnknownModule`] if the patch has no
/// module of that name.
pub fn module_detail(patch: &Patch, name: &str) -> Result<String> {
    let module = patch
        .module(name)
        .ok_or_else(|| PatchbookError::unknown_module(name))?;

    let mut out = String::new();
    out.push_str("-------\n");
    out.push_str(&format!(
        "Showing information for module: {}\n\n",
        name.to_uppercase()
    ));

    out.push_str("Inputs:\n");
    for (port, conn) in &module.inputs {
        out.push_str(&format!(
            "{} ({}) > {} - {}\n",
            title_case(&conn.peer.module),
            title_case(&conn.peer.port),
            title_case(port),
            title_case(conn.kind.as_str()),
        ));
    }
    out.push('\n');

    out.push_str("Outputs:\n");
    for (port, conns) in &module.outputs {
        for conn in conns {
            out.push_str(&format!(
                "{} > {} ({}) - {} - {}\n",
                title_case(port),
                title_case(&conn.peer.module),
                title_case(&conn.peer.port),
                title_case(conn.kind.as_str()),
                conn.voice,
            ));
        }
    }
    out.push('\n');

    out.push_str("Parameters:\n");
    for (param, value) in &module.parameters {
        out.push_str(&format!("{} = {}\n", title_case(param), value));
    }
    out.push('\n');

    Ok(out)
}

/// Render the detail view for every module in the patch.
pub fn module_detail_all(patch: &Patch) -> String {
    let mut out = String::new();
    for name in patch.modules.keys() {
        // The name comes from the module map, so the lookup cannot fail.
        if let Ok(detail) = module_detail(patch, name) {
            out.push_str(&detail);
        }
    }
    out
}

/// Render all connections grouped by kind, in registry order.
pub fn connections_by_kind(patch: &Patch) -> String {
    let mut out = String::new();
    for (_, kind) in OPERATOR_KINDS {
        out.push_str(&format!("Connection type: {kind}\n"));
        for (name, module) in &patch.modules {
            for conns in module.outputs.values() {
                for conn in conns {
                    if conn.kind == kind {
                        out.push_str(&format!(
                            "{} > {} ({})\n",
                            title_case(name),
                            title_case(&conn.peer.module),
                            title_case(&conn.peer.port),
                        ));
                    }
                }
            }
        }
        out.push('\n');
    }
    out
}

/// Capitalize each letter that starts a word; lower-case the rest.
/// A word starts after any non-alphabetic character, so `osc1-b`
/// renders as `Osc1-B`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation;

    fn sample_patch() -> Patch {
        let input = "\
VOICE 1:
- osc1(out) -> filter1(in)
- lfo1(out) >> filter1(cutoff)
* filter1: cutoff = 800 | resonance = 0.5
";
        notation::parse(input).patch
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("osc1"), "Osc1");
        assert_eq!(title_case("main out"), "Main Out");
        assert_eq!(title_case("osc1-b"), "Osc1-B");
        assert_eq!(title_case("CUTOFF"), "Cutoff");
    }

    #[test]
    fn test_module_detail() {
        let patch = sample_patch();
        let detail = module_detail(&patch, "filter1").unwrap();

        assert!(detail.contains("Showing information for module: FILTER1"));
        assert!(detail.contains("Osc1 (Out) > In - Audio"));
        assert!(detail.contains("Lfo1 (Out) > Cutoff - Cv"));
        assert!(detail.contains("Cutoff = 800"));
        assert!(detail.contains("Resonance = 0.5"));
    }

    #[test]
    fn test_module_detail_outputs_carry_voice() {
        let patch = sample_patch();
        let detail = module_detail(&patch, "osc1").unwrap();
        assert!(detail.contains("Out > Filter1 (In) - Audio - VOICE 1"));
    }

    #[test]
    fn test_module_detail_unknown_module() {
        let patch = sample_patch();
        let err = module_detail(&patch, "nope").unwrap_err();
        assert!(matches!(err, PatchbookError::UnknownModule { .. }));
    }

    #[test]
    fn test_module_detail_all_covers_every_module() {
        let patch = sample_patch();
        let all = module_detail_all(&patch);
        for name in ["FILTER1", "LFO1", "OSC1"] {
            assert!(all.contains(&format!("Showing information for module: {name}")));
        }
    }

    #[test]
    fn test_connections_by_kind_groups_in_registry_order() {
        let patch = sample_patch();
        let listing = connections_by_kind(&patch);

        let audio = listing.find("Connection type: audio").unwrap();
        let cv = listing.find("Connection type: cv").unwrap();
        assert!(audio < cv);
        assert!(listing.contains("Osc1 > Filter1 (In)"));
        assert!(listing.contains("Lfo1 > Filter1 (Cutoff)"));
    }

    #[test]
    fn test_views_do_not_mutate() {
        let patch = sample_patch();
        let before = patch.clone();
        let _ = module_detail_all(&patch);
        let _ = connections_by_kind(&patch);
        assert_eq!(patch, before);
    }
}
