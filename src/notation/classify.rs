//! Line classification for the patch notation.
//!
//! Every input line matches exactly one [`LineForm`]. The forms are
//! tried in a fixed priority order and the first match wins; the
//! builder never re-inspects the raw text. Changing the order would
//! reclassify lines (a connection line must never be read as a
//! comment), so the sequence in [`LineClassifier::classify`] is part
//! of the notation's contract.

use regex::Regex;

use crate::patch::PortRef;

/// A single classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineForm {
    /// `// text` — free-text comment
    Comment { text: String },
    /// `NAME:` — voice label; everything parsed afterwards belongs to
    /// this voice until the next label
    Voice { label: String },
    /// `- mod(port) <op> mod(port)` — directed connection, with an
    /// optional trailing `[..]` annotation that is discarded
    Connection {
        source: PortRef,
        operator: String,
        target: PortRef,
    },
    /// `* mod:` — bare parameter declaration; only updates the module
    /// that following continuation lines attach to
    ParamHeader { module: String },
    /// `* mod: a = 1 | b = 2` — inline parameter list
    Params {
        module: String,
        params: Vec<(String, String)>,
    },
    /// `| a = 1` — parameter continuation for the last bare declaration
    ParamLine { name: String, value: String },
    /// No form matched; the line is dropped without effect
    Unrecognized,
}

/// Classifier holding the compiled line patterns.
pub struct LineClassifier {
    connection: Regex,
    param_decl: Regex,
}

impl LineClassifier {
    /// Compile the line patterns.
    pub fn new() -> Self {
        Self {
            connection: Regex::new(r"^- (.+)\((.+)\) (>>|->|[a-z]>) (.+)\((.+)\)( \[.+\])?$")
                .unwrap(),
            param_decl: Regex::new(r"^\* (.+):\s?(.+)?$").unwrap(),
        }
    }

    /// Classify one raw line into its grammatical form.
    pub fn classify(&self, line: &str) -> LineForm {
        let trimmed = line.trim();

        // 1. Comment
        if let Some(rest) = trimmed.strip_prefix("//") {
            let text = rest.trim();
            if !text.is_empty() {
                return LineForm::Comment {
                    text: text.to_string(),
                };
            }
        }

        // 2. Voice label: the whole line is `<text>:`, and the text
        // contains none of the characters that anchor the other forms.
        if let Some(label) = trimmed.strip_suffix(':') {
            if !label.is_empty() && !label.contains(['*', '-', '|']) {
                return LineForm::Voice {
                    label: label.to_uppercase(),
                };
            }
        }

        // 3. Connection
        if let Some(caps) = self.connection.captures(trimmed) {
            return LineForm::Connection {
                source: PortRef::new(normalize(&caps[1]), normalize(&caps[2])),
                operator: caps[3].to_string(),
                target: PortRef::new(normalize(&caps[4]), normalize(&caps[5])),
            };
        }

        // 4. Single-line parameter declaration
        if let Some(caps) = self.param_decl.captures(trimmed) {
            let module = normalize(&caps[1]);
            return match caps.get(2) {
                Some(list) => LineForm::Params {
                    module,
                    params: split_params(list.as_str()),
                },
                None => LineForm::ParamHeader { module },
            };
        }

        // 5. Parameter continuation. The raw line is inspected: the
        // form is keyed on characters, not position. A line with `=`
        // but no ` = ` separator carries no extractable pair and falls
        // through.
        if line.contains('|') && !line.contains('*') && line.contains(" = ") {
            if let Some((name_part, value)) = line.split_once(" = ") {
                let name = name_part.trim();
                let name = name.strip_prefix('|').unwrap_or(name);
                return LineForm::ParamLine {
                    name: normalize(name),
                    value: value.trim().to_string(),
                };
            }
        }

        // 6. Nothing matched
        LineForm::Unrecognized
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower-case and trim a module, port or parameter name.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Split a `name = value | name = value` list into pairs.
/// Segments without a ` = ` separator are dropped.
fn split_params(list: &str) -> Vec<(String, String)> {
    list.split(" | ")
        .filter_map(|segment| {
            segment
                .split_once(" = ")
                .map(|(name, value)| (normalize(name), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn classify(line: &str) -> LineForm {
        LineClassifier::new().classify(line)
    }

    #[test]
    fn test_comment() {
        assert_eq!(
            classify("// Lead patch"),
            LineForm::Comment {
                text: "Lead patch".to_string()
            }
        );
    }

    #[test]
    fn test_comment_without_space() {
        assert_eq!(
            classify("//tight"),
            LineForm::Comment {
                text: "tight".to_string()
            }
        );
    }

    #[test]
    fn test_empty_comment_is_unrecognized() {
        assert_eq!(classify("//"), LineForm::Unrecognized);
        assert_eq!(classify("//   "), LineForm::Unrecognized);
    }

    #[test]
    fn test_voice_label_uppercased() {
        assert_eq!(
            classify("voice 1:"),
            LineForm::Voice {
                label: "VOICE 1".to_string()
            }
        );
    }

    #[test]
    fn test_voice_priority_over_parameter_shapes() {
        // Looks loosely like a malformed parameter line, but the label
        // form wins by priority.
        assert_eq!(
            classify("voice:"),
            LineForm::Voice {
                label: "VOICE".to_string()
            }
        );
    }

    #[rstest]
    #[case("* filter1:")] // parameter declaration, not a voice
    #[case("- osc1(out) -> filter1(in)")] // connection, not a voice
    fn test_voice_exclusion_characters(#[case] line: &str) {
        assert!(!matches!(classify(line), LineForm::Voice { .. }));
    }

    #[test]
    fn test_connection() {
        assert_eq!(
            classify("- osc1(out) -> filter1(in)"),
            LineForm::Connection {
                source: PortRef::new("osc1", "out"),
                operator: "->".to_string(),
                target: PortRef::new("filter1", "in"),
            }
        );
    }

    #[test]
    fn test_connection_indented_and_mixed_case() {
        assert_eq!(
            classify("  - Osc1(Out) >> Filter1(Cutoff)"),
            LineForm::Connection {
                source: PortRef::new("osc1", "out"),
                operator: ">>".to_string(),
                target: PortRef::new("filter1", "cutoff"),
            }
        );
    }

    #[test]
    fn test_connection_with_annotation() {
        // The bracket group is recognized and discarded.
        assert_eq!(
            classify("- lfo1(out) >> vca1(cv) [slow sweep]"),
            LineForm::Connection {
                source: PortRef::new("lfo1", "out"),
                operator: ">>".to_string(),
                target: PortRef::new("vca1", "cv"),
            }
        );
    }

    #[rstest]
    #[case("p>")]
    #[case("g>")]
    #[case("t>")]
    #[case("c>")]
    #[case("z>")] // unknown operators still classify as connections
    fn test_connection_operator_tokens(#[case] op: &str) {
        let line = format!("- a(x) {op} b(y)");
        match classify(&line) {
            LineForm::Connection { operator, .. } => assert_eq!(operator, op),
            other => panic!("expected connection, got {other:?}"),
        }
    }

    #[test]
    fn test_param_header_sets_no_values() {
        assert_eq!(
            classify("* Filter1:"),
            LineForm::ParamHeader {
                module: "filter1".to_string()
            }
        );
    }

    #[test]
    fn test_param_list() {
        assert_eq!(
            classify("* filter1: cutoff = 800 | resonance = 0.5"),
            LineForm::Params {
                module: "filter1".to_string(),
                params: vec![
                    ("cutoff".to_string(), "800".to_string()),
                    ("resonance".to_string(), "0.5".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_param_list_drops_segment_without_separator() {
        assert_eq!(
            classify("* filter1: cutoff = 800 | resonance"),
            LineForm::Params {
                module: "filter1".to_string(),
                params: vec![("cutoff".to_string(), "800".to_string())],
            }
        );
    }

    #[test]
    fn test_param_continuation() {
        assert_eq!(
            classify("| cutoff = 800"),
            LineForm::ParamLine {
                name: "cutoff".to_string(),
                value: "800".to_string(),
            }
        );
    }

    #[test]
    fn test_continuation_never_matches_declaration_lines() {
        // '*' on the line excludes the continuation form even though
        // '|' and ' = ' are both present.
        assert!(matches!(
            classify("* m: a = 1 | b = 2"),
            LineForm::Params { .. }
        ));
    }

    #[test]
    fn test_continuation_requires_pair_separator() {
        assert_eq!(classify("|cutoff=800"), LineForm::Unrecognized);
    }

    #[rstest]
    #[case("")]
    #[case("garbage line with no structure")]
    #[case("- broken(out) => other(in)")] // '=>' is not an operator shape
    #[case("-> osc1(out)")]
    fn test_unrecognized(#[case] line: &str) {
        assert_eq!(classify(line), LineForm::Unrecognized);
    }
}
