//! Non-fatal extraction warnings
//!
//! Anything skipped, defaulted or clamped is recorded here so the operator
//! can audit the run without losing the rest of the extraction.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The mod root has no `AdditionalEngramBlueprintClasses` property at all
    EngramListMissing { mod_root: String },

    /// A declared engram class does not resolve (deleted or null)
    DanglingReference { reference: String },

    /// An engram could not be resolved and was left out entirely
    EngramDropped { engram: String, reason: String },

    /// Two engrams resolved to the same item class path; the later one was dropped
    DuplicateEngram { engram: String, path: String },

    /// A property was absent, so its documented default was used
    DefaultedField {
        path: String,
        field: &'static str,
        default: String,
    },

    /// A property was present but unusable (wrong type or out of range)
    InvalidField {
        path: String,
        field: &'static str,
        reason: String,
        used: String,
    },

    /// A recipe entry was dropped
    MalformedRecipeEntry {
        path: String,
        index: usize,
        reason: String,
    },

    /// A recipe item lives outside the snapshot; its display name is a guess
    UnresolvedRecipeItem { path: String, item: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EngramListMissing { mod_root } => write!(
                f,
                "{}: no AdditionalEngramBlueprintClasses property, nothing to extract",
                mod_root
            ),
            Warning::DanglingReference { reference } => {
                write!(f, "{}: engram class reference does not resolve, skipped", reference)
            }
            Warning::EngramDropped { engram, reason } => {
                write!(f, "{}: engram dropped ({})", engram, reason)
            }
            Warning::DuplicateEngram { engram, path } => write!(
                f,
                "{}: resolves to {} which was already extracted, skipped",
                engram, path
            ),
            Warning::DefaultedField {
                path,
                field,
                default,
            } => write!(f, "{}: {} is absent, using default {}", path, field, default),
            Warning::InvalidField {
                path,
                field,
                reason,
                used,
            } => write!(f, "{}: {} {}, using {}", path, field, reason, used),
            Warning::MalformedRecipeEntry {
                path,
                index,
                reason,
            } => write!(
                f,
                "{}: MalformedRecipeEntry at recipe index {} ({}), entry dropped",
                path, index, reason
            ),
            Warning::UnresolvedRecipeItem { path, item } => write!(
                f,
                "{}: recipe item {} is not in the snapshot, using its object name",
                path, item
            ),
        }
    }
}

/// Ordered warning accumulator
#[derive(Debug, Default)]
pub struct Warnings(Vec<Warning>);

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. The run summary reports it; the log only at debug level
    pub fn push(&mut self, warning: Warning) {
        tracing::debug!("{}", warning);
        self.0.push(warning);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Warning> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_defaulted_field_names_field_and_path() {
        let w = Warning::DefaultedField {
            path: "/MyMod/Items/PrimalItem_Foo.PrimalItem_Foo".into(),
            field: "RequiredCharacterLevel",
            default: "0".into(),
        };
        let text = w.to_string();
        assert!(text.contains("RequiredCharacterLevel"));
        assert!(text.contains("/MyMod/Items/PrimalItem_Foo.PrimalItem_Foo"));
    }

    #[test]
    fn test_warnings_keep_order() {
        let mut warnings = Warnings::new();
        warnings.push(Warning::DanglingReference { reference: "a".into() });
        warnings.push(Warning::DanglingReference { reference: "b".into() });
        let all = warnings.into_vec();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], Warning::DanglingReference { reference: "a".into() });
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_at(level: tracing::Level) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut warnings = Warnings::new();
            warnings.push(Warning::DanglingReference { reference: "a".into() });
        });
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_push_is_quiet_at_default_verbosity() {
        assert!(logged_at(tracing::Level::WARN).is_empty());
        assert!(logged_at(tracing::Level::DEBUG).contains("a: engram class reference does not resolve"));
    }
}
