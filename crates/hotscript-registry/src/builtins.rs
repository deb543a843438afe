//! The built-in property surface.
//!
//! | Property | Access |
//! |---|---|
//! | `ErrorLevel` | read/write |
//! | `A_WorkingDir` | read/write, must name an existing directory |
//! | `A_TitleMatchMode` | read/write, `1`, `2`, `3`, `RegEx` (also accepts `Slow`/`Fast`) |
//! | `A_TitleMatchModeSpeed` | read/write, `Slow` or `Fast` |
//! | `A_ScriptName` | read-only |
//! | `A_TickCount` | read-only |

use std::path::PathBuf;

use hotscript_core::convert::force_string;
use hotscript_core::{Environment, NativeError, TitleMatchMode, Value};

use crate::{PropertyDescriptor, PropertyRegistry};

/// Register every built-in property.
///
/// The built-in names are distinct, so registration into an empty registry
/// cannot fail; names already taken by the caller are left alone.
pub fn register_all(registry: &mut PropertyRegistry) {
    for descriptor in all() {
        if let Err(err) = registry.register(descriptor) {
            tracing::warn!(%err, "skipping built-in property");
        }
    }
}

/// All built-in descriptors.
pub fn all() -> Vec<PropertyDescriptor> {
    vec![
        error_level(),
        working_dir(),
        title_match_mode(),
        title_match_mode_speed(),
        script_name(),
        tick_count(),
    ]
}

fn error_level() -> PropertyDescriptor {
    PropertyDescriptor::new("ErrorLevel")
        .with_getter(|env| env.error_level.clone())
        .with_setter(|env, value| {
            env.error_level = value;
            Ok(())
        })
}

fn working_dir() -> PropertyDescriptor {
    PropertyDescriptor::new("A_WorkingDir")
        .with_getter(|env| Value::String(env.working_dir.display().to_string()))
        .with_setter(|env, value| {
            let path = PathBuf::from(force_string(&value));
            if !path.is_dir() {
                return Err(NativeError::InvalidValue {
                    property: "A_WorkingDir".to_string(),
                    message: format!("'{}' is not a directory", path.display()),
                });
            }
            env.working_dir = path;
            Ok(())
        })
}

fn set_speed(env: &mut Environment, text: &str) -> bool {
    if text.eq_ignore_ascii_case("slow") {
        env.title_match_slow = true;
    } else if text.eq_ignore_ascii_case("fast") {
        env.title_match_slow = false;
    } else {
        return false;
    }
    true
}

fn title_match_mode() -> PropertyDescriptor {
    PropertyDescriptor::new("A_TitleMatchMode")
        .with_getter(|env| Value::from(env.title_match_mode.as_str()))
        .with_setter(|env, value| {
            let text = force_string(&value);
            if set_speed(env, text.trim()) {
                return Ok(());
            }
            match TitleMatchMode::parse(&text) {
                Some(mode) => {
                    env.title_match_mode = mode;
                    Ok(())
                }
                None => Err(NativeError::InvalidValue {
                    property: "A_TitleMatchMode".to_string(),
                    message: format!("unknown mode '{}'", text),
                }),
            }
        })
}

fn title_match_mode_speed() -> PropertyDescriptor {
    PropertyDescriptor::new("A_TitleMatchModeSpeed")
        .with_getter(|env| Value::from(if env.title_match_slow { "Slow" } else { "Fast" }))
        .with_setter(|env, value| {
            let text = force_string(&value);
            if set_speed(env, text.trim()) {
                Ok(())
            } else {
                Err(NativeError::InvalidValue {
                    property: "A_TitleMatchModeSpeed".to_string(),
                    message: format!("expected Slow or Fast, got '{}'", text),
                })
            }
        })
}

fn script_name() -> PropertyDescriptor {
    PropertyDescriptor::new("A_ScriptName").with_getter(|env| Value::String(env.script_name.clone()))
}

fn tick_count() -> PropertyDescriptor {
    PropertyDescriptor::new("A_TickCount").with_getter(|env| Value::Long(env.tick_count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> PropertyDescriptor {
        all()
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap_or_else(|| panic!("no built-in {name}"))
    }

    #[test]
    fn error_level_round_trip() {
        let prop = lookup("ErrorLevel");
        let mut env = Environment::default();
        prop.set(&mut env, Value::Int(2).boxed()).unwrap();
        assert_eq!(prop.get(&env), Some(Value::Int(2).boxed()));
    }

    #[test]
    fn working_dir_rejects_missing_directory() {
        let prop = lookup("A_WorkingDir");
        let mut env = Environment::default();
        let before = env.working_dir.clone();

        let err = prop
            .set(&mut env, Value::from("/definitely/not/a/real/dir"))
            .unwrap_err();
        assert!(matches!(err, NativeError::InvalidValue { .. }));
        assert_eq!(env.working_dir, before);

        let tmp = std::env::temp_dir();
        prop.set(&mut env, Value::String(tmp.display().to_string()))
            .unwrap();
        assert_eq!(env.working_dir, tmp);
    }

    #[test]
    fn title_match_mode_accepts_modes_and_speeds() {
        let prop = lookup("A_TitleMatchMode");
        let mut env = Environment::default();

        prop.set(&mut env, Value::Int(3).boxed()).unwrap();
        assert_eq!(env.title_match_mode, TitleMatchMode::Exact);

        prop.set(&mut env, Value::from("Slow")).unwrap();
        assert!(env.title_match_slow);
        assert_eq!(env.title_match_mode, TitleMatchMode::Exact);

        assert!(prop.set(&mut env, Value::from("sideways")).is_err());
        assert_eq!(prop.get(&env), Some(Value::from("3")));
    }

    #[test]
    fn read_only_properties_have_no_setter() {
        assert!(!lookup("A_ScriptName").has_setter());
        assert!(!lookup("A_TickCount").has_setter());

        let env = Environment::new("main.ahk");
        assert_eq!(lookup("A_ScriptName").get(&env), Some(Value::from("main.ahk")));
    }
}
