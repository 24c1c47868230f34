// ABOUTME: Extraction of environment variable names and values from shell scripts
// ABOUTME: Sources the script in a child bash session instead of parsing shell syntax

use std::collections::HashMap;
use std::path::Path;

use shellvars_logging::{debug, instrument};

use crate::error::{Result, ShellVarsError};
use crate::shell::{run_bash, shell_escape};

/// Variable names injected by the shell and subprocess machinery itself,
/// filtered out of enumeration results by default.
pub const DEFAULT_IGNORE: [&str; 3] = ["SHLVL", "PWD", "_"];

/// awk pipeline printing the name of every variable exported in the session.
/// `env` fragments multiline values across output lines, so each candidate
/// name is re-checked against the live environment instead of trusting the
/// dump; lines that merely look like assignments inside a value drop out.
const LIST_NAMES_PIPELINE: &str =
    r#"env | awk -F = '/[a-zA-Z_][a-zA-Z_0-9]*=/ { if (!system("[ -n \"${" $1 "}\" ]")) print $1 }'"#;

/// List the names of the environment variables a script exports.
///
/// The script is executed, so beware if it contains side effects.
pub fn list_vars(script: &Path) -> Result<Vec<String>> {
    list_vars_with_ignore(script, &DEFAULT_IGNORE)
}

/// List exported variable names, excluding the given names.
///
/// The script is sourced in a bash session with an emptied inherited
/// environment, so every non-artifact name present afterwards was introduced
/// by the script itself.
#[instrument(skip(ignore), fields(script = %script.display()))]
pub fn list_vars_with_ignore(script: &Path, ignore: &[&str]) -> Result<Vec<String>> {
    ensure_script_exists(script)?;

    let input = format!(
        ". {}; {}",
        shell_escape(&script.to_string_lossy()),
        LIST_NAMES_PIPELINE
    );
    let stdout = run_bash(script, &input, true)?;

    let text = String::from_utf8_lossy(&stdout);
    let mut names: Vec<String> = Vec::new();
    for name in text.split_whitespace() {
        if ignore.contains(&name) || names.iter().any(|seen| seen == name) {
            continue;
        }
        names.push(name.to_string());
    }

    debug!(count = names.len(), "Enumerated script variables");
    Ok(names)
}

/// Get the value of a single variable as defined after sourcing the script.
///
/// The value is captured verbatim, embedded newlines included, with no
/// trailing newline added. The name is not validated; a malformed name is
/// the caller's responsibility.
#[instrument(fields(script = %script.display()))]
pub fn get_var(script: &Path, var: &str) -> Result<String> {
    ensure_script_exists(script)?;

    // Inherited environment here, unlike enumeration; the cleared session is
    // only needed for the name filter
    let input = format!(
        ". {}\necho -n \"${{{}}}\"\n",
        shell_escape(&script.to_string_lossy()),
        var
    );
    let stdout = run_bash(script, &input, false)?;

    Ok(String::from_utf8_lossy(&stdout).into_owned())
}

/// Get every non-ignored exported variable name mapped to its value.
///
/// The script is re-executed once per variable so that multiline values are
/// captured in isolation; N variables cost N+1 executions.
pub fn get_vars(script: &Path) -> Result<HashMap<String, String>> {
    get_vars_with_ignore(script, &DEFAULT_IGNORE)
}

/// Get the name-to-value mapping, excluding the given names.
pub fn get_vars_with_ignore(script: &Path, ignore: &[&str]) -> Result<HashMap<String, String>> {
    let mut vars = HashMap::new();
    for name in list_vars_with_ignore(script, ignore)? {
        let value = get_var(script, &name)?;
        vars.insert(name, value);
    }
    Ok(vars)
}

fn ensure_script_exists(script: &Path) -> Result<()> {
    if script.is_file() {
        Ok(())
    } else {
        Err(ShellVarsError::ScriptNotFound {
            path: script.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignore_names() {
        assert_eq!(DEFAULT_IGNORE, ["SHLVL", "PWD", "_"]);
    }

    #[test]
    fn test_missing_script_fails_before_spawn() {
        let script = Path::new("/no/such/script.sh");

        for result in [
            list_vars(script).map(|_| ()),
            get_var(script, "VAR1").map(|_| ()),
            get_vars(script).map(|_| ()),
        ] {
            match result.unwrap_err() {
                ShellVarsError::ScriptNotFound { path } => assert_eq!(path, script),
                other => panic!("expected ScriptNotFound, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_list_pipeline_checks_names_not_values() {
        // The pipeline re-tests each candidate name in the live environment
        assert!(LIST_NAMES_PIPELINE.starts_with("env | awk"));
        assert!(LIST_NAMES_PIPELINE.contains(r#"[ -n \"${"#));
    }
}
