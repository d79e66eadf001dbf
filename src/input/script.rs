use thiserror::Error;

/// One line of a session script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { field: String, value: String },
    Submit,
    Delete(u64),
    Show,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing {arg} for `{command}`")]
    MissingArgument {
        command: &'static str,
        arg: &'static str,
    },
    #[error("invalid attempt id: {0}")]
    InvalidId(String),
    #[error("unexpected trailing input after `{0}`")]
    TrailingInput(&'static str),
}

/// Parses a script line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(None);
    };

    let command = match cmd {
        "set" => {
            let field = parts.next().ok_or(ScriptError::MissingArgument {
                command: "set",
                arg: "field",
            })?;
            // The value may be blank; that coerces to zero downstream.
            let value = parts.collect::<Vec<_>>().join(" ");
            SessionCommand::Set {
                field: field.to_string(),
                value,
            }
        }
        "submit" | "calculate" => {
            expect_end(parts, "submit")?;
            SessionCommand::Submit
        }
        "delete" => {
            let raw = parts.next().ok_or(ScriptError::MissingArgument {
                command: "delete",
                arg: "id",
            })?;
            let id = raw
                .parse::<u64>()
                .map_err(|_| ScriptError::InvalidId(raw.to_string()))?;
            expect_end(parts, "delete")?;
            SessionCommand::Delete(id)
        }
        "show" => {
            expect_end(parts, "show")?;
            SessionCommand::Show
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn expect_end<'a>(
    mut rest: impl Iterator<Item = &'a str>,
    command: &'static str,
) -> Result<(), ScriptError> {
    match rest.next() {
        Some(_) => Err(ScriptError::TrailingInput(command)),
        None => Ok(()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/script.rs"]
mod tests;
