// Prefix resolution for commands, phase names and task names

/// Names that start with `input`, ignoring case, in list order
pub fn prefix_matches<'a>(input: &str, names: &[&'a str]) -> Vec<&'a str> {
    let needle = input.to_lowercase();
    names.iter()
        .copied()
        .filter(|name| name.to_lowercase().starts_with(&needle))
        .collect()
}

/// Resolve `input` to one of `names`. A case-insensitive exact name wins
/// ("stats" is not ambiguous with "status"); otherwise the prefix must be
/// unique. Err carries every prefix match, empty when nothing matched.
pub fn resolve_name<'a>(input: &str, names: &[&'a str]) -> Result<&'a str, Vec<&'a str>> {
    let needle = input.to_lowercase();
    if let Some(&exact) = names.iter().find(|name| name.to_lowercase() == needle) {
        return Ok(exact);
    }

    let matches = prefix_matches(input, names);
    if let [only] = matches[..] {
        return Ok(only);
    }
    Err(matches)
}

/// Top-level commands
pub const TOP_LEVEL_COMMANDS: &[&str] = &[
    "phases", "show", "session", "export"
];

/// Commands accepted inside a session
pub const SESSION_COMMANDS: &[&str] = &[
    "phase", "tasks", "cycle", "status", "reset", "stats", "analytics", "info", "export", "help", "quit"
];

/// Expand an abbreviated top-level command (first argument only)
/// Returns expanded args or error message
pub fn expand_command_abbreviations(mut args: Vec<String>) -> Result<Vec<String>, String> {
    let Some(first) = args.first() else {
        return Ok(args);
    };

    if first.starts_with('-') {
        return Ok(args);
    }

    match resolve_name(first, TOP_LEVEL_COMMANDS) {
        Ok(full_cmd) => {
            args[0] = full_cmd.to_string();
            Ok(args)
        }
        // No match - let clap report it
        Err(matches) if matches.is_empty() => Ok(args),
        Err(matches) => Err(format!(
            "Ambiguous command '{}'. Did you mean one of: {}?",
            first,
            matches.join(", ")
        )),
    }
}
