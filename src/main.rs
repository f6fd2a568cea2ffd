//! Command-line driver for keynav.
//!
//! Replays a keystroke script against a filter session built from an entry
//! snapshot and prints, for every keystroke, the router actions it produced and
//! the listing that results. Useful for checking how a snapshot navigates
//! without wiring up a UI.
//!
//! # Usage
//!
//! ```text
//! keynav [--config FILE] [--entries FILE] [--mount NAME] [KEYS...]
//! ```
//!
//! `KEYS` are typed in order. Literal text is typed one character at a time;
//! `<bs>` presses backspace and `<esc>` presses escape, e.g.
//!
//! ```text
//! keynav --entries secrets.json 'beep/boop/' '<bs>' '<esc>'
//! ```
//!
//! Each keystroke prints one JSON line:
//!
//! ```json
//! {"key":"<bs>","actions":[...],"directory":"beep/","page_filter":"boop","items":[...]}
//! ```

#![allow(clippy::multiple_crate_versions)]

use keynav::{handle_event, initialize, Config, Event, KeynavError, Result};
use std::process::ExitCode;

const USAGE: &str = "usage: keynav [--config FILE] [--entries FILE] [--mount NAME] [KEYS...]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config: Option<String>,
    entries: Option<String>,
    mount: Option<String>,
    keys: Vec<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keynav: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let cli = parse_args(args)?;

    let mut config = match &cli.config {
        Some(path) => Config::from_file(keynav::infrastructure::expand_tilde(path))?,
        None => Config::default(),
    };
    if let Some(entries) = cli.entries {
        config.entries_file = Some(entries);
    }
    if let Some(mount) = cli.mount {
        config.mount_point = mount;
    }

    keynav::observability::init_tracing(&config);

    let span = tracing::debug_span!("replay", mount_point = %config.mount_point);
    let _guard = span.entered();

    let mut session = initialize(&config)?;
    tracing::debug!(entries = session.entries().len(), "session ready");

    for event in cli.keys.iter().flat_map(|key| keystrokes(key)) {
        let (_, actions) = handle_event(&mut session, &event)?;

        let line = serde_json::json!({
            "key": key_label(&event),
            "actions": actions,
            "directory": session.current_directory(),
            "page_filter": session.page_filter(),
            "items": session.visible_items(),
        });
        println!("{line}");
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let slot = match arg.as_str() {
            "--config" => &mut cli.config,
            "--entries" => &mut cli.entries,
            "--mount" => &mut cli.mount,
            "--" => {
                cli.keys.extend(iter.by_ref().cloned());
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(KeynavError::Config(format!("unknown option {flag}\n{USAGE}")));
            }
            _ => {
                cli.keys.push(arg.clone());
                continue;
            }
        };

        let value = iter
            .next()
            .ok_or_else(|| KeynavError::Config(format!("{arg} requires a value\n{USAGE}")))?;
        *slot = Some(value.clone());
    }

    Ok(cli)
}

/// Splits one script argument into keystrokes.
fn keystrokes(script: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut rest = script;

    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("<bs>") {
            events.push(Event::Backspace);
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("<esc>") {
            events.push(Event::Escape);
            rest = tail;
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                events.push(Event::Char(c));
            }
            rest = chars.as_str();
        }
    }

    events
}

fn key_label(event: &Event) -> String {
    match event {
        Event::Char(c) => c.to_string(),
        Event::Backspace => "<bs>".to_string(),
        Event::Escape => "<esc>".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_options_and_keys() {
        let args = strings(&["--entries", "e.json", "beep/", "--mount", "secret", "<bs>"]);
        let cli = parse_args(&args).unwrap();
        assert_eq!(
            cli,
            CliArgs {
                config: None,
                entries: Some("e.json".to_string()),
                mount: Some("secret".to_string()),
                keys: strings(&["beep/", "<bs>"]),
            }
        );
    }

    #[test]
    fn double_dash_ends_options() {
        let cli = parse_args(&strings(&["--", "--mount"])).unwrap();
        assert_eq!(cli.keys, strings(&["--mount"]));
    }

    #[test]
    fn rejects_unknown_and_incomplete_options() {
        assert!(matches!(parse_args(&strings(&["--nope"])), Err(KeynavError::Config(_))));
        assert!(matches!(parse_args(&strings(&["--entries"])), Err(KeynavError::Config(_))));
    }

    #[test]
    fn keystrokes_recognize_special_keys() {
        assert_eq!(
            keystrokes("a/<bs><esc>b"),
            vec![
                Event::Char('a'),
                Event::Char('/'),
                Event::Backspace,
                Event::Escape,
                Event::Char('b'),
            ]
        );
        assert_eq!(keystrokes("<b"), vec![Event::Char('<'), Event::Char('b')]);
    }
}
