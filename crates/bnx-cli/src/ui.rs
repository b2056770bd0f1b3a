//! Terminal presentation choices, settled once at startup.
//!
//! [`resolve`] is a pure function of the global flags and a [`Terminal`]
//! snapshot; [`init`] takes the snapshot from the real process.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

/// Narrower `COLUMNS` values are ignored.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

/// What the process knows about its terminal.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub no_color: bool,
    pub columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

/// Decide colours, spinner and width for `flags` on `terminal`.
///
/// Colour only ever applies to table output. The spinner draws on stderr,
/// so it follows stderr's tty even when stdout is piped. `--quiet` turns
/// both off unless colour is forced with `--color always`.
#[must_use]
pub fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> UiPrefs {
    let table = flags.format == OutputFormat::Table;
    let table_color = table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.stdout_tty && !flags.quiet && !terminal.no_color,
        };

    let progress = !flags.quiet
        && match flags.progress {
            ProgressMode::On => true,
            ProgressMode::Off => false,
            ProgressMode::Auto => terminal.stderr_tty,
        };

    let term_width = terminal
        .columns
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = resolve(flags, &Terminal::detect());
    tracing::debug!(?prefs, "ui preferences");
    let _ = UI_PREFS.set(prefs);
}

/// Preferences set by [`init`], or everything off before that.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn flags(format: OutputFormat, color: ColorMode, progress: ProgressMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
            progress,
        }
    }

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            stderr_tty: true,
            no_color: false,
            columns: None,
        }
    }

    #[rstest]
    #[case(OutputFormat::Table, ColorMode::Auto, true)]
    #[case(OutputFormat::Table, ColorMode::Never, false)]
    #[case(OutputFormat::Json, ColorMode::Always, false)]
    #[case(OutputFormat::Raw, ColorMode::Auto, false)]
    fn colour_applies_to_tables_only(
        #[case] format: OutputFormat,
        #[case] color: ColorMode,
        #[case] expected: bool,
    ) {
        let prefs = resolve(&flags(format, color, ProgressMode::Auto), &tty());
        assert_eq!(prefs.table_color, expected);
    }

    #[test]
    fn auto_colour_respects_no_color_and_pipes() {
        let flags = flags(OutputFormat::Table, ColorMode::Auto, ProgressMode::Auto);
        let no_color = Terminal {
            no_color: true,
            ..tty()
        };
        assert!(!resolve(&flags, &no_color).table_color);

        let piped = Terminal {
            stdout_tty: false,
            ..tty()
        };
        assert!(!resolve(&flags, &piped).table_color);
        assert!(resolve(&flags, &piped).progress, "spinner still on stderr");
    }

    #[test]
    fn quiet_disables_auto_colour_and_spinner_but_not_forced_colour() {
        let mut quiet = flags(OutputFormat::Table, ColorMode::Auto, ProgressMode::On);
        quiet.quiet = true;
        assert_eq!(resolve(&quiet, &tty()), UiPrefs::default());

        quiet.color = ColorMode::Always;
        assert!(resolve(&quiet, &tty()).table_color);
    }

    #[rstest]
    #[case(Some("120"), Some(120))]
    #[case(Some(" 80 "), Some(80))]
    #[case(Some("20"), None)]
    #[case(Some("wide"), None)]
    #[case(None, None)]
    fn width_comes_from_columns(#[case] columns: Option<&str>, #[case] expected: Option<usize>) {
        let terminal = Terminal {
            columns: columns.map(str::to_string),
            ..tty()
        };
        let flags = flags(OutputFormat::Json, ColorMode::Auto, ProgressMode::Off);
        assert_eq!(resolve(&flags, &terminal).term_width, expected);
    }
}
