/// One line typed at the shell prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login(String),
    Projects,
    Open(String),
    Show,
    Export(Option<String>),
    Back,
    Logout,
    Whoami,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Commandes:
  login <email>     se connecter
  projects          liste des projets
  open <id>         ouvrir le rapport d'un projet
  show              afficher le rapport ouvert
  export [dossier]  exporter le rapport ouvert en PDF
  back              retour au tableau de bord
  logout            déconnexion
  whoami            session courante
  help              cette aide
  quit              quitter";

/// Parse a prompt line. The command word is case-insensitive.
pub fn parse_line(line: &str) -> anyhow::Result<ShellCommand> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));

    let command = match word.to_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "login" => ShellCommand::Login(required(rest, "login <email>")?),
        "projects" => ShellCommand::Projects,
        "open" => ShellCommand::Open(required(rest, "open <id>")?),
        "show" => ShellCommand::Show,
        "export" => ShellCommand::Export((!rest.is_empty()).then(|| rest.to_string())),
        "back" => ShellCommand::Back,
        "logout" | "déconnexion" | "deconnexion" => ShellCommand::Logout,
        "whoami" => ShellCommand::Whoami,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => anyhow::bail!("unknown command '{other}' (try `help`)"),
    };
    Ok(command)
}

fn required(rest: &str, usage: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        anyhow::bail!("usage: {usage}");
    }
    Ok(rest.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ShellCommand, parse_line};

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            parse_line("login jane.doe@example.com").unwrap(),
            ShellCommand::Login("jane.doe@example.com".into())
        );
        assert_eq!(
            parse_line("  open   gen-001 ").unwrap(),
            ShellCommand::Open("gen-001".into())
        );
        assert_eq!(
            parse_line("export /tmp/rapports").unwrap(),
            ShellCommand::Export(Some("/tmp/rapports".into()))
        );
        assert_eq!(parse_line("export").unwrap(), ShellCommand::Export(None));
    }

    #[test]
    fn accepts_french_logout_and_any_case() {
        assert_eq!(parse_line("Déconnexion").unwrap(), ShellCommand::Logout);
        assert_eq!(parse_line("LOGOUT").unwrap(), ShellCommand::Logout);
        assert_eq!(parse_line("exit").unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn blank_line_is_empty() {
        assert_eq!(parse_line("   ").unwrap(), ShellCommand::Empty);
    }

    #[test]
    fn missing_argument_reports_usage() {
        let err = parse_line("login").expect_err("email required");
        assert_eq!(err.to_string(), "usage: login <email>");
        assert!(parse_line("open").is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = parse_line("delete gen-001").expect_err("unknown");
        assert!(err.to_string().contains("unknown command 'delete'"));
    }
}
