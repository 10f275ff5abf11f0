//! Interactive terminal front end.
//!
//! Argument parsing and the line-oriented session loop that drives a
//! [`PayrollDesk`]: each command maps to one desk action, and attendance
//! inputs are prompted for one line at a time.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::desk::PayrollDesk;
use crate::error::PayrollError;
use crate::models::InputField;

/// Calculate salaries and keep an append-only payroll log.
#[derive(Parser, Debug, Clone)]
#[command(name = "payroll-desk")]
#[command(about = "Calculate salaries and keep an append-only payroll log", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "payroll.yaml")]
    pub config: PathBuf,

    /// Payroll log path, overriding the config file
    #[arg(short, long)]
    pub log: Option<PathBuf>,
}

/// A command typed at the desk prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `calc <id>`: calculate a salary.
    Calculate(String),
    /// `save`: append the displayed statement to the log.
    Save,
    /// `history`: display the whole log.
    History,
    /// `list`: list known employees.
    List,
    /// `help`: show the command summary.
    Help,
    /// `quit`: leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses a command line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let command = match word {
            "calc" | "calculate" => Command::Calculate(rest.trim().to_string()),
            "save" => Command::Save,
            "history" => Command::History,
            "list" => Command::List,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        };
        Some(command)
    }
}

const HELP: &str = "\
Commands:
  calc <id>   calculate the salary of an employee
  save        append the displayed statement to the payroll log
  history     show the payroll log
  list        list employees
  help        show this help
  quit        leave";

/// Runs the interactive session until `quit` or end of input.
pub fn run_session<R, W>(desk: &mut PayrollDesk, input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Payroll Management System (type 'help' for commands)")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            break;
        };
        let Some(command) = Command::parse(&line) else {
            continue;
        };

        match command {
            Command::Calculate(id_text) => {
                let mut prompt_error = None;
                let result = {
                    let mut prompt = |field: InputField| -> Option<String> {
                        match prompt_for(field, input, out) {
                            Ok(answer) => answer,
                            Err(error) => {
                                prompt_error.get_or_insert(error);
                                None
                            }
                        }
                    };
                    desk.calculate(&id_text, &mut prompt)
                };
                if let Some(error) = prompt_error {
                    return Err(error);
                }
                match result {
                    Ok(calculation) => writeln!(out, "{}", calculation.breakdown.trim_end())?,
                    Err(error) => writeln!(out, "{error}")?,
                }
            }
            Command::Save => match desk.save() {
                Ok(confirmation) => writeln!(out, "{confirmation}")?,
                Err(error) => writeln!(out, "{}", describe(&error, "Error saving data"))?,
            },
            Command::History => match desk.show_history() {
                Ok(history) => write!(out, "{history}")?,
                Err(error) => writeln!(
                    out,
                    "{}",
                    describe(&error, "Error reading payroll history")
                )?,
            },
            Command::List => {
                if desk.directory().is_empty() {
                    writeln!(out, "No employees loaded.")?;
                }
                for employee in desk.directory().iter() {
                    writeln!(
                        out,
                        "{}: {} ({})",
                        employee.id,
                        employee.name,
                        employee.compensation.name()
                    )?;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command '{word}'. Type 'help' for commands.")?
            }
        }
    }

    Ok(())
}

/// Shows the prompt for `field` and reads the answer.
fn prompt_for<R, W>(field: InputField, input: &mut R, out: &mut W) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{} ", field.prompt())?;
    out.flush()?;
    read_line(input)
}

/// Reads one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn describe(error: &PayrollError, context: &str) -> String {
    match error {
        PayrollError::Io { message, .. } => format!("{context}: {message}"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::EmployeeDirectory;
    use crate::models::{Compensation, Employee};
    use crate::payroll_log::PayrollLog;
    use rust_decimal::Decimal;
    use std::io::{BufReader, Cursor, Read};
    use tempfile::TempDir;

    fn run(dir: &TempDir, script: &str) -> String {
        let directory = EmployeeDirectory::from_employees([Employee::new(
            1,
            "Ana Reyes",
            30,
            Compensation::FullTime {
                daily_rate: Decimal::from(500),
            },
        )])
        .unwrap();
        let mut desk = PayrollDesk::new(directory, PayrollLog::new(dir.path().join("payroll.txt")));
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();

        run_session(&mut desk, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["payroll-desk"]);
        assert_eq!(args.config, PathBuf::from("payroll.yaml"));
        assert!(args.log.is_none());
    }

    #[test]
    fn test_args_custom_paths() {
        let args = Args::parse_from(["payroll-desk", "-c", "/etc/desk.yaml", "--log", "out.txt"]);
        assert_eq!(args.config, PathBuf::from("/etc/desk.yaml"));
        assert_eq!(args.log, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(
            Command::parse("calc 12"),
            Some(Command::Calculate("12".to_string()))
        );
        assert_eq!(Command::parse("calc"), Some(Command::Calculate(String::new())));
        assert_eq!(Command::parse("  history "), Some(Command::History));
        assert_eq!(Command::parse(""), None);
        assert_eq!(
            Command::parse("pay 1"),
            Some(Command::Unknown("pay".to_string()))
        );
    }

    #[test]
    fn test_session_calculate_and_save() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "calc 1\n22\n2\nsave\nquit\n");

        assert!(out.contains("Enter Days Present: "));
        assert!(out.contains("Enter Days Absent: "));
        assert!(out.contains("Salary Calculation: 500 * (22 - 2) = 10000"));
        assert!(out.contains("Payroll data saved to "));

        let log = std::fs::read_to_string(dir.path().join("payroll.txt")).unwrap();
        assert!(log.contains("Total Salary: 10000\n"));
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "calc 9\nhistory\ncalc 1\nabc\nlist\n");

        assert!(out.contains("Employee not found."));
        assert!(out.contains("Error reading payroll history: "));
        assert!(out.contains("Invalid Days Present. Please enter a numeric value."));
        assert!(!out.contains("Enter Days Absent:"));
        assert!(out.contains("1: Ana Reyes (Full-Time)"));
    }

    /// Serves `script`, then fails every read.
    struct FailingReader {
        script: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.script.read(buf)? {
                0 => Err(io::Error::other("terminal detached")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_session_read_error_during_prompt_is_returned() {
        let dir = TempDir::new().unwrap();
        let directory = EmployeeDirectory::from_employees([Employee::new(
            1,
            "Ana Reyes",
            30,
            Compensation::FullTime {
                daily_rate: Decimal::from(500),
            },
        )])
        .unwrap();
        let mut desk = PayrollDesk::new(directory, PayrollLog::new(dir.path().join("payroll.txt")));
        let mut input = BufReader::new(FailingReader {
            script: Cursor::new(b"calc 1\n".to_vec()),
        });
        let mut out = Vec::new();

        let error = run_session(&mut desk, &mut input, &mut out).unwrap_err();

        assert_eq!(error.to_string(), "terminal detached");
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Enter Days Present: "));
        assert!(!out.contains("Days Present is required."));
    }

    #[test]
    fn test_session_input_ends_mid_prompt() {
        let dir = TempDir::new().unwrap();
        let out = run(&dir, "calc 1\n");

        assert!(out.contains("Days Present is required."));
    }
}
