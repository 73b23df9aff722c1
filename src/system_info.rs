//! Read-only host facts reported by the `os` command.

use crate::errors::{ShellError, ShellResult};
use std::str::FromStr;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Line terminator used by the host platform
#[cfg(windows)]
pub const EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const EOL: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsQuery {
    Eol,
    Cpus,
    HomeDir,
    Username,
    Architecture,
}

impl OsQuery {
    pub const FLAGS: [&'static str; 5] = [
        "--EOL",
        "--cpus",
        "--homedir",
        "--username",
        "--architecture",
    ];
}

impl FromStr for OsQuery {
    type Err = ShellError;

    fn from_str(s: &str) -> ShellResult<Self> {
        match s {
            "--EOL" => Ok(OsQuery::Eol),
            "--cpus" => Ok(OsQuery::Cpus),
            "--homedir" => Ok(OsQuery::HomeDir),
            "--username" => Ok(OsQuery::Username),
            "--architecture" => Ok(OsQuery::Architecture),
            _ => Err(ShellError::InvalidInput),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CpuInfo {
    pub model: String,
    pub speed_mhz: u64,
}

pub fn cpus() -> Vec<CpuInfo> {
    let sys =
        System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::everything()));
    sys.cpus()
        .iter()
        .map(|cpu| CpuInfo {
            model: cpu.brand().trim().to_string(),
            speed_mhz: cpu.frequency(),
        })
        .collect()
}

pub fn home_dir() -> String {
    dirs::home_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

pub fn username() -> String {
    whoami::username()
}

pub fn architecture() -> &'static str {
    std::env::consts::ARCH
}

/// Answer a query as the lines to print
pub fn report(query: OsQuery) -> Vec<String> {
    match query {
        OsQuery::Eol => vec![format!("{:?}", EOL)],
        OsQuery::Cpus => {
            let cpus = cpus();
            let mut lines = Vec::with_capacity(cpus.len() + 1);
            lines.push(format!("Total CPUs: {}", cpus.len()));
            lines.extend(cpus.iter().enumerate().map(|(i, cpu)| {
                format!("{}: {} @ {} MHz", i, cpu.model, cpu.speed_mhz)
            }));
            lines
        }
        OsQuery::HomeDir => vec![home_dir()],
        OsQuery::Username => vec![username()],
        OsQuery::Architecture => vec![architecture().to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_flag() {
        for flag in OsQuery::FLAGS {
            assert!(flag.parse::<OsQuery>().is_ok(), "{flag}");
        }
    }

    #[test]
    fn unknown_flag_is_invalid_input() {
        assert!(matches!(
            "--kernel".parse::<OsQuery>(),
            Err(ShellError::InvalidInput)
        ));
        assert!("--eol".parse::<OsQuery>().is_err());
    }

    #[test]
    fn eol_is_printed_escaped() {
        let lines = report(OsQuery::Eol);
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].contains('\n'));
    }

    #[test]
    fn cpu_report_starts_with_count() {
        let lines = report(OsQuery::Cpus);
        assert_eq!(lines[0], format!("Total CPUs: {}", lines.len() - 1));
    }

    #[test]
    fn architecture_matches_build_target() {
        assert_eq!(report(OsQuery::Architecture), vec![std::env::consts::ARCH]);
    }
}
