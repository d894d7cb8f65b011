use std::fmt;
use std::str::FromStr;

/// Client the install command is written for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    #[default]
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Order the install tabs are shown in
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Pnpm,
        PackageManager::Npm,
        PackageManager::Yarn,
    ];

    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm => "add",
            PackageManager::Yarn => "add",
        }
    }

    pub fn install_command(&self, package: &str) -> String {
        format!("{} {} {package}", self.command(), self.add_subcommand())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            other => Err(format!("unknown package manager '{other}'")),
        }
    }
}

/// `"name": "version"`, ready to paste into a manifest's dependencies
pub fn manifest_dependency(package: &str, version: &str) -> String {
    format!("\"{package}\": \"{version}\"")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSnippet {
    pub command: String,
    pub dependency: String,
}

pub fn install_snippet(package: &str, version: &str, manager: PackageManager) -> InstallSnippet {
    InstallSnippet {
        command: manager.install_command(package),
        dependency: manifest_dependency(package, version),
    }
}
