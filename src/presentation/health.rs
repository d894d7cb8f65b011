use crate::models::RegistryStatus;

/// Navbar indicator. Anything short of a readable `ONLINE` status shows as
/// offline rather than failing the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistryHealth {
    #[default]
    Checking,
    Online,
    Offline,
}

impl RegistryHealth {
    pub fn from_status<E>(status: Result<RegistryStatus, E>) -> Self {
        match status {
            Ok(status) if status.status == "ONLINE" => RegistryHealth::Online,
            _ => RegistryHealth::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegistryHealth::Checking => "Checking...",
            RegistryHealth::Online => "Registry Online",
            RegistryHealth::Offline => "Registry Offline",
        }
    }
}
