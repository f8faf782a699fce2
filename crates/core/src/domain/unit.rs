// Processing Unit identity and Computer lifecycle

/// Concrete processing unit variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Intel,
    Amd,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Intel => write!(f, "INTEL"),
            UnitKind::Amd => write!(f, "AMD"),
        }
    }
}

/// Computer lifecycle (Started is terminal, no shutdown transition)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    NotStarted,
    Started,
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerState::NotStarted => write!(f, "NOT_STARTED"),
            PowerState::Started => write!(f, "STARTED"),
        }
    }
}
