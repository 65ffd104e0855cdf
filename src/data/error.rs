#[derive(Debug)]
pub enum ConversionError {
    BadString(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadString(s) => write!(f, "Could not convert string {s} to a page identifier!"),
        }
    }
}

impl std::error::Error for ConversionError {}

#[derive(Debug)]
pub enum RegistryError {
    BadIO(std::io::Error),
    FailedParse(serde_json::Error),
    BadPageName(ConversionError),
    DuplicateRecord(String),
    NonFiniteValue(String, String),
    ProbabilityOutOfRange(String, f64),
}

impl From<std::io::Error> for RegistryError {
    fn from(value: std::io::Error) -> Self {
        Self::BadIO(value)
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(value: serde_json::Error) -> Self {
        Self::FailedParse(value)
    }
}

impl From<ConversionError> for RegistryError {
    fn from(value: ConversionError) -> Self {
        Self::BadPageName(value)
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadIO(e) => write!(f, "Registry failed IO: {e}"),
            Self::FailedParse(e) => write!(f, "Registry failed to parse a snapshot: {e}"),
            Self::BadPageName(e) => write!(f, "Registry was given a bad page name: {e}"),
            Self::DuplicateRecord(id) => {
                write!(f, "Snapshot record {id} was registered twice!")
            }
            Self::NonFiniteValue(id, field) => {
                write!(f, "Snapshot record {id} has a non-finite value for {field}!")
            }
            Self::ProbabilityOutOfRange(id, value) => {
                write!(f, "Snapshot record {id} has probability {value} outside 0-100!")
            }
        }
    }
}

impl std::error::Error for RegistryError {}
