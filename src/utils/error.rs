use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate interest area id: {id}")]
    DuplicateAreaError { id: String },

    #[error("Duplicate program id: {id}")]
    DuplicateProgramError { id: String },

    #[error("Program '{program}' references unknown interest area '{area}'")]
    UnknownAreaError { program: String, area: String },

    #[error("{registry} is empty but {limit} recommendation(s) were requested")]
    EmptyRegistryError { registry: String, limit: usize },

    #[error("Invalid {registry} entry '{id}': {reason}")]
    InvalidRegistryEntryError {
        registry: String,
        id: String,
        reason: String,
    },

    #[error("Assessment recording failed: {message}")]
    RecorderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Registry,
    Input,
    Storage,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EngineError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EngineError::ConfigValidationError { .. }
            | EngineError::InvalidConfigValueError { .. }
            | EngineError::MissingConfigError { .. } => ErrorCategory::Configuration,
            EngineError::DuplicateAreaError { .. }
            | EngineError::DuplicateProgramError { .. }
            | EngineError::UnknownAreaError { .. }
            | EngineError::EmptyRegistryError { .. }
            | EngineError::InvalidRegistryEntryError { .. } => ErrorCategory::Registry,
            EngineError::SerializationError(_) | EngineError::CsvError(_) => ErrorCategory::Input,
            EngineError::IoError(_) | EngineError::RecorderError { .. } => ErrorCategory::Storage,
            EngineError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Storage => match self {
                // 稽核紀錄失敗不影響推薦結果
                EngineError::RecorderError { .. } => ErrorSeverity::Low,
                _ => ErrorSeverity::Medium,
            },
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Registry | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EngineError::IoError(_) => {
                "Check that the file exists and the process can read/write it".to_string()
            }
            EngineError::SerializationError(_) => {
                "Answers must be a JSON object mapping question ids to text".to_string()
            }
            EngineError::CsvError(_) => "Retry with --format json or --format text".to_string(),
            EngineError::PatternError(_) => {
                "This is a bug in the affiliation pattern; please report it".to_string()
            }
            EngineError::ConfigValidationError { field, .. } => {
                format!("Fix the TOML syntax around '{}'", field)
            }
            EngineError::InvalidConfigValueError { field, .. } => {
                format!("Adjust '{}' in the configuration file", field)
            }
            EngineError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            EngineError::DuplicateAreaError { .. } | EngineError::DuplicateProgramError { .. } => {
                "Give every area and program a unique id in the data file".to_string()
            }
            EngineError::UnknownAreaError { area, .. } => {
                format!("Declare area '{}' under [[areas]] or remove the tag", area)
            }
            EngineError::EmptyRegistryError { registry, .. } => {
                format!("Add at least one entry to the {}", registry)
            }
            EngineError::InvalidRegistryEntryError { id, .. } => {
                format!("Correct entry '{}' in the data file", id)
            }
            EngineError::RecorderError { .. } => {
                "Check the [audit] path; recommendations were still produced".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Registry => format!("Catalog data is invalid: {}", self),
            ErrorCategory::Input => format!("Could not read the answers: {}", self),
            ErrorCategory::Storage => format!("File access failed: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
