use thiserror::Error;

/// Main error type for the RotaForge system
#[derive(Error, Debug)]
pub enum RfError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Roster and input validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Skill '{skill}' has invalid cast time: {value}")]
    InvalidCastTime { skill: String, value: f64 },

    #[error("Skill '{skill}' has invalid cooldown: {value}")]
    InvalidCooldown { skill: String, value: f64 },

    #[error("Skill '{skill}' has invalid damage: {value}")]
    InvalidDamage { skill: String, value: f64 },

    #[error("Skill '{skill}' has no gear options")]
    EmptyGearOptions { skill: String },

    #[error("Skill '{skill}' has gear percent out of [0, 100): {value}")]
    GearPercentOutOfRange { skill: String, value: f64 },

    #[error("Duplicate skill name: '{skill}'")]
    DuplicateSkillName { skill: String },

    #[error("Invalid time limit: {value}")]
    InvalidTimeLimit { value: f64 },

    #[error("Gear assignment length mismatch: expected {expected}, got {actual}")]
    AssignmentLengthMismatch { expected: usize, actual: usize },
}

/// Errors found while replaying a rotation against roster timing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Cast #{position} names unknown skill '{skill}'")]
    UnknownSkill { position: usize, skill: String },

    #[error("Cast #{position} of '{skill}' ends at {cast_end}, past time limit {time_limit}")]
    CastPastTimeLimit {
        position: usize,
        skill: String,
        cast_end: f64,
        time_limit: f64,
    },
}

/// Result type alias for RotaForge operations
pub type RfResult<T> = Result<T, RfError>;

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::RfError::Config(format!($($arg)*))
    };
}
