#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl std::fmt::Display for GenericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// Specifies errors which can be produced by the colony engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColonyError {
    /// A coefficient or an input is outside of its valid domain. Detected before the run starts.
    Configuration(String),

    /// All candidate cities have zero or undefined desirability and the degenerate policy asks to abort.
    DegenerateSelection {
        /// An iteration index (zero based).
        iteration: usize,
        /// An agent index in population.
        agent: usize,
    },

    /// Convergence tracking is requested, but no threshold is given.
    ConvergenceMisconfiguration,

    /// A result writer has failed.
    Writer(GenericError),

    /// The engine is already in terminated state and cannot run more iterations.
    Terminated,
}

/// A type alias for result type with `ColonyError`.
pub type ColonyResult<T> = Result<T, ColonyError>;

impl ColonyError {
    /// Creates a configuration error with the given message.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

impl std::fmt::Display for ColonyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::DegenerateSelection { iteration, agent } => {
                write!(f, "all candidate scores are zero or undefined at iteration {iteration}, agent {agent}")
            }
            Self::ConvergenceMisconfiguration => {
                write!(f, "convergence tracking is enabled, but convergence iterations are not set")
            }
            Self::Writer(err) => write!(f, "cannot write results: {err}"),
            Self::Terminated => write!(f, "colony engine is already terminated"),
        }
    }
}

impl std::error::Error for ColonyError {}

impl From<GenericError> for ColonyError {
    fn from(value: GenericError) -> Self {
        Self::Writer(value)
    }
}
