use std::fmt::Formatter;

#[derive(Debug)]
pub enum CepError {
    MissingInput,
    Transport {
        status: Option<u16>,
        source: Box<dyn std::fmt::Debug + Send>
    },
    InvalidResponse(Box<dyn std::fmt::Debug + Send>),
    UnknownAttribute(String),
    InvalidArgument {
        expected: usize,
        given: usize
    },
    Serialization(Box<dyn std::fmt::Debug + Send>)
}

pub type Result<T> = std::result::Result<T, CepError>;

impl std::fmt::Display for CepError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            CepError::MissingInput => {
                write!(f, "No postal code given")
            },
            CepError::Transport { status: Some(status), source } => {
                write!(f, "Transport error (status {}): {:?}", status, source)
            },
            CepError::Transport { status: None, source } => {
                write!(f, "Transport error: {:?}", source)
            },
            CepError::InvalidResponse(inner) => {
                write!(f, "Invalid response body: {:?}", inner)
            },
            CepError::UnknownAttribute(name) => {
                write!(f, "Unknown attribute: {}", name)
            },
            CepError::InvalidArgument { expected, given } => {
                write!(f, "Too many arguments: expected {}, given {}", expected, given)
            },
            CepError::Serialization(inner) => {
                write!(f, "Serialization failed: {:?}", inner)
            }
        }
    }
}

impl std::error::Error for CepError {}

impl From<reqwest::Error> for CepError {
    fn from(error: reqwest::Error) -> Self {
        CepError::Transport {
            status: error.status().map(|s| s.as_u16()),
            source: Box::new(error)
        }
    }
}

impl From<serde_json::Error> for CepError {
    fn from(error: serde_json::Error) -> Self {
        CepError::Serialization(Box::new(error))
    }
}

impl From<quick_xml::Error> for CepError {
    fn from(error: quick_xml::Error) -> Self {
        CepError::Serialization(Box::new(error))
    }
}

impl From<std::string::FromUtf8Error> for CepError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        CepError::Serialization(Box::new(error))
    }
}
