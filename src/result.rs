extern crate anyhow;
extern crate reqwest;
extern crate serde_json;
extern crate std;

pub type RailResult<T> = std::result::Result<T, RailError>;

#[derive(Debug)]
pub enum RailError {
    HttpError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    SimpleError(String),
    AnnotatedError(anyhow::Error),
}

pub fn make_error(msg: &str) -> RailError {
    return RailError::SimpleError(msg.to_string());
}

impl std::fmt::Display for RailError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            RailError::HttpError(ref err) => {
                return write!(f, "HTTP Error: {}", err);
            },
            RailError::IoError(ref err) => {
                return write!(f, "IO Error: {}", err);
            },
            RailError::JsonError(ref err) => {
                return write!(f, "JSON Error: {}", err);
            },
            RailError::SimpleError(ref msg) => {
                return write!(f, "Error: {}", msg);
            },
            RailError::AnnotatedError(ref err) => {
                return write!(f, "Error: {:#}", err);
            },
        }
    }
}

impl std::error::Error for RailError {}

impl From<reqwest::Error> for RailError {
    fn from(err: reqwest::Error) -> RailError {
        return RailError::HttpError(err);
    }
}

impl From<std::io::Error> for RailError {
    fn from(err: std::io::Error) -> RailError {
        return RailError::IoError(err);
    }
}

impl From<serde_json::Error> for RailError {
    fn from(err: serde_json::Error) -> RailError {
        return RailError::JsonError(err);
    }
}

impl From<anyhow::Error> for RailError {
    fn from(err: anyhow::Error) -> RailError {
        return RailError::AnnotatedError(err);
    }
}
