use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown {0} identifier: '{1}'")]
    UnknownIdentifier(&'static str, String),
}
