use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scroll context was read where no engine provides one
    #[error("scroll context used outside of a ScrollEngine scope")]
    OutsideScrollProvider,

    #[error("a scroll controller is already live on this thread")]
    ControllerAlreadyLive,

    #[error("scroll engine has been torn down")]
    EngineTornDown,
}

pub type Result<T> = std::result::Result<T, Error>;
