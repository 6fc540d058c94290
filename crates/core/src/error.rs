use thiserror::Error;

use crate::model::{AssetRefError, LabelError, SessionConfigError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error(transparent)]
    AssetRef(#[from] AssetRefError),
    #[error(transparent)]
    Config(#[from] SessionConfigError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
