use std::fmt;

/// Failure of a single event handler. Always local: the dispatcher logs the
/// error and moves on to the next event, so one malformed or out-of-order
/// event degrades only the entity it touches.
#[derive(Debug)]
pub enum HandlerError {
    /// The event references a listing that was never created.
    MissingListing(String),
    /// The event references a space that was never minted.
    MissingSpace(String),
    /// A bid-archival step found no active bid to archive. Indicates an
    /// ordering violation upstream of this layer.
    MissingActiveBid(String),
    /// A terminal event arrived for a listing that already finished or was
    /// canceled. Terminal states never transition again.
    AlreadyFinalized(String),
    /// A chain read with no defined fallback reverted.
    RevertedRead(&'static str),
    /// The entity store failed to load or persist a record.
    Store(anyhow::Error),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::MissingListing(id) => {
                write!(f, "reserve listing {} does not exist", id)
            }
            HandlerError::MissingSpace(id) => write!(f, "space {} does not exist", id),
            HandlerError::MissingActiveBid(listing_id) => {
                write!(f, "listing {} has no active bid to archive", listing_id)
            }
            HandlerError::AlreadyFinalized(id) => {
                write!(f, "reserve listing {} is already finalized", id)
            }
            HandlerError::RevertedRead(method) => write!(f, "chain read {} reverted", method),
            HandlerError::Store(err) => write!(f, "entity store failure: {}", err),
        }
    }
}

impl std::error::Error for HandlerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HandlerError::Store(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        HandlerError::Store(err)
    }
}
