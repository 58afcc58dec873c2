/// Backend read errors.
///
/// A fetch failure never aborts a whole project computation: the
/// affected need or requirement degrades to zero totals while siblings
/// compute normally.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("backend read failed for {entity}: {reason}")]
    Backend {
        entity: &'static str,
        reason: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },
}
