use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidCoordinate(String),
    #[error("No nearby edge found for snapping")]
    NoNearbyEdge,
    #[error("Routing engine error: {0}")]
    RoutingEngineError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl Error {
    /// Whether the failure was caused by the request rather than the engine
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidCoordinate(_) | Error::NoNearbyEdge)
    }
}
