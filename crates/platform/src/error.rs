//! Bus error type

/// Errors raised by a [`DisplayInterface`](crate::DisplayInterface).
///
/// The underlying HAL error is discarded; bus faults on these links are not
/// recoverable by retrying at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer or parallel bus write failed
    #[error("display bus communication error")]
    Communication,
    /// DC, WR, RD or RST pin could not be driven
    #[error("display control pin error")]
    Gpio,
    /// Operation not available on this bus (e.g. read without RD line)
    #[error("operation not supported by this interface")]
    Unsupported,
    /// Coordinates outside the panel
    #[error("coordinates outside the panel")]
    InvalidCoordinate,
    /// Pixel buffer length differs from the window area
    #[error("pixel buffer does not match the window")]
    BufferSize,
}
