/// One wire communication error type.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OneWireError<E> {
    /// Encapsulates the error type from the underlying hardware.
    Other(E),
    /// Indicates that no device is present on the bus: the reset pulse came
    /// back unmodified, so nothing answered with a presence pulse.
    NoDevicePresent,
    /// A bounded wait on the transport expired before a frame was sensed.
    Timeout,
    /// Computed CRC of a received block is invalid.
    InvalidCrc,
}

impl<E> From<E> for OneWireError<E> {
    fn from(other: E) -> Self {
        Self::Other(other)
    }
}
