use crate::OneWireResult;

/// Status of the bus as sampled by a reset operation.
pub trait OneWireStatus {
    /// Whether at least one device answered the reset pulse with a presence pulse.
    fn presence(&self) -> bool;
}

/// Trait for 1-Wire communication.
/// This trait defines the basic operations required for 1-Wire communication, such as resetting
/// the bus, writing and reading bytes, and writing and reading bits.
///
/// Bytes travel least-significant bit first: bit 0 of a byte is the first bit on the wire.
/// Implementations must preserve this ordering, real devices depend on it.
pub trait OneWire {
    /// The status type returned by the reset operation.
    /// This type must implement the [OneWireStatus] trait.
    type Status: OneWireStatus;
    /// The error type returned by the operations of this trait.
    /// This type is used to indicate errors in the underlying hardware or communication.
    type BusError;

    /// Resets the 1-Wire bus and returns the status of the bus.
    ///
    /// # Returns
    /// A result containing the status of the bus after the reset operation. An `Ok` value
    /// means a device answered the reset pulse; the absence of any device is reported as
    /// [`OneWireError::NoDevicePresent`](crate::OneWireError::NoDevicePresent), which is a
    /// recoverable condition rather than a bus fault.
    ///
    /// # Errors
    /// This method returns an error if the reset operation fails or no device is present.
    fn reset(&mut self) -> OneWireResult<Self::Status, Self::BusError>;

    /// Writes a byte to the 1-Wire bus, least-significant bit first.
    /// # Arguments
    /// * `byte` - The byte to write to the bus.
    ///
    /// # Errors
    /// This method returns an error if the write operation fails.
    fn write_byte(&mut self, byte: u8) -> OneWireResult<(), Self::BusError>;

    /// Reads a byte from the 1-Wire bus.
    /// The first bit read lands in bit 0 of the result, the eighth in bit 7.
    ///
    /// # Errors
    /// This method returns an error if the read operation fails.
    fn read_byte(&mut self) -> OneWireResult<u8, Self::BusError>;

    /// Writes a single bit to the 1-Wire bus.
    /// # Arguments
    /// * `bit` - The bit to write.
    ///
    /// # Errors
    /// This method returns an error if the write operation fails.
    fn write_bit(&mut self, bit: bool) -> OneWireResult<(), Self::BusError>;

    /// Reads a single bit from the 1-Wire bus.
    /// # Returns
    /// The bit read from the bus.
    /// # Errors
    /// This method returns an error if the read operation fails.
    fn read_bit(&mut self) -> OneWireResult<bool, Self::BusError>;

    /// Writes a slice of bytes to the 1-Wire bus, in order.
    ///
    /// # Errors
    /// This method returns an error if any write operation fails.
    fn write_bytes(&mut self, bytes: &[u8]) -> OneWireResult<(), Self::BusError> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Fills a buffer with bytes read from the 1-Wire bus.
    ///
    /// # Errors
    /// This method returns an error if any read operation fails.
    fn read_bytes(&mut self, buf: &mut [u8]) -> OneWireResult<(), Self::BusError> {
        for byte in buf.iter_mut() {
            *byte = self.read_byte()?;
        }
        Ok(())
    }
}
