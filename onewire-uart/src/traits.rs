/// Trait for the half-duplex UART peripheral driving the 1-Wire line.
///
/// The peripheral must be wired so that transmit and receive share the one
/// physical bus wire (open-drain transmit, receive sensing the line). Every
/// transmitted frame is therefore sensed back, carrying whatever actually
/// happened on the wire, including bits a device pulled low. Framing is
/// 8 data bits, 1 stop bit, no parity, no flow control.
pub trait HalfDuplexUart {
    /// The error type returned by the peripheral.
    type Error;

    /// Reconfigures the peripheral for a new baud rate.
    ///
    /// The frame format (8N1, half-duplex) must be preserved across rate
    /// changes.
    ///
    /// # Errors
    /// This method returns an error if the peripheral rejects the rate.
    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), Self::Error>;

    /// Sends one frame, returning once it has been fully shifted out.
    ///
    /// # Errors
    /// This method returns an error if the transmission fails.
    fn transmit(&mut self, frame: u8) -> Result<(), Self::Error>;

    /// Reports, without blocking, whether a frame has been sensed on the
    /// line since the last [receive](HalfDuplexUart::receive).
    ///
    /// # Errors
    /// This method returns an error if the peripheral state cannot be read.
    fn receive_ready(&mut self) -> Result<bool, Self::Error>;

    /// Takes the most recently sensed frame.
    ///
    /// Semantics follow a UART data register with overrun protection
    /// disabled: a newer frame replaces an unread older one. Implementations
    /// backed by a FIFO should drain it and return the newest frame.
    ///
    /// # Errors
    /// This method returns an error if the read fails.
    fn receive(&mut self) -> Result<u8, Self::Error>;
}
