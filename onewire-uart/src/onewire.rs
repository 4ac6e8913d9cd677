use crate::{HalfDuplexUart, UartOneWire};
use embedded_hal::delay::DelayNs;
use onewire_core::{OneWire, OneWireError, OneWireResult, OneWireStatus};

/// Reset frame: at the reset baud rate the start bit plus four low data bits
/// hold the line low past the 480 us minimum, and the four high data bits
/// plus the stop bit leave a high tail for the presence window.
pub(crate) const RESET_FRAME: u8 = 0xf0;
/// Write-1 slot: only the start bit is low, a narrow pulse.
pub(crate) const WRITE_ONE_FRAME: u8 = 0xff;
/// Write-0 slot: start bit plus all data bits low, a sustained pulse.
pub(crate) const WRITE_ZERO_FRAME: u8 = 0x00;
/// Read slot probe, identical on the wire to a write-1 slot; the device
/// pulls the line low during the high window to answer 0.
pub(crate) const READ_PROBE_FRAME: u8 = 0xff;

/// Raw frame sensed on the line during the reset slot.
///
/// A responding device pulls part of the line low during the high tail of
/// the reset frame, so any deviation from the transmitted pattern means a
/// presence pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PresenceSample(pub(crate) u8);

impl PresenceSample {
    /// The frame as sensed, including any bits a device pulled low.
    pub fn raw(&self) -> u8 {
        self.0
    }
}

impl OneWireStatus for PresenceSample {
    fn presence(&self) -> bool {
        self.0 != RESET_FRAME
    }
}

impl<U: HalfDuplexUart, D: DelayNs> UartOneWire<U, D> {
    /// Transmits a frame and returns the frame sensed on the shared line.
    ///
    /// The wait for the readback is bounded by the configured retry count
    /// and poll interval; expiry surfaces [`OneWireError::Timeout`] instead
    /// of blocking indefinitely.
    fn exchange(&mut self, frame: u8) -> OneWireResult<u8, U::Error> {
        self.uart.transmit(frame)?;
        let mut tries = 0;
        while !self.uart.receive_ready()? {
            if tries >= self.retries {
                return Err(OneWireError::Timeout);
            }
            tries += 1;
            self.delay.delay_us(self.poll_interval_us);
        }
        Ok(self.uart.receive()?)
    }
}

impl<U: HalfDuplexUart, D: DelayNs> OneWire for UartOneWire<U, D> {
    type Status = PresenceSample;

    type BusError = U::Error;

    fn reset(&mut self) -> OneWireResult<Self::Status, Self::BusError> {
        self.uart.set_baud_rate(self.reset_baud)?;
        let exchanged = self.exchange(RESET_FRAME);
        // Every later slot assumes the data rate, so it must be active again
        // before the outcome of the exchange is even inspected.
        self.uart.set_baud_rate(self.data_baud)?;
        let sample = PresenceSample(exchanged?);
        if sample.presence() {
            Ok(sample)
        } else {
            Err(OneWireError::NoDevicePresent)
        }
    }

    fn write_byte(&mut self, byte: u8) -> OneWireResult<(), Self::BusError> {
        let mut byte = byte;
        for _ in 0..8 {
            self.write_bit(byte & 0x01 == 0x01)?;
            byte >>= 1;
        }
        Ok(())
    }

    fn read_byte(&mut self) -> OneWireResult<u8, Self::BusError> {
        let mut value = 0_u8;
        for _ in 0..8 {
            value >>= 1;
            if self.read_bit()? {
                value |= 0x80;
            }
        }
        Ok(value)
    }

    fn write_bit(&mut self, bit: bool) -> OneWireResult<(), Self::BusError> {
        let frame = if bit { WRITE_ONE_FRAME } else { WRITE_ZERO_FRAME };
        self.uart.transmit(frame)?;
        Ok(())
    }

    fn read_bit(&mut self) -> OneWireResult<bool, Self::BusError> {
        let sensed = self.exchange(READ_PROBE_FRAME)?;
        Ok(sensed & 0x01 == 0x01)
    }
}
