#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

/*! # onewire-uart

A 1-Wire bus master built on a general-purpose UART instead of a bit-banged
GPIO pin. The peripheral runs in half-duplex, open-drain mode on the bus
wire, and the strict pulse widths of the protocol are reproduced by UART
start/stop-bit framing at two baud rates: a slow rate whose stretched frame
forms the reset pulse, and a fast rate whose frames form the read/write
slots. No software-timed delays are involved in shaping the pulses.

[`UartOneWire`] takes ownership of a peripheral implementing
[`HalfDuplexUart`] and a timer object implementing the
[`DelayNs`](embedded_hal::delay::DelayNs) trait, and implements the
[`OneWire`] trait from `onewire-core` on top of them.
*/

mod onewire;
mod traits;

pub use onewire::PresenceSample;
pub use traits::HalfDuplexUart;

pub use onewire_core::{OneWire, OneWireError, OneWireResult, OneWireStatus};

use embedded_hal::delay::DelayNs;

/// Default baud rate for the reset slot. One frame stretches the start bit
/// and four low data bits into a low pulse of roughly 520 us, clearing the
/// 480 us minimum reset width.
pub const RESET_BAUD_RATE: u32 = 9_600;

/// Default baud rate for read/write slots, one UART frame per bit.
pub const DATA_BAUD_RATE: u32 = 115_200;

/// A 1-Wire bus master over a half-duplex UART.
///
/// Construct through [`UartOneWireBuilder`]; building configures the
/// peripheral for the data baud rate, which every bit and byte operation
/// assumes. Only [`OneWire::reset`] changes the rate, and it restores the
/// data rate before returning on every path.
pub struct UartOneWire<U, D> {
    pub(crate) uart: U,
    pub(crate) delay: D,
    pub(crate) reset_baud: u32,
    pub(crate) data_baud: u32,
    pub(crate) retries: u8,
    pub(crate) poll_interval_us: u32,
}

/// Builder for creating a [`UartOneWire`] instance with custom configuration.
pub struct UartOneWireBuilder {
    pub(crate) reset_baud: u32,
    pub(crate) data_baud: u32,
    pub(crate) retries: u8,
    pub(crate) poll_interval_us: u32,
}

impl Default for UartOneWireBuilder {
    fn default() -> Self {
        UartOneWireBuilder {
            reset_baud: RESET_BAUD_RATE,
            data_baud: DATA_BAUD_RATE,
            retries: 100,
            poll_interval_us: 100,
        }
    }
}

impl UartOneWireBuilder {
    /// Sets the retry count.
    ///
    /// Together with the poll interval, the retry count bounds how long the
    /// bus master waits for the readback of a transmitted frame before the
    /// operation times out.
    pub fn with_retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the pause between readback polls, in microseconds.
    pub fn with_poll_interval_us(mut self, poll_interval_us: u32) -> Self {
        self.poll_interval_us = poll_interval_us;
        self
    }

    /// Sets the reset and data baud rates.
    ///
    /// The defaults ([`RESET_BAUD_RATE`], [`DATA_BAUD_RATE`]) encode the
    /// standard 1-Wire slot timings; deviating from them changes the pulse
    /// widths on the wire accordingly.
    pub fn with_baud_rates(mut self, reset_baud: u32, data_baud: u32) -> Self {
        self.reset_baud = reset_baud;
        self.data_baud = data_baud;
        self
    }

    /// Builds a new `UartOneWire` with the specified configuration.
    ///
    /// Initializes the transport by configuring the peripheral for the data
    /// baud rate.
    ///
    /// # Errors
    /// This method returns an error if the peripheral rejects the
    /// configuration.
    pub fn build<U: HalfDuplexUart, D: DelayNs>(
        self,
        uart: U,
        delay: D,
    ) -> OneWireResult<UartOneWire<U, D>, U::Error> {
        let mut bus = UartOneWire {
            uart,
            delay,
            reset_baud: self.reset_baud,
            data_baud: self.data_baud,
            retries: self.retries,
            poll_interval_us: self.poll_interval_us,
        };
        bus.uart.set_baud_rate(bus.data_baud)?;
        Ok(bus)
    }
}
