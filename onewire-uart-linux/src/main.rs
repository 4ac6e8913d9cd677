use std::io::{Read, Write};
use std::time::Duration;

use clap::Parser;
use onewire_core::{OneWire, OneWireCrc, OneWireError, OneWireResult};
use onewire_uart::{HalfDuplexUart, UartOneWireBuilder};
use serialport::SerialPort;

/// Read ROM command; valid on a single-drop bus only.
const READ_ROM_CMD: u8 = 0x33;

/// Drive a 1-Wire device through a serial adapter wired for half-duplex
/// operation (TX open-drain on the bus wire, RX sensing it).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the serial device (e.g., /dev/ttyUSB0)
    #[arg(short, long)]
    path: String,
}

/// [`HalfDuplexUart`] over a `serialport` handle.
///
/// The OS buffers received frames in a FIFO, so `receive` drains it and
/// returns the newest frame to honor the latch contract of the trait.
struct SerialHalfDuplex {
    port: Box<dyn SerialPort>,
}

impl HalfDuplexUart for SerialHalfDuplex {
    type Error = std::io::Error;

    fn set_baud_rate(&mut self, baud_rate: u32) -> Result<(), Self::Error> {
        self.port
            .set_baud_rate(baud_rate)
            .map_err(std::io::Error::other)
    }

    fn transmit(&mut self, frame: u8) -> Result<(), Self::Error> {
        self.port.write_all(&[frame])?;
        self.port.flush()
    }

    fn receive_ready(&mut self) -> Result<bool, Self::Error> {
        let pending = self.port.bytes_to_read().map_err(std::io::Error::other)?;
        Ok(pending > 0)
    }

    fn receive(&mut self) -> Result<u8, Self::Error> {
        let mut frame = [0u8; 1];
        loop {
            self.port.read_exact(&mut frame)?;
            if self.port.bytes_to_read().map_err(std::io::Error::other)? == 0 {
                return Ok(frame[0]);
            }
        }
    }
}

/// Reads the 64-bit ROM of the single attached device, checking its
/// trailing CRC.
fn read_rom<O: OneWire>(bus: &mut O) -> OneWireResult<u64, O::BusError> {
    bus.write_byte(READ_ROM_CMD)?;
    let mut rom = [0u8; 8];
    bus.read_bytes(&mut rom)?;
    if OneWireCrc::validate(&rom) {
        Ok(u64::from_le_bytes(rom))
    } else {
        Err(OneWireError::InvalidCrc)
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();
    // Parse command line arguments
    let args = Args::parse();
    // Open the serial device wired as the 1-Wire line
    let port = serialport::new(args.path.as_str(), onewire_uart::DATA_BAUD_RATE)
        .timeout(Duration::from_millis(50))
        .open()
        .expect("Failed to open serial device");
    let delay = linux_embedded_hal::Delay;
    // Create the bus master
    let mut bus = UartOneWireBuilder::default()
        .build(SerialHalfDuplex { port }, delay)
        .expect("Failed to configure serial device");
    // Reset the bus and listen for a presence pulse
    match bus.reset() {
        Ok(status) => {
            log::info!("Presence pulse sensed, raw readback {:#04x}", status.raw());
        }
        Err(OneWireError::NoDevicePresent) => {
            log::warn!("No device present on the bus");
            return;
        }
        Err(e) => panic!("Bus fault during reset: {e:?}"),
    }
    // Read the ROM of the attached device and check its trailing CRC
    match read_rom(&mut bus) {
        Ok(rom) => log::info!("ROM: {rom:016x}"),
        Err(OneWireError::InvalidCrc) => log::error!("ROM readback failed its CRC"),
        Err(e) => panic!("Bus fault while reading ROM: {e:?}"),
    }
}
