//! # Device Transport Seam
//!
//! The codec never talks to hardware. A [`PhyTransport`] supplies the raw
//! PHY block read from a key and accepts the block to write back; real
//! implementations sit on top of a USB stack outside this crate.
//!
//! [`MemoryTransport`] keeps the block in memory and records every write and
//! reboot.

use log::{debug, info};

use crate::error::PhyError;
use crate::phy::{decode, encode, PhyData};
use crate::util::hex::format_hex_compact;

/// Raw access to a device's PHY block.
pub trait PhyTransport {
    /// Current PHY block, `None` if the device has none.
    fn read_phy(&mut self) -> Result<Option<Vec<u8>>, PhyError>;

    /// Replace the PHY block.
    fn write_phy(&mut self, data: &[u8]) -> Result<(), PhyError>;

    /// Restart the device so it reloads its PHY block.
    fn reboot(&mut self) -> Result<(), PhyError>;
}

/// Read and decode a device's configuration.
pub fn read_config<T: PhyTransport + ?Sized>(transport: &mut T) -> Result<Option<PhyData>, PhyError> {
    let Some(raw) = transport.read_phy()? else {
        debug!("Device has no PHY data");
        return Ok(None);
    };
    debug!("Read PHY data: {}", format_hex_compact(&raw));
    Ok(Some(decode(&raw)))
}

/// Encode a configuration and write it to the device.
pub fn apply_config<T: PhyTransport + ?Sized>(transport: &mut T, phy: &PhyData) -> Result<(), PhyError> {
    let raw = encode(phy);
    debug!("Writing PHY data: {}", format_hex_compact(&raw));
    transport.write_phy(&raw)?;
    info!("PHY configuration written ({} bytes)", raw.len());
    Ok(())
}

/// In-memory transport.
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    phy: Option<Vec<u8>>,
    writes: Vec<Vec<u8>>,
    reboots: usize,
    fail_next: Option<String>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport whose device already holds `data`.
    pub fn with_phy(data: &[u8]) -> Self {
        Self {
            phy: Some(data.to_vec()),
            ..Self::default()
        }
    }

    pub fn current_phy(&self) -> Option<&[u8]> {
        self.phy.as_deref()
    }

    /// Every block written so far, oldest first.
    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    pub fn reboot_count(&self) -> usize {
        self.reboots
    }

    /// Make the next operation fail with a transport error.
    pub fn set_next_error(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    fn check_error(&mut self) -> Result<(), PhyError> {
        match self.fail_next.take() {
            Some(message) => Err(PhyError::Transport(message)),
            None => Ok(()),
        }
    }
}

impl PhyTransport for MemoryTransport {
    fn read_phy(&mut self) -> Result<Option<Vec<u8>>, PhyError> {
        self.check_error()?;
        Ok(self.phy.clone())
    }

    fn write_phy(&mut self, data: &[u8]) -> Result<(), PhyError> {
        self.check_error()?;
        self.phy = Some(data.to_vec());
        self.writes.push(data.to_vec());
        Ok(())
    }

    fn reboot(&mut self) -> Result<(), PhyError> {
        self.check_error()?;
        self.reboots += 1;
        Ok(())
    }
}
