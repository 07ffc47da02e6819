//! Sequential camera-device reconnection after a breakout-room return.
//!
//! The platform forbids two camera devices from initializing concurrently,
//! so devices queued for re-sharing connect one at a time: `can_connect`
//! is a single-slot hand-off consumed when a device is dequeued and handed
//! back when that device's tile reports its first frame. There is no
//! timeout; if a device never reaches ready the queue starves (preserved
//! behavior of the original client).

#[cfg(test)]
#[path = "device_test.rs"]
mod device_test;

use std::collections::VecDeque;

/// Single-slot hand-off plus FIFO of device ids awaiting reconnection.
#[derive(Debug)]
pub struct DeviceConnectQueue {
    can_connect: bool,
    was_in_breakout: bool,
    rejoin_pending: bool,
    devices: VecDeque<String>,
}

impl Default for DeviceConnectQueue {
    fn default() -> Self {
        // The slot starts free: by the time a breakout return is observed,
        // some earlier tile has always reported readiness.
        Self {
            can_connect: true,
            was_in_breakout: false,
            rejoin_pending: false,
            devices: VecDeque::new(),
        }
    }
}

impl DeviceConnectQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the devices that were active before entering the breakout.
    pub fn queue_devices<I>(&mut self, device_ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.devices.extend(device_ids);
    }

    /// Observe current breakout-room membership; edge-detects the return.
    ///
    /// Reconnection only starts on a was-in → not-in transition with
    /// devices queued.
    pub fn on_breakout_membership(&mut self, in_breakout: bool) {
        if in_breakout {
            self.was_in_breakout = true;
        } else if self.was_in_breakout {
            self.was_in_breakout = false;
            if !self.devices.is_empty() {
                self.rejoin_pending = true;
            }
        }
    }

    /// Pop the next device to connect, consuming the hand-off slot.
    ///
    /// Returns `None` until a breakout return is observed, while a prior
    /// device still holds the slot, or once the queue is drained.
    pub fn try_connect_next(&mut self) -> Option<String> {
        if !self.rejoin_pending || !self.can_connect {
            return None;
        }
        let device_id = self.devices.pop_front()?;
        self.can_connect = false;
        if self.devices.is_empty() {
            self.rejoin_pending = false;
        }
        Some(device_id)
    }

    /// Hand the slot back; driven by a tile's first-frame event.
    pub fn release(&mut self) {
        self.can_connect = true;
    }

    /// Whether the slot is currently free.
    #[must_use]
    pub fn can_connect(&self) -> bool {
        self.can_connect
    }

    /// Devices still waiting to connect.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.devices.len()
    }
}
