//! Receive buffer between the UART interrupt and the main loop
//!
//! A single-producer, single-consumer ring of [`RX_CAPACITY`] bytes. The
//! receive interrupt is the only producer ([`RxRing::push`]), the console the
//! only consumer. Each side owns one index; the other side only reads it.
//!
//! There is no backpressure. When the producer laps the consumer the oldest
//! unread bytes are overwritten and the consumer resumes at the oldest byte
//! still in the ring, so the ring always yields the most recent
//! [`RX_CAPACITY`] bytes. Losing input is accepted on this console; the
//! [`RxRing::dropped`] counter is there for diagnostics only.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Bytes the ring holds
pub const RX_CAPACITY: usize = 32;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

/// Overwrite-on-full byte ring fed from an interrupt handler
pub struct RxRing {
    slots: [AtomicU8; RX_CAPACITY],
    /// Bytes ever written, owned by the producer
    written: AtomicU32,
    /// Bytes ever consumed or skipped, owned by the consumer
    read: AtomicU32,
    dropped: AtomicU32,
}

impl Default for RxRing {
    fn default() -> Self {
        Self::new()
    }
}

impl RxRing {
    /// Empty ring, usable in a `static`
    pub const fn new() -> Self {
        RxRing {
            slots: [EMPTY_SLOT; RX_CAPACITY],
            written: AtomicU32::new(0),
            read: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Store one received byte. Producer side only.
    pub fn push(&self, byte: u8) {
        let written = self.written.load(Ordering::Relaxed);
        self.slots[written as usize % RX_CAPACITY].store(byte, Ordering::Relaxed);
        self.written.store(written.wrapping_add(1), Ordering::Release);
    }

    /// Oldest unread byte, if there is one. Consumer side only.
    pub fn try_recv(&self) -> Option<u8> {
        let written = self.written.load(Ordering::Acquire);
        let mut read = self.read.load(Ordering::Relaxed);
        let pending = written.wrapping_sub(read);
        if pending == 0 {
            return None;
        }
        if pending as usize > RX_CAPACITY {
            // Lapped: everything before the last RX_CAPACITY bytes is gone
            let lost = pending - RX_CAPACITY as u32;
            self.dropped.fetch_add(lost, Ordering::Relaxed);
            read = read.wrapping_add(lost);
        }
        let byte = self.slots[read as usize % RX_CAPACITY].load(Ordering::Relaxed);
        self.read.store(read.wrapping_add(1), Ordering::Release);
        Some(byte)
    }

    /// Oldest unread byte, spinning until one arrives. Consumer side only.
    pub fn recv(&self) -> u8 {
        loop {
            if let Some(byte) = self.try_recv() {
                return byte;
            }
            core::hint::spin_loop();
        }
    }

    /// Unread bytes currently in the ring
    pub fn len(&self) -> usize {
        let pending = self
            .written
            .load(Ordering::Acquire)
            .wrapping_sub(self.read.load(Ordering::Acquire));
        (pending as usize).min(RX_CAPACITY)
    }

    /// True when there is nothing to read
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes overwritten before they were read
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;
    use std::vec::Vec;

    #[test]
    fn fifo_order_below_capacity() {
        let ring = RxRing::new();
        for byte in 0..31u8 {
            ring.push(byte);
        }
        assert_eq!(ring.len(), 31);
        let received: Vec<u8> = core::iter::from_fn(|| ring.try_recv()).collect();
        assert_eq!(received, (0..31).collect::<Vec<u8>>());
        assert!(ring.is_empty());
        assert_eq!(ring.dropped(), 0);
    }

    #[test]
    fn overflow_keeps_most_recent_bytes() {
        let ring = RxRing::new();
        for byte in 1..=33u8 {
            ring.push(byte);
        }
        assert_eq!(ring.len(), RX_CAPACITY);
        let received: Vec<u8> = core::iter::from_fn(|| ring.try_recv()).collect();
        assert_eq!(received, (2..=33).collect::<Vec<u8>>());
        assert_eq!(ring.dropped(), 1);
    }

    #[test]
    fn exactly_full_loses_nothing() {
        let ring = RxRing::new();
        for byte in 0..32u8 {
            ring.push(byte);
        }
        assert_eq!(ring.try_recv(), Some(0));
        assert_eq!(ring.len(), 31);
    }

    #[test]
    fn indices_wrap_around_the_slots() {
        let ring = RxRing::new();
        for round in 0..100u8 {
            ring.push(round);
            ring.push(round.wrapping_add(1));
            assert_eq!(ring.try_recv(), Some(round));
            assert_eq!(ring.try_recv(), Some(round.wrapping_add(1)));
        }
        assert_eq!(ring.try_recv(), None);
    }

    #[test]
    fn recv_blocks_until_interrupt_delivers() {
        let ring = Arc::new(RxRing::new());
        let isr = {
            let ring = Arc::clone(&ring);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(5));
                ring.push(b'x');
            })
        };
        assert_eq!(ring.recv(), b'x');
        isr.join().unwrap();
    }
}
