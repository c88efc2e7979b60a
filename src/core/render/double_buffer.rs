use std::ops::{Deref, DerefMut};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

struct Slot<T> {
    /// `None` while the consumer holds the back buffer.
    back: Option<T>,
    /// A published frame the consumer has not acquired yet.
    pending: bool,
    closed: bool,
}

/// Front/back handoff between a producer that renders into the front
/// buffer and a consumer that reads the back buffer.
///
/// `publish` swaps only once the consumer has acquired the previous frame
/// and returned it by dropping its `FrameGuard`, so neither side ever sees a
/// buffer the other one is using.
pub struct DoubleBuffer<T> {
    slot: Mutex<Slot<T>>,
    changed: Condvar,
}

impl<T> DoubleBuffer<T> {
    pub fn new(back: T) -> Self {
        DoubleBuffer {
            slot: Mutex::new(Slot {
                back: Some(back),
                pending: false,
                closed: false,
            }),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Makes `front` the new back buffer and returns the previous back
    /// buffer to render into next. Blocks until the consumer is done with
    /// the previous frame. Returns `None` once the buffer is closed.
    pub fn publish(&self, front: T) -> Option<T> {
        let mut slot = self.lock();
        while !slot.closed && (slot.back.is_none() || slot.pending) {
            slot = self
                .changed
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if slot.closed {
            return None;
        }
        let previous = slot.back.replace(front);
        slot.pending = true;
        self.changed.notify_all();
        return previous;
    }

    /// Waits for the next published frame. Returns `None` once the buffer
    /// is closed and every published frame has been acquired.
    pub fn acquire(&self) -> Option<FrameGuard<'_, T>> {
        let mut slot = self.lock();
        while !slot.pending && !slot.closed {
            slot = self
                .changed
                .wait(slot)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if !slot.pending {
            return None;
        }
        slot.pending = false;
        let value = slot.back.take();
        return value.map(|value| FrameGuard {
            buffer: self,
            value: Some(value),
        });
    }

    /// Wakes both sides; later `publish` calls fail and `acquire` drains
    /// what is left.
    pub fn close(&self) {
        let mut slot = self.lock();
        slot.closed = true;
        self.changed.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        return self.lock().closed;
    }

    fn give_back(&self, value: T) {
        let mut slot = self.lock();
        slot.back = Some(value);
        self.changed.notify_all();
    }
}

/// Consumer side borrow of the back buffer. Dropping it signals completion.
pub struct FrameGuard<'a, T> {
    buffer: &'a DoubleBuffer<T>,
    value: Option<T>,
}

impl<T> Deref for FrameGuard<'_, T> {
    type Target = T;
    fn deref(&self) -> &T {
        // only emptied in drop
        match self.value.as_ref() {
            Some(v) => v,
            None => unreachable!(),
        }
    }
}

impl<T> DerefMut for FrameGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.value.as_mut() {
            Some(v) => v,
            None => unreachable!(),
        }
    }
}

impl<T> Drop for FrameGuard<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.buffer.give_back(value);
        }
    }
}
