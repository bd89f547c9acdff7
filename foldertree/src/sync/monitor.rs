/*
 * Created on Thu Jul 31 2025
 *
 * This file is a part of Foldertree
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

//! # The fair reader/writer monitor
//!
//! Every folder in the tree owns one of these. It admits any number of concurrent
//! readers, or exactly one writer, and hands off between batches of each using a
//! single `change` baton so that a thread that has just been woken can never be
//! overtaken by a thread that arrives fresh and races it for the lock.
//!
//! Resist the urge to "simplify" the `change` bookkeeping below -- every branch
//! of it is load-bearing for fairness, not defensive padding (see the
//! module-level comment on [`FairRwMonitor::enter_reader`]).

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Default)]
struct MonitorState {
    r_active: i64,
    w_active: i64,
    r_waiting: i64,
    w_waiting: i64,
    /// The hand-off baton. `> 0`: credit for that many waiting readers to cascade
    /// through. `-1`: credit for exactly one waiting writer. `0`: no one has been
    /// handed permission; new arrivals must queue and wait their turn.
    change: i64,
}

/// A fair readers/writers monitor, one per folder.
///
/// Multiple readers may hold it concurrently; at most one writer may hold it;
/// readers and writers never overlap. When a writer releases and readers are
/// waiting, the *entire* waiting batch is admitted before any further writer --
/// and symmetrically a writer is admitted only once the last reader of a batch
/// has released.
#[derive(Debug, Default)]
pub(crate) struct FairRwMonitor {
    state: Mutex<MonitorState>,
    cv_reader: Condvar,
    cv_writer: Condvar,
}

impl FairRwMonitor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Blocks until reader access is granted.
    ///
    /// The wait condition is `w_active + w_waiting > 0 && change <= 0`: we may
    /// proceed either because no writer is active or queued, or because we've been
    /// explicitly hand-signaled (`change > 0`). On admission `change` is
    /// unconditionally decremented, not just when positive -- a reader that walks
    /// straight through with `change == 0` (no writer ever involved) still needs to
    /// leave `change` clamped at `0` rather than drifting negative, which the
    /// clamp below restores.
    pub(crate) fn enter_reader(&self) {
        let mut s = self.state.lock();
        while s.w_active + s.w_waiting > 0 && s.change <= 0 {
            s.r_waiting += 1;
            self.cv_reader.wait(&mut s);
            s.r_waiting -= 1;
        }
        s.change -= 1;
        s.r_active += 1;
        if s.change > 0 {
            // more of our batch still queued behind us: cascade the wake-up
            self.cv_reader.notify_one();
        }
        if s.change < 0 {
            s.change = 0;
        }
    }

    /// Releases reader access. If this was the last active reader and a writer is
    /// queued, hands the baton to the writer side.
    pub(crate) fn exit_reader(&self) {
        let mut s = self.state.lock();
        s.r_active -= 1;
        if s.r_active == 0 && s.w_waiting > 0 {
            s.change = -1;
            self.cv_writer.notify_one();
        }
    }

    /// Blocks until writer access is granted: exclusive of every other reader and
    /// writer, unless `change == -1` explicitly hands this node over to us.
    pub(crate) fn enter_writer(&self) {
        let mut s = self.state.lock();
        while s.w_active + s.r_active > 0 && s.change != -1 {
            s.w_waiting += 1;
            self.cv_writer.wait(&mut s);
            s.w_waiting -= 1;
        }
        s.w_active += 1;
        s.change = 0;
    }

    /// Releases writer access. Prefers waking the whole waiting reader batch over
    /// a single waiting writer, which is what gives readers priority as a group
    /// without ever starving writers outright (a writer still gets its turn the
    /// moment that reader batch drains).
    pub(crate) fn exit_writer(&self) {
        let mut s = self.state.lock();
        s.w_active -= 1;
        if s.r_waiting > 0 {
            s.change = s.r_waiting;
            self.cv_reader.notify_one();
        } else if s.w_waiting > 0 {
            s.change = -1;
            self.cv_writer.notify_one();
        } else {
            s.change = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn readers_run_concurrently() {
        let m = Arc::new(FairRwMonitor::new());
        m.enter_reader();
        // a second reader must not block behind the first
        let m2 = m.clone();
        let joined = thread::spawn(move || {
            m2.enter_reader();
            m2.exit_reader();
        });
        joined.join().unwrap();
        m.exit_reader();
    }

    #[test]
    fn writer_excludes_everyone() {
        let m = Arc::new(FairRwMonitor::new());
        m.enter_writer();
        let m2 = m.clone();
        let handle = thread::spawn(move || {
            m2.enter_reader();
            m2.exit_reader();
        });
        // give the reader a chance to (wrongly) proceed
        thread::sleep(Duration::from_millis(20));
        assert!(!handle.is_finished());
        m.exit_writer();
        handle.join().unwrap();
    }

    #[test]
    fn writer_batch_then_writer_alternation() {
        // a writer waiting behind an active reader batch eventually gets in, and a
        // fresh reader arriving after that doesn't starve it out
        let m = Arc::new(FairRwMonitor::new());
        m.enter_reader();
        let m_writer = m.clone();
        let writer_done = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let wd = writer_done.clone();
        let writer_thread = thread::spawn(move || {
            m_writer.enter_writer();
            wd.store(true, std::sync::atomic::Ordering::SeqCst);
            m_writer.exit_writer();
        });
        thread::sleep(Duration::from_millis(20));
        assert!(!writer_done.load(std::sync::atomic::Ordering::SeqCst));
        m.exit_reader();
        writer_thread.join().unwrap();
        assert!(writer_done.load(std::sync::atomic::Ordering::SeqCst));
    }
}
