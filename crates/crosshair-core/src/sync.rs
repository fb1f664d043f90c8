// File: crates/crosshair-core/src/sync.rs
// Summary: Group-scoped publish/subscribe bus that mirrors pointer and reset actions across charts.
// Notes:
// - Delivery is synchronous and single-threaded. The origin chart is never
//   called back, so a publisher may hold its own state mutably while publishing.
// - Messages carry data-space values only; receivers re-project into their
//   own pixel space.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::config::SyncGroup;
use crate::gesture::{PointerEvent, PointerKind};
use crate::host::ChartHost;
use crate::plugin::{ChartPlugin, Crosshair};
use crate::types::ChartId;
use crate::zoom::ResetOrigin;

/// Pointer position mirrored to the other charts of a group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSync {
    pub origin: ChartId,
    pub group: SyncGroup,
    pub data_x: f64,
    pub data_y: f64,
    pub buttons: u8,
    /// Never `Click`: clicks travel as `Move` so they cannot start remote drags.
    pub kind: PointerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetSync {
    pub origin: ChartId,
    pub group: SyncGroup,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SyncMessage {
    Pointer(PointerSync),
    Reset(ResetSync),
}

impl SyncMessage {
    pub fn origin(&self) -> ChartId {
        match self {
            SyncMessage::Pointer(m) => m.origin,
            SyncMessage::Reset(m) => m.origin,
        }
    }

    pub fn group(&self) -> SyncGroup {
        match self {
            SyncMessage::Pointer(m) => m.group,
            SyncMessage::Reset(m) => m.group,
        }
    }
}

type Handler = Rc<dyn Fn(&SyncMessage)>;

struct Subscriber {
    id: u64,
    chart: ChartId,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    groups: HashMap<SyncGroup, Vec<Subscriber>>,
}

/// Shared message bus. Cloning yields another handle to the same bus.
#[derive(Clone, Default)]
pub struct SyncBus {
    inner: Rc<RefCell<Registry>>,
}

thread_local! {
    static GLOBAL_BUS: SyncBus = SyncBus::new();
}

impl SyncBus {
    pub fn new() -> Self { Self::default() }

    /// The bus shared by every chart created on this thread.
    pub fn global() -> Self {
        GLOBAL_BUS.with(SyncBus::clone)
    }

    /// Register `handler` for messages of `group` not originating from `chart`.
    /// The registration lasts as long as the returned [`Subscription`].
    pub fn subscribe(&self, chart: ChartId, group: SyncGroup, handler: impl Fn(&SyncMessage) + 'static) -> Subscription {
        let mut reg = self.inner.borrow_mut();
        reg.next_id += 1;
        let id = reg.next_id;
        reg.groups.entry(group).or_default().push(Subscriber { id, chart, handler: Rc::new(handler) });
        debug!(%chart, group, "sync subscribe");
        Subscription { bus: Rc::downgrade(&self.inner), group, id }
    }

    /// Deliver `msg` to every other subscriber of its group; returns how many
    /// handlers ran.
    pub fn publish(&self, msg: &SyncMessage) -> usize {
        // collect first so handlers may subscribe/unsubscribe while running
        let targets: Vec<Handler> = self
            .inner
            .borrow()
            .groups
            .get(&msg.group())
            .map(|subs| subs.iter().filter(|s| s.chart != msg.origin()).map(|s| s.handler.clone()).collect())
            .unwrap_or_default();
        for handler in &targets {
            handler(msg);
        }
        targets.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().groups.values().map(Vec::len).sum()
    }
}

impl std::fmt::Debug for SyncBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncBus").field("subscribers", &self.subscriber_count()).finish()
    }
}

/// Live registration on a [`SyncBus`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    bus: Weak<RefCell<Registry>>,
    group: SyncGroup,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.bus.upgrade() else { return };
        let mut reg = inner.borrow_mut();
        if let Some(subs) = reg.groups.get_mut(&self.group) {
            subs.retain(|s| s.id != self.id);
            if subs.is_empty() {
                reg.groups.remove(&self.group);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("group", &self.group).field("id", &self.id).finish()
    }
}

impl Crosshair {
    /// Replay a message from another chart of the group. Pointer messages
    /// become local events marked `replayed`, so they are never re-published.
    pub fn handle_sync(&mut self, chart: &mut dyn ChartHost, msg: &SyncMessage) {
        if self.state.is_none() || msg.origin() == self.id || msg.group() != self.config.sync.group {
            return;
        }
        match *msg {
            SyncMessage::Pointer(p) => {
                let (Some(xs), Some(ys)) = (chart.x_scale(), chart.y_scale()) else { return };
                let event = PointerEvent {
                    kind: p.kind,
                    x: xs.pixel_for_value(p.data_x),
                    y: ys.pixel_for_value(p.data_y),
                    buttons: p.buttons,
                    replayed: true,
                };
                self.after_event(chart, &event);
            }
            SyncMessage::Reset(_) => self.reset_zoom(chart, ResetOrigin::Synced),
        }
    }
}
