// File: crates/crosshair-core/src/instance.rs
// Summary: Binds a host chart, its crosshair plugin and its sync-bus subscription.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::config::CrosshairOptions;
use crate::geometry::Point;
use crate::gesture::PointerEvent;
use crate::host::ChartHost;
use crate::interaction::{interpolate_mode, InteractionItem};
use crate::plugin::{ChartPlugin, Crosshair};
use crate::render::DrawSurface;
use crate::sync::{SyncBus, SyncMessage, Subscription};
use crate::zoom::ResetOrigin;

/// A chart with the crosshair attached. Instances are shared through
/// `Rc<RefCell<_>>` so the sync bus can reach them.
pub struct ChartInstance<H: ChartHost> {
    host: H,
    crosshair: Crosshair,
    subscription: Option<Subscription>,
}

pub type SharedInstance<H> = Rc<RefCell<ChartInstance<H>>>;

impl<H: ChartHost + 'static> ChartInstance<H> {
    /// Run the init hook and, when sync is enabled, subscribe to `bus`.
    pub fn attach(mut host: H, options: &CrosshairOptions, bus: &SyncBus) -> SharedInstance<H> {
        let mut crosshair = Crosshair::new(options.resolve(), bus.clone());
        crosshair.after_init(&mut host);

        let sync = crosshair.config().sync;
        let active = crosshair.is_active();
        let id = crosshair.id();
        let instance = Rc::new(RefCell::new(Self { host, crosshair, subscription: None }));

        if active && sync.enabled {
            let weak = Rc::downgrade(&instance);
            let subscription = bus.subscribe(id, sync.group, move |msg| {
                let Some(instance) = weak.upgrade() else { return };
                match instance.try_borrow_mut() {
                    Ok(mut inst) => inst.deliver(msg),
                    Err(_) => warn!(chart = %id, "sync message dropped: chart busy"),
                };
            });
            instance.borrow_mut().subscription = Some(subscription);
        }
        instance
    }
}

impl<H: ChartHost> ChartInstance<H> {
    pub fn host(&self) -> &H { &self.host }
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }
    pub fn crosshair(&self) -> &Crosshair { &self.crosshair }
    pub fn is_subscribed(&self) -> bool { self.subscription.is_some() }

    /// Post-event hook.
    pub fn pointer(&mut self, event: PointerEvent) {
        self.crosshair.after_event(&mut self.host, &event);
    }

    /// Post-draw hook.
    pub fn draw(&mut self, surface: &mut dyn DrawSurface) {
        self.crosshair.after_draw(&self.host, surface);
    }

    /// Pre-tooltip-draw hook.
    pub fn tooltip_visible(&self) -> bool {
        self.crosshair.before_tooltip_draw(&self.host)
    }

    /// Items for a tooltip at `pointer`, interpolated where datasets opt in.
    pub fn interaction_items(&self, pointer: Point) -> Vec<InteractionItem> {
        interpolate_mode(&self.host, pointer)
    }

    pub fn zoom(&mut self, start: f64, end: f64) -> bool {
        self.crosshair.apply_zoom(&mut self.host, start, end)
    }

    pub fn pan_zoom(&mut self, increment: f64) -> bool {
        self.crosshair.pan_zoom(&mut self.host, increment)
    }

    /// Invoked by the host when its reset control is clicked.
    pub fn click_reset_control(&mut self) {
        self.crosshair.reset_zoom(&mut self.host, ResetOrigin::Local);
    }

    /// Destroy hook; also drops the bus subscription.
    pub fn destroy(&mut self) {
        self.crosshair.after_destroy(&mut self.host);
        self.subscription = None;
    }

    fn deliver(&mut self, msg: &SyncMessage) {
        self.crosshair.handle_sync(&mut self.host, msg);
    }
}
