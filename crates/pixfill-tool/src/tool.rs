//! The tool trait and the per-event context tools run against.

use crate::canvas::{Canvas, PlaneView, ScreenPoint};
use crate::error::ToolError;
use crate::events::EventPublisher;
use crate::options::ChannelOptions;
use crate::resolver::CoordinateResolver;
use pixfill_core::{DatasetId, Raster, RasterMut};
use pixfill_space::RasterAddress;

/// Mouse button of an interaction event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// A press, drag or release at a screen point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickEvent {
    /// Where the event happened.
    pub point: ScreenPoint,
    /// Which button is involved.
    pub button: MouseButton,
    /// Whether the alt modifier was held.
    pub alt: bool,
}

impl ClickEvent {
    /// Left-button event at `(x, y)` with no modifier.
    pub fn left(x: i32, y: i32) -> Self {
        Self {
            point: ScreenPoint::new(x, y),
            button: MouseButton::Left,
            alt: false,
        }
    }

    /// The same event with the alt modifier held.
    pub fn with_alt(self) -> Self {
        Self { alt: true, ..self }
    }

    /// The same event with a different button.
    pub fn with_button(self, button: MouseButton) -> Self {
        Self { button, ..self }
    }

    /// Whether this is a left-button event.
    pub fn is_left(&self) -> bool {
        self.button == MouseButton::Left
    }
}

/// Everything a tool touches while handling one event.
///
/// `raster` is `None` when the display has no active dataset; tools
/// consume such clicks without doing anything.
pub struct ToolTarget<'a, R> {
    /// Screen calibration of the active display.
    pub canvas: &'a dyn Canvas,
    /// Slice shown by the active display.
    pub view: &'a dyn PlaneView,
    /// Shared foreground and background values.
    pub options: &'a mut ChannelOptions,
    /// The active dataset, if any.
    pub raster: Option<&'a mut R>,
}

impl<'a, R> ToolTarget<'a, R> {
    /// Target with no active dataset.
    pub fn new(
        canvas: &'a dyn Canvas,
        view: &'a dyn PlaneView,
        options: &'a mut ChannelOptions,
    ) -> Self {
        Self {
            canvas,
            view,
            options,
            raster: None,
        }
    }

    /// Attach the active dataset.
    pub fn with_raster(mut self, raster: &'a mut R) -> Self {
        self.raster = Some(raster);
        self
    }
}

impl<R: Raster> ToolTarget<'_, R> {
    /// Resolve `point` on the active dataset.
    ///
    /// `Ok(None)` when there is no dataset or the point misses.
    pub fn resolve(
        &self,
        resolver: &CoordinateResolver,
        point: ScreenPoint,
    ) -> Result<Option<RasterAddress>, ToolError> {
        let Some(raster) = self.raster.as_deref() else {
            log::warn!("click at ({}, {}) with no active dataset", point.x, point.y);
            return Ok(None);
        };
        Ok(resolver.resolve(point, self.canvas, self.view, raster)?)
    }
}

/// An interactive raster tool.
///
/// Handlers return whether they consumed the event. The defaults ignore
/// everything, so a tool only overrides the events it cares about.
/// Object safe: a dispatcher can hold `Box<dyn Tool<R>>`.
pub trait Tool<R: RasterMut> {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Button pressed.
    fn on_click(
        &mut self,
        _event: &ClickEvent,
        _target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        Ok(false)
    }

    /// Pointer moved with a button held.
    fn on_drag(
        &mut self,
        _event: &ClickEvent,
        _target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        Ok(false)
    }

    /// Button released.
    fn on_release(
        &mut self,
        _event: &ClickEvent,
        _target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        Ok(false)
    }
}

pub(crate) fn notify(publisher: Option<&EventPublisher>, dataset: DatasetId) {
    if let Some(publisher) = publisher {
        publisher.dataset_updated(dataset);
    }
}
