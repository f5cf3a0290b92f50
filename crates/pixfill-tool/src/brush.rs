//! Freehand paint brush.

use crate::config::{BrushConfig, ConfigError};
use crate::error::ToolError;
use crate::events::EventPublisher;
use crate::resolver::CoordinateResolver;
use crate::tool::{notify, ClickEvent, Tool, ToolTarget};
use pixfill_core::RasterMut;
use pixfill_paint::PaintSurface;
use pixfill_space::RasterAddress;

/// Paints square stamps on press and connected lines while dragging.
#[derive(Debug)]
pub struct BrushTool {
    resolver: CoordinateResolver,
    line_width: u32,
    last: Option<RasterAddress>,
    publisher: Option<EventPublisher>,
}

impl BrushTool {
    /// Build the tool from a validated config.
    pub fn new(config: BrushConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            resolver: CoordinateResolver::new(config.plane_axes),
            line_width: config.line_width,
            last: None,
            publisher: None,
        })
    }

    /// Publish a redraw event after every stroke segment.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Set the brush width. Zero becomes 1.
    pub fn set_line_width(&mut self, width: u32) {
        self.line_width = width.max(1);
    }

    /// Current brush width.
    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    /// Whether a stroke is in progress.
    pub fn is_stroking(&self) -> bool {
        self.last.is_some()
    }

    fn stroke<R: RasterMut>(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        let Some(address) = target.resolve(&self.resolver, event.point)? else {
            return Ok(true);
        };
        let Some(raster) = target.raster.as_deref_mut() else {
            return Ok(true);
        };
        let dataset = raster.id();
        let element = raster.element_type();

        let mut surface = PaintSurface::new(raster);
        surface.set_line_width(self.line_width);
        let channels = surface.sampler().channel_count(&address)?;
        let value = target.options.value_for(event.alt, channels, element);

        let from = self.last.take().unwrap_or_else(|| address.clone());
        surface.paint_line(&from, &address, &value)?;
        self.last = Some(address);
        notify(self.publisher.as_ref(), dataset);
        Ok(true)
    }
}

impl<R: RasterMut> Tool<R> for BrushTool {
    fn name(&self) -> &str {
        "PaintBrush"
    }

    fn on_click(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        self.last = None;
        self.stroke(event, target)
    }

    fn on_drag(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        self.stroke(event, target)
    }

    fn on_release(
        &mut self,
        event: &ClickEvent,
        _target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        Ok(self.last.take().is_some())
    }
}
