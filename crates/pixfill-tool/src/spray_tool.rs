//! Spray can tool.

use crate::config::{ConfigError, SprayConfig};
use crate::error::ToolError;
use crate::events::EventPublisher;
use crate::resolver::CoordinateResolver;
use crate::tool::{notify, ClickEvent, Tool, ToolTarget};
use pixfill_core::RasterMut;
use pixfill_paint::{PaintSurface, SprayCan};

/// Sprays a burst of dots on every left press and drag step.
#[derive(Debug)]
pub struct SprayCanTool {
    resolver: CoordinateResolver,
    can: SprayCan,
    publisher: Option<EventPublisher>,
}

impl SprayCanTool {
    /// Build the tool from a validated config.
    pub fn new(config: SprayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            resolver: CoordinateResolver::new(config.plane_axes),
            can: config.build_can()?,
            publisher: None,
        })
    }

    /// Publish a redraw event after every burst.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// The underlying spray engine.
    pub fn can(&self) -> &SprayCan {
        &self.can
    }

    fn burst<R: RasterMut>(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        let Some(center) = target.resolve(&self.resolver, event.point)? else {
            return Ok(true);
        };
        let Some(raster) = target.raster.as_deref_mut() else {
            return Ok(true);
        };
        let dataset = raster.id();
        let element = raster.element_type();

        let mut surface = PaintSurface::new(raster);
        let channels = surface.sampler().channel_count(&center)?;
        let value = target.options.value_for(event.alt, channels, element);
        self.can.spray(&center, &mut surface, &value)?;
        notify(self.publisher.as_ref(), dataset);
        Ok(true)
    }
}

impl<R: RasterMut> Tool<R> for SprayCanTool {
    fn name(&self) -> &str {
        "SprayCan"
    }

    fn on_click(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        self.burst(event, target)
    }

    fn on_drag(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        self.burst(event, target)
    }
}
