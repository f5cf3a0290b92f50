//! Click-to-fill tool.

use crate::canvas::ScreenPoint;
use crate::config::{ConfigError, FloodFillConfig};
use crate::error::ToolError;
use crate::events::EventPublisher;
use crate::resolver::CoordinateResolver;
use crate::tool::{notify, ClickEvent, Tool, ToolTarget};
use pixfill_core::RasterMut;
use pixfill_paint::{FloodFiller, PaintSurface};
use pixfill_space::Connectivity;

/// Flood fills the region under a left click with the foreground value,
/// or the background value when alt is held.
#[derive(Debug)]
pub struct FloodFillTool {
    resolver: CoordinateResolver,
    connectivity: Connectivity,
    line_width: u32,
    filler: FloodFiller,
    publisher: Option<EventPublisher>,
}

impl FloodFillTool {
    /// Build the tool from a validated config.
    pub fn new(config: FloodFillConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            resolver: CoordinateResolver::new(config.plane_axes),
            connectivity: config.connectivity,
            line_width: 1,
            filler: FloodFiller::new(),
            publisher: None,
        })
    }

    /// Publish a redraw event after every fill.
    pub fn with_publisher(mut self, publisher: EventPublisher) -> Self {
        self.publisher = Some(publisher);
        self
    }

    /// Set the neighbourhood used by later fills.
    pub fn set_connectivity(&mut self, connectivity: Connectivity) {
        self.connectivity = connectivity;
    }

    /// Current neighbourhood.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Set the surface width the tool leaves behind. Zero becomes 1.
    ///
    /// Fills always paint single cells regardless of this setting.
    pub fn set_line_width(&mut self, width: u32) {
        self.line_width = width.max(1);
    }

    /// Current line width.
    pub fn line_width(&self) -> u32 {
        self.line_width
    }

    /// Fill from the cell under `point`.
    ///
    /// Returns `Ok(true)` whenever the click was handled, including misses
    /// and clicks with no active dataset, which paint nothing.
    pub fn on_seed_click<R: RasterMut>(
        &mut self,
        point: ScreenPoint,
        alt: bool,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        let Some(seed) = target.resolve(&self.resolver, point)? else {
            return Ok(true);
        };
        let Some(raster) = target.raster.as_deref_mut() else {
            return Ok(true);
        };
        let dataset = raster.id();
        let element = raster.element_type();

        let mut surface = PaintSurface::new(raster);
        surface.set_line_width(self.line_width);
        let channels = surface.sampler().channel_count(&seed)?;
        let value = target.options.value_for(alt, channels, element);

        self.filler
            .fill(&seed, self.connectivity, &mut surface, &value)?;
        notify(self.publisher.as_ref(), dataset);
        Ok(true)
    }
}

impl<R: RasterMut> Tool<R> for FloodFillTool {
    fn name(&self) -> &str {
        "FloodFill"
    }

    fn on_click(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        self.on_seed_click(event.point, event.alt, target)
    }
}
