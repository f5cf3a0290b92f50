//! Foreground and background color pickers.

use crate::config::PlaneAxes;
use crate::error::ToolError;
use crate::options::ChannelOptions;
use crate::resolver::CoordinateResolver;
use crate::tool::{ClickEvent, Tool, ToolTarget};
use pixfill_core::RasterMut;
use pixfill_paint::ChannelSampler;

/// Which option slot a picker writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PickSlot {
    /// The foreground vector.
    Foreground,
    /// The background vector.
    Background,
}

impl PickSlot {
    fn label(self) -> &'static str {
        match self {
            Self::Foreground => "FG",
            Self::Background => "BG",
        }
    }
}

/// Copies the channel vector under a left click into the shared options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPickerTool {
    slot: PickSlot,
    resolver: CoordinateResolver,
}

impl ColorPickerTool {
    /// Picker for `slot` on the X/Y plane.
    pub fn new(slot: PickSlot) -> Self {
        Self::with_plane_axes(slot, PlaneAxes::default())
    }

    /// Picker for `slot` on an explicit plane.
    pub fn with_plane_axes(slot: PickSlot, axes: PlaneAxes) -> Self {
        Self {
            slot,
            resolver: CoordinateResolver::new(axes),
        }
    }

    /// The slot this picker writes.
    pub fn slot(&self) -> PickSlot {
        self.slot
    }

    /// Status line such as `FG = (255,0,0)`.
    pub fn description(&self, options: &ChannelOptions) -> String {
        let values = match self.slot {
            PickSlot::Foreground => options.foreground(),
            PickSlot::Background => options.background(),
        };
        format!("{} = {values}", self.slot.label())
    }
}

impl<R: RasterMut> Tool<R> for ColorPickerTool {
    fn name(&self) -> &str {
        match self.slot {
            PickSlot::Foreground => "FgColorPicker",
            PickSlot::Background => "BgColorPicker",
        }
    }

    fn on_click(
        &mut self,
        event: &ClickEvent,
        target: &mut ToolTarget<'_, R>,
    ) -> Result<bool, ToolError> {
        if !event.is_left() {
            return Ok(false);
        }
        let Some(address) = target.resolve(&self.resolver, event.point)? else {
            return Ok(true);
        };
        let Some(raster) = target.raster.as_deref() else {
            return Ok(true);
        };

        let values = ChannelSampler::new(raster).read(&address)?;
        log::info!("{} = {values}", self.slot.label());
        match self.slot {
            PickSlot::Foreground => target.options.set_foreground(values),
            PickSlot::Background => target.options.set_background(values),
        }
        Ok(true)
    }
}
