//! Screen point to raster address resolution.

use crate::canvas::{Canvas, PlaneView, ScreenPoint};
use crate::config::PlaneAxes;
use crate::error::ResolveError;
use pixfill_core::Raster;
use pixfill_space::{AxisRoles, RasterAddress};

/// Maps a click on a canvas to a fully specified [`RasterAddress`].
///
/// Resolution is pure. A point outside the drawn image, or one whose
/// floored data coordinate falls outside the plane, is a miss
/// (`Ok(None)`). Configuration problems (plane axes the raster lacks, a
/// view position outside a fixed axis) are errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CoordinateResolver {
    axes: PlaneAxes,
}

impl CoordinateResolver {
    /// Resolver for the given plane axes.
    pub fn new(axes: PlaneAxes) -> Self {
        Self { axes }
    }

    /// The configured plane axes.
    pub fn plane_axes(&self) -> PlaneAxes {
        self.axes
    }

    /// Axis roles of `raster` under this resolver's plane axes.
    pub fn roles<R: Raster + ?Sized>(&self, raster: &R) -> Result<AxisRoles, ResolveError> {
        Ok(AxisRoles::for_raster(raster, self.axes.u, self.axes.v)?)
    }

    /// Resolve `point` against `raster`.
    pub fn resolve<R: Raster + ?Sized>(
        &self,
        point: ScreenPoint,
        canvas: &dyn Canvas,
        view: &dyn PlaneView,
        raster: &R,
    ) -> Result<Option<RasterAddress>, ResolveError> {
        if !canvas.is_point_in_image(point) {
            log::debug!("({}, {}) is outside the image", point.x, point.y);
            return Ok(None);
        }
        let roles = self.roles(raster)?;

        let data = canvas.screen_to_data(point);
        let (Some(u), Some(v)) = (floor_index(data.x), floor_index(data.y)) else {
            log::debug!("({}, {}) maps to non-finite data {data:?}", point.x, point.y);
            return Ok(None);
        };
        if !roles.plane_bounds().contains(u, v) {
            log::debug!("data ({u}, {v}) is off the plane");
            return Ok(None);
        }

        let address = RasterAddress::new(&roles, u, v, &view.plane_position())?;
        Ok(Some(address))
    }
}

fn floor_index(coord: f64) -> Option<i64> {
    let floored = coord.floor();
    if floored.is_finite() && floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
        Some(floored as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DataPoint;
    use pixfill_core::AxisType::{self, Channel, Time, X, Y, Z};
    use pixfill_core::ElementType;
    use pixfill_raster::DenseRaster;
    use pixfill_space::{AxisError, PlanePosition, SpaceError};
    use proptest::prelude::*;

    /// Identity calibration over a `w x h` image at screen origin.
    struct Grid {
        w: i32,
        h: i32,
        scale: f64,
    }

    impl Canvas for Grid {
        fn is_point_in_image(&self, p: ScreenPoint) -> bool {
            p.x >= 0 && p.y >= 0 && p.x < self.w && p.y < self.h
        }

        fn screen_to_data(&self, p: ScreenPoint) -> DataPoint {
            DataPoint::new(p.x as f64 * self.scale, p.y as f64 * self.scale)
        }
    }

    struct Slice(PlanePosition);

    impl PlaneView for Slice {
        fn plane_position(&self) -> PlanePosition {
            self.0.clone()
        }
    }

    fn grid(w: i32, h: i32) -> Grid {
        Grid { w, h, scale: 1.0 }
    }

    fn raster(layout: &[(AxisType, u64)]) -> DenseRaster {
        DenseRaster::new(layout, ElementType::U8).unwrap()
    }

    // ── Hits and misses ─────────────────────────────────────────

    #[test]
    fn resolves_inside_image() {
        let r = raster(&[(X, 8), (Y, 6)]);
        let addr = CoordinateResolver::default()
            .resolve(ScreenPoint::new(3, 4), &grid(8, 6), &Slice(PlanePosition::origin(2)), &r)
            .unwrap()
            .unwrap();
        assert_eq!((addr.u(), addr.v()), (3, 4));
        assert_eq!(addr.channel_axis(), None);
    }

    #[test]
    fn outside_image_is_miss() {
        let r = raster(&[(X, 8), (Y, 6)]);
        let got = CoordinateResolver::default()
            .resolve(ScreenPoint::new(8, 0), &grid(8, 6), &Slice(PlanePosition::origin(2)), &r)
            .unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn fractional_data_is_floored() {
        let r = raster(&[(X, 8), (Y, 8)]);
        let canvas = Grid {
            w: 100,
            h: 100,
            scale: 0.25,
        };
        let addr = CoordinateResolver::default()
            .resolve(ScreenPoint::new(7, 13), &canvas, &Slice(PlanePosition::origin(2)), &r)
            .unwrap()
            .unwrap();
        assert_eq!((addr.u(), addr.v()), (1, 3));
    }

    #[test]
    fn data_past_extent_is_miss() {
        // Image reports the point as inside but calibration overshoots the raster.
        let r = raster(&[(X, 4), (Y, 4)]);
        let got = CoordinateResolver::default()
            .resolve(ScreenPoint::new(5, 1), &grid(10, 10), &Slice(PlanePosition::origin(2)), &r)
            .unwrap();
        assert_eq!(got, None);
    }

    // ── Axis layouts ────────────────────────────────────────────

    #[test]
    fn channel_away_from_plane_axes() {
        let r = raster(&[(X, 5), (Z, 3), (Channel, 4), (Y, 6)]);
        let view = Slice(PlanePosition::new([0, 2, 0, 0]));
        let addr = CoordinateResolver::default()
            .resolve(ScreenPoint::new(1, 5), &grid(5, 6), &view, &r)
            .unwrap()
            .unwrap();
        assert_eq!(addr.u_axis(), 0);
        assert_eq!(addr.v_axis(), 3);
        assert_eq!(addr.channel_axis(), Some(2));
        assert_eq!(addr.other_axes(), &[(1, 2)]);
        assert_eq!(addr.position(3).as_slice(), &[1, 2, 3, 5]);
    }

    #[test]
    fn custom_plane_axes() {
        let r = raster(&[(X, 4), (Y, 4), (Z, 9)]);
        let resolver = CoordinateResolver::new(PlaneAxes { u: Z, v: X });
        let view = Slice(PlanePosition::new([0, 3, 0]));
        let addr = resolver
            .resolve(ScreenPoint::new(7, 2), &grid(9, 4), &view, &r)
            .unwrap()
            .unwrap();
        assert_eq!(addr.position(0).as_slice(), &[2, 3, 7]);
    }

    #[test]
    fn missing_plane_axis_is_error() {
        let r = raster(&[(X, 4), (Time, 4)]);
        let err = CoordinateResolver::default()
            .resolve(ScreenPoint::new(0, 0), &grid(4, 4), &Slice(PlanePosition::origin(2)), &r)
            .unwrap_err();
        assert_eq!(err, ResolveError::Axis(AxisError::MissingAxis { axis: Y }));
    }

    #[test]
    fn bad_view_position_is_error() {
        let r = raster(&[(X, 4), (Y, 4), (Z, 2)]);
        let err = CoordinateResolver::default()
            .resolve(
                ScreenPoint::new(0, 0),
                &grid(4, 4),
                &Slice(PlanePosition::new([0, 0, 5])),
                &r,
            )
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::Space(SpaceError::CoordOutOfBounds {
                axis: 2,
                value: 5,
                extent: 2
            })
        );
    }

    #[test]
    fn non_finite_data_is_miss() {
        struct Broken;
        impl Canvas for Broken {
            fn is_point_in_image(&self, _: ScreenPoint) -> bool {
                true
            }
            fn screen_to_data(&self, _: ScreenPoint) -> DataPoint {
                DataPoint::new(f64::NAN, 0.0)
            }
        }
        let r = raster(&[(X, 4), (Y, 4)]);
        let got = CoordinateResolver::default()
            .resolve(ScreenPoint::new(0, 0), &Broken, &Slice(PlanePosition::origin(2)), &r)
            .unwrap();
        assert_eq!(got, None);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn axis_order_does_not_change_the_sampled_position(
            perm in Just(vec![X, Y, Channel, Z]).prop_shuffle(),
            x in 0i32..4,
            y in 0i32..5,
            z in 0i64..3,
        ) {
            let extent = |t: AxisType| match t {
                X => 4,
                Y => 5,
                Channel => 2,
                _ => 3,
            };
            let layout: Vec<_> = perm.iter().map(|&t| (t, extent(t))).collect();
            let r = raster(&layout);

            let mut plane = PlanePosition::origin(4);
            let z_axis = perm.iter().position(|&t| t == Z).unwrap();
            plane.set(z_axis, z);

            let addr = CoordinateResolver::default()
                .resolve(ScreenPoint::new(x, y), &grid(4, 5), &Slice(plane), &r)
                .unwrap()
                .unwrap();
            let pos = addr.position(1);
            for (axis, &t) in perm.iter().enumerate() {
                let expected = match t {
                    X => x as i64,
                    Y => y as i64,
                    Channel => 1,
                    _ => z,
                };
                prop_assert_eq!(pos[axis], expected);
            }
        }
    }
}
