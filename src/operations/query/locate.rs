use crate::error::Result;
use crate::math::{ensure_finite, Point2};
use crate::topology::Face;

/// Returns the id of the first face whose polygon contains `point`.
///
/// A linear scan in the order supplied: overlapping faces resolve to the
/// first-declared match, so callers must pass faces in a stable order.
/// `None` means no face contains the point.
///
/// # Errors
///
/// Returns `GeometryError::InvalidArgument` if `point` is not finite.
pub fn locate_face<'a, K>(
    point: &Point2,
    faces: impl IntoIterator<Item = (K, &'a Face)>,
) -> Result<Option<K>> {
    ensure_finite(point, "query point")?;
    let found = faces
        .into_iter()
        .find(|(_, face)| face.polygon().contains(point))
        .map(|(id, _)| id);
    tracing::trace!(x = point.x, y = point.y, found = found.is_some(), "locate face");
    Ok(found)
}
