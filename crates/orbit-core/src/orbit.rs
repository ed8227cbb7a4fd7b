//! Orbit layout: places every card on a circle around the vertical axis from
//! a single global rotation angle and picks the card facing the viewer.

use crate::constants::*;
use glam::DVec3;

/// Per-card transform produced by a layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    /// Offset from the orbit centre in px (x right, y down, z toward the viewer).
    pub position: DVec3,
    /// Rotation around the vertical axis in degrees. Unbounded.
    pub rotation_y_deg: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
    /// 1 when facing the viewer, 0 when directly behind the axis.
    pub depth: f64,
}

/// Rendering capability a card exposes to the layout engine.
pub trait VisualCard {
    fn set_transform(&mut self, transform: &CardTransform);
    fn set_label(&mut self, text: &str);
    fn set_front(&mut self, front: bool);
}

/// Transform of card `index` out of `count` for the given base rotation.
pub fn card_transform(base_rotation: f64, index: usize, count: usize) -> CardTransform {
    let step = 360.0 / count.max(1) as f64;
    let angle = base_rotation + step * index as f64;
    let (sin, cos) = angle.to_radians().sin_cos();
    let depth = ((cos + 1.0) / 2.0).clamp(0.0, 1.0);

    CardTransform {
        position: DVec3::new(sin * ORBIT_RADIUS, ARCH_HEIGHT - depth * ARCH_HEIGHT, cos * ORBIT_RADIUS),
        rotation_y_deg: angle,
        scale: (SCALE_MIN + depth * SCALE_SPAN).clamp(SCALE_MIN, scale_max()),
        opacity: (OPACITY_MIN + depth * OPACITY_SPAN).clamp(OPACITY_MIN, opacity_max()),
        z_index: Z_INDEX_BASE + (depth * Z_INDEX_SPAN).round() as i32,
        depth,
    }
}

/// Index of the deepest entry; the first one wins exact ties.
#[inline]
pub fn front_index(depths: impl IntoIterator<Item = f64>) -> Option<usize> {
    let mut best = None::<(usize, f64)>;
    for (i, d) in depths.into_iter().enumerate() {
        match best {
            Some((_, bd)) if d <= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Position every card and flag exactly one as front. Returns the front
/// index, or `None` for an empty card set.
pub fn layout<C: VisualCard>(cards: &mut [C], base_rotation: f64) -> Option<usize> {
    let count = cards.len();
    if count == 0 {
        return None;
    }
    let mut depths = Vec::with_capacity(count);
    for (i, card) in cards.iter_mut().enumerate() {
        let t = card_transform(base_rotation, i, count);
        card.set_transform(&t);
        depths.push(t.depth);
    }
    let front = front_index(depths);
    for (i, card) in cards.iter_mut().enumerate() {
        card.set_front(Some(i) == front);
    }
    front
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_zero_faces_viewer_at_rest() {
        let t = card_transform(0.0, 0, 5);
        assert!((t.depth - 1.0).abs() < 1e-12);
        assert!(t.position.x.abs() < 1e-9);
        assert!((t.position.z - ORBIT_RADIUS).abs() < 1e-9);
        assert!(t.position.y.abs() < 1e-9);
        assert_eq!(t.z_index, 200);
    }

    #[test]
    fn card_behind_axis_is_smallest() {
        let t = card_transform(0.0, 1, 2);
        assert!(t.depth.abs() < 1e-12);
        assert!((t.scale - SCALE_MIN).abs() < 1e-12);
        assert!((t.opacity - OPACITY_MIN).abs() < 1e-12);
        assert!((t.position.y - ARCH_HEIGHT).abs() < 1e-9);
        assert_eq!(t.z_index, Z_INDEX_BASE);
    }

    #[test]
    fn front_index_prefers_first_on_ties() {
        assert_eq!(front_index([0.5, 0.9, 0.9, 0.1]), Some(1));
        assert_eq!(front_index([0.3, 0.3]), Some(0));
        assert_eq!(front_index(std::iter::empty()), None);
    }
}
