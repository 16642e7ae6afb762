// picker.rs - Pointer picking with highlight/restore
//
// The pointer is latched by input events (last write wins) and consumed once
// per frame by `pick`. Only objects carrying the picker's tag take part.

use glam::Vec2;

use super::{Camera, ObjectId, Scene};

/// Tag carried by the submarine models
pub const PICKABLE_TAG: &str = "submarine";
pub const HIGHLIGHT_COLOR: u32 = 0xFF0000;
/// Pointer value meaning "not over the canvas"
pub const CLEARED_POINTER: f32 = -100_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    pub distance: f32,
}

/// Canvas bounding rect in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug)]
struct Picked {
    id: ObjectId,
    saved_color: u32,
}

#[derive(Clone, Debug)]
pub struct ObjectPicker {
    tag: String,
    highlight: u32,
    pointer: Vec2,
    picked: Option<Picked>,
}

impl Default for ObjectPicker {
    fn default() -> Self {
        Self::new(PICKABLE_TAG)
    }
}

impl ObjectPicker {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            highlight: HIGHLIGHT_COLOR,
            pointer: Vec2::ZERO,
            picked: None,
        }
    }

    pub fn with_highlight(mut self, color: u32) -> Self {
        self.highlight = color;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Latched pointer in normalized device coordinates
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn picked(&self) -> Option<ObjectId> {
        self.picked.map(|p| p.id)
    }

    /// Canvas pixel position to NDC, y up
    pub fn set_pointer(&mut self, x: f32, y: f32, canvas_width: f32, canvas_height: f32) {
        if !(canvas_width > 0.0 && canvas_height > 0.0) {
            log::warn!("ignoring pointer on {canvas_width}x{canvas_height} canvas");
            return;
        }
        self.pointer = Vec2::new(x / canvas_width * 2.0 - 1.0, y / canvas_height * -2.0 + 1.0);
    }

    /// CSS client position to NDC via the canvas bounding rect
    pub fn set_pointer_from_client(&mut self, client: Vec2, rect: CanvasRect, canvas_size: Vec2) {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            log::warn!("ignoring pointer on collapsed canvas rect");
            return;
        }
        let x = (client.x - rect.left) * canvas_size.x / rect.width;
        let y = (client.y - rect.top) * canvas_size.y / rect.height;
        self.set_pointer(x, y, canvas_size.x, canvas_size.y);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = Vec2::splat(CLEARED_POINTER);
    }

    /// Tagged objects under the pointer, nearest first. No side effects.
    pub fn intersect(&self, scene: &Scene, camera: &Camera) -> Vec<PickHit> {
        let Some(ray) = camera.ray_through(self.pointer) else {
            return Vec::new();
        };

        let mut hits: Vec<PickHit> = scene
            .iter()
            .filter(|(_, obj)| obj.tag == self.tag)
            .filter_map(|(id, obj)| {
                let distance = ray.hit_obb(&obj.transform.matrix(), obj.bounds.min, obj.bounds.max)?;
                (distance >= camera.near && distance <= camera.far).then_some(PickHit { id, distance })
            })
            .collect();

        // Stable: equal distances keep insertion order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Undo the current highlight, if any
    pub fn restore(&mut self, scene: &mut Scene) {
        let Some(prev) = self.picked.take() else { return };
        match scene.get_mut(prev.id) {
            Some(obj) => {
                obj.color = prev.saved_color;
                obj.label_visible = false;
                log::trace!("unpicked {:?}", prev.id);
            }
            None => log::trace!("picked object {:?} was removed", prev.id),
        }
    }

    /// Per-frame pick: restore the previous highlight, then highlight the
    /// nearest tagged object under the pointer.
    pub fn pick(&mut self, scene: &mut Scene, camera: &Camera) -> Option<ObjectId> {
        self.restore(scene);

        let hit = self.intersect(scene, camera).into_iter().next()?;
        let obj = scene.get_mut(hit.id)?;

        obj.label_visible = true;
        self.picked = Some(Picked { id: hit.id, saved_color: obj.color });
        obj.color = self.highlight;

        log::trace!("picked {:?} at {:.1}", hit.id, hit.distance);
        Some(hit.id)
    }
}
