// scene.rs - Pickable object arena
//
// Objects arrive whenever their model finishes loading and may be removed at
// any time. A fresh id never collides with a live object, so a stale id
// simply stops resolving.

use std::collections::BTreeMap;

use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self { translation: Vec3::ZERO, rotation: Quat::IDENTITY, scale: Vec3::ONE }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Axis-aligned box in object space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min: min.min(max), max: min.max(max) }
    }

    pub fn from_half_extents(half: Vec3) -> Self {
        Self::new(-half, half)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PickableObject {
    pub tag: String,
    pub transform: Transform,
    pub bounds: Bounds,
    /// 0xRRGGBB
    pub color: u32,
    pub label_visible: bool,
}

impl PickableObject {
    pub fn new(tag: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            tag: tag.into(),
            transform: Transform::default(),
            bounds,
            color: 0x000000,
            label_visible: false,
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.transform.translation = translation;
        self
    }

    pub fn rotated_y(mut self, angle: f32) -> Self {
        self.transform.rotation = Quat::from_rotation_y(angle) * self.transform.rotation;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.transform.scale = Vec3::splat(scale);
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Submarine model placed the way the demo scene places it
    pub fn submarine(placement: &Placement, model_bounds: Bounds) -> Self {
        Self::new(super::PICKABLE_TAG, model_bounds)
            .at(placement.position)
            .scaled(SUBMARINE_SCALE * placement.size)
            .rotated_y(placement.heading)
    }
}

/// Model units to world units for a size-1 submarine
pub const SUBMARINE_SCALE: f32 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    /// Radians about +Y
    pub heading: f32,
    pub size: f32,
}

pub const DEMO_FLEET: [Placement; 5] = [
    Placement { position: Vec3::new(1000.0, 1000.0, 1000.0), heading: std::f32::consts::FRAC_PI_2, size: 1.0 },
    Placement { position: Vec3::new(1500.0, 800.0, -2000.0), heading: std::f32::consts::FRAC_PI_4, size: 2.0 },
    Placement { position: Vec3::new(500.0, 1800.0, 4000.0), heading: std::f32::consts::FRAC_PI_6, size: 3.0 },
    Placement { position: Vec3::new(-2500.0, 1000.0, 4000.0), heading: std::f32::consts::PI * 1.5, size: 1.0 },
    Placement { position: Vec3::new(3500.0, 1000.0, -1000.0), heading: std::f32::consts::TAU, size: 2.0 },
];

#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: BTreeMap<ObjectId, PickableObject>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, object: PickableObject) -> ObjectId {
        // Counter wraps after 2^32 inserts; skip ids still in use
        while self.objects.contains_key(&ObjectId(self.next_id)) {
            self.next_id = self.next_id.wrapping_add(1);
        }
        let id = ObjectId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.objects.insert(id, object);
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<PickableObject> {
        self.objects.remove(&id)
    }

    pub fn get(&self, id: ObjectId) -> Option<&PickableObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PickableObject> {
        self.objects.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ascending id order (insertion order until the id counter wraps)
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &PickableObject)> {
        self.objects.iter().map(|(&id, obj)| (id, obj))
    }
}
