use glam::{Vec2, Vec3};
use wasm_bindgen::prelude::*;

// ============================================================================
// SEAFLOOR - Procedural ocean floor and submarine picking
// ============================================================================

pub mod config;
pub mod error;
pub mod pick;
pub mod world;

pub use config::TerrainConfig;
pub use error::TerrainError;
pub use pick::{Camera, ObjectId, ObjectPicker, PickableObject, Scene};
pub use world::{HeightField, ShadedTexture, Terrain, TerrainSynthesizer};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("seafloor engine ready");
}

fn js_error(err: TerrainError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

// ----------------------------------------------------------------------------
// Terrain
// ----------------------------------------------------------------------------

/// Height field + texture handed to the renderer through linear memory
#[wasm_bindgen]
pub struct TerrainView {
    terrain: Terrain,
}

#[wasm_bindgen]
impl TerrainView {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, depth: u32, seed: f64) -> std::result::Result<TerrainView, JsValue> {
        let terrain = TerrainSynthesizer::default()
            .run(width as usize, depth as usize, seed)
            .map_err(js_error)?;
        Ok(Self { terrain })
    }

    pub fn width(&self) -> u32 { self.terrain.heights.width() as u32 }
    pub fn depth(&self) -> u32 { self.terrain.heights.depth() as u32 }
    pub fn texture_width(&self) -> u32 { self.terrain.texture.width() }
    pub fn texture_height(&self) -> u32 { self.terrain.texture.height() }

    pub fn heights_ptr(&self) -> *const u8 { self.terrain.heights.as_slice().as_ptr() }
    pub fn heights_len(&self) -> usize { self.terrain.heights.len() }
    pub fn texture_ptr(&self) -> *const u8 { self.terrain.texture.as_raw().as_ptr() }
    pub fn texture_len(&self) -> usize { self.terrain.texture.as_raw().len() }

    /// Plane vertex elevations (copied out)
    pub fn vertex_heights(&self) -> Vec<f32> {
        self.terrain.heights.vertex_heights(world::VERTICAL_SCALE)
    }
}

// ----------------------------------------------------------------------------
// Picking
// ----------------------------------------------------------------------------

/// Scene objects, camera and picker state driven by the render loop
#[wasm_bindgen]
pub struct PickerView {
    scene: Scene,
    camera: Camera,
    picker: ObjectPicker,
}

#[wasm_bindgen]
impl PickerView {
    #[wasm_bindgen(constructor)]
    pub fn new(aspect: f32) -> Self {
        let mut camera = Camera::default();
        camera.set_aspect(aspect);
        Self { scene: Scene::new(), camera, picker: ObjectPicker::default() }
    }

    /// Register a loaded object; half extents are in model space
    #[allow(clippy::too_many_arguments)]
    pub fn add_object(
        &mut self,
        tag: &str,
        x: f32, y: f32, z: f32,
        rotation_y: f32,
        scale: f32,
        color: u32,
        hx: f32, hy: f32, hz: f32,
    ) -> u32 {
        let object = PickableObject::new(tag, pick::Bounds::from_half_extents(Vec3::new(hx, hy, hz)))
            .at(Vec3::new(x, y, z))
            .scaled(scale)
            .rotated_y(rotation_y)
            .with_color(color);
        self.scene.insert(object).raw()
    }

    /// Register a submarine at one of the demo fleet slots
    pub fn add_fleet_submarine(&mut self, slot: usize, hx: f32, hy: f32, hz: f32) -> Option<u32> {
        let Some(placement) = pick::DEMO_FLEET.get(slot) else {
            log::warn!("no fleet slot {slot}");
            return None;
        };
        let bounds = pick::Bounds::from_half_extents(Vec3::new(hx, hy, hz));
        Some(self.scene.insert(PickableObject::submarine(placement, bounds)).raw())
    }

    pub fn remove_object(&mut self, id: u32) -> bool {
        self.scene.remove(ObjectId::from_raw(id)).is_some()
    }

    pub fn object_count(&self) -> usize { self.scene.len() }

    pub fn set_camera(&mut self, px: f32, py: f32, pz: f32, tx: f32, ty: f32, tz: f32) {
        self.camera.position = Vec3::new(px, py, pz);
        self.camera.target = Vec3::new(tx, ty, tz);
    }

    pub fn set_aspect(&mut self, aspect: f32) { self.camera.set_aspect(aspect); }

    pub fn set_pointer(&mut self, x: f32, y: f32, canvas_width: f32, canvas_height: f32) {
        self.picker.set_pointer(x, y, canvas_width, canvas_height);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_pointer_from_client(
        &mut self,
        client_x: f32, client_y: f32,
        rect_left: f32, rect_top: f32, rect_width: f32, rect_height: f32,
        canvas_width: f32, canvas_height: f32,
    ) {
        let rect = pick::CanvasRect { left: rect_left, top: rect_top, width: rect_width, height: rect_height };
        self.picker.set_pointer_from_client(
            Vec2::new(client_x, client_y),
            rect,
            Vec2::new(canvas_width, canvas_height),
        );
    }

    pub fn clear_pointer(&mut self) { self.picker.clear_pointer(); }

    /// Picked object id, undefined when nothing is under the pointer
    pub fn pick(&mut self) -> Option<u32> {
        self.picker.pick(&mut self.scene, &self.camera).map(ObjectId::raw)
    }

    /// Current color (0xRRGGBB), 0 for unknown ids
    pub fn color_of(&self, id: u32) -> u32 {
        self.scene.get(ObjectId::from_raw(id)).map_or(0, |o| o.color)
    }

    pub fn label_visible(&self, id: u32) -> bool {
        self.scene.get(ObjectId::from_raw(id)).is_some_and(|o| o.label_visible)
    }
}
