use super::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Point on the unit sphere for a latitude/longitude pair (radians).
#[inline]
pub fn sphere_point(lat: f32, lon: f32) -> Vec3 {
    Vec3::new(lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin())
}

/// Latitude rings of unit-sphere points, closed in longitude. Built once.
#[derive(Clone, Debug)]
pub struct SphereMesh {
    rings: Vec<Vec<Vec3>>,
}

impl SphereMesh {
    pub fn generate(rings: usize, segments: usize) -> Self {
        let rings = (0..=rings)
            .map(|i| {
                let lat = (PI / rings as f32) * i as f32 - FRAC_PI_2;
                (0..=segments)
                    .map(|j| sphere_point(lat, (TAU / segments as f32) * j as f32))
                    .collect()
            })
            .collect();
        Self { rings }
    }

    pub fn rings(&self) -> &[Vec<Vec3>] {
        &self.rings
    }

    pub fn point_count(&self) -> usize {
        self.rings.iter().map(Vec::len).sum()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GlowPoint {
    pub position: Vec3,
    pub intensity: f32,
}

pub fn random_glow_points<R: Rng>(rng: &mut R, count: usize) -> Vec<GlowPoint> {
    (0..count)
        .map(|_| {
            let lat = (rng.gen::<f32>() - 0.5) * PI;
            let lon = rng.gen::<f32>() * TAU;
            GlowPoint {
                position: sphere_point(lat, lon),
                intensity: GLOW_INTENSITY_MIN + rng.gen::<f32>() * GLOW_INTENSITY_SPAN,
            }
        })
        .collect()
}

/// Auto-rotation plus user drag offsets that ease back to zero on release.
#[derive(Clone, Copy, Debug)]
pub struct RotationState {
    pub base_yaw: f32,
    pub base_pitch: f32,
    pub drag_yaw: f32,
    pub drag_pitch: f32,
    pub dragging: bool,
    last_pointer: Vec2,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            base_yaw: 0.0,
            base_pitch: GLOBE_BASE_PITCH,
            drag_yaw: 0.0,
            drag_pitch: 0.0,
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }
}

impl RotationState {
    pub fn yaw(&self) -> f32 {
        self.base_yaw + self.drag_yaw
    }

    pub fn pitch(&self) -> f32 {
        self.base_pitch + self.drag_pitch
    }

    /// Yaw about Y, then pitch about X.
    #[inline]
    pub fn orient(&self, p: Vec3) -> Vec3 {
        rotate_x(rotate_y(p, self.yaw()), self.pitch())
    }

    pub fn tick(&mut self) {
        if self.dragging {
            return;
        }
        self.base_yaw += GLOBE_AUTO_YAW;
        self.drag_yaw = ease_to_zero(self.drag_yaw);
        self.drag_pitch = ease_to_zero(self.drag_pitch);
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.dragging = true;
        self.last_pointer = at;
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        if !self.dragging {
            return;
        }
        let delta = at - self.last_pointer;
        self.drag_yaw += delta.x * GLOBE_DRAG_SENSITIVITY;
        self.drag_pitch = (self.drag_pitch + delta.y * GLOBE_DRAG_SENSITIVITY)
            .clamp(-GLOBE_PITCH_LIMIT, GLOBE_PITCH_LIMIT);
        self.last_pointer = at;
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Leaving the canvas ends a drag just like releasing the button.
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }
}

#[inline]
fn ease_to_zero(offset: f32) -> f32 {
    let next = offset * GLOBE_DRAG_EASING;
    if next.abs() < GLOBE_DRAG_SNAP {
        0.0
    } else {
        next
    }
}

#[inline]
pub fn rotate_y(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x * cos - p.z * sin, p.y, p.x * sin + p.z * cos)
}

#[inline]
pub fn rotate_x(p: Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Screen-space point; `z` is the pre-divide depth on the reference sphere, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Viewport the globe is drawn into, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeViewport {
    pub size: f32,
    pub radius: f32,
}

impl GlobeViewport {
    /// Square viewport for a container; the radius shrinks with the display.
    pub fn fit(container_width: f32, container_height: f32) -> Self {
        let size = container_width
            .min(container_height)
            .min(GLOBE_MAX_DISPLAY)
            .max(0.0);
        Self {
            size,
            radius: GLOBE_RADIUS * size / GLOBE_MAX_DISPLAY,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.size / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.size <= 0.0
    }

    /// Perspective divide with the viewer at `GLOBE_VIEW_DISTANCE`.
    ///
    /// Depth is measured on the reference-size sphere so perspective, culling
    /// and glow falloff look the same at every display size; only the screen
    /// offsets shrink with `radius`.
    pub fn project(&self, p: Vec3) -> Projected {
        let depth = p.z * GLOBE_RADIUS;
        let scale = GLOBE_VIEW_DISTANCE / (GLOBE_VIEW_DISTANCE - depth);
        let c = self.center();
        Projected {
            x: c.x + p.x * self.radius * scale,
            y: c.y + p.y * self.radius * scale,
            z: depth,
        }
    }
}

#[inline]
pub fn edge_visible(a: &Projected, b: &Projected) -> bool {
    a.z > GLOBE_EDGE_CULL_Z && b.z > GLOBE_EDGE_CULL_Z
}

#[inline]
pub fn glow_visible(p: &Projected) -> bool {
    p.z > GLOBE_GLOW_CULL_Z
}

#[derive(Clone, Copy, Debug)]
pub struct GlowSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

pub fn glow_sprite(p: &Projected, intensity: f32) -> GlowSprite {
    let depth_boost = 1.0 + p.z / GLOBE_DEPTH_FALLOFF;
    GlowSprite {
        x: p.x,
        y: p.y,
        radius: (GLOW_BASE_RADIUS * intensity * depth_boost).max(0.0),
        alpha: (GLOW_BASE_ALPHA * intensity * depth_boost).clamp(0.0, 1.0),
    }
}

/// Everything the renderer needs for one globe frame.
#[derive(Clone, Debug, Default)]
pub struct GlobeFrame {
    pub edges: Vec<(Vec2, Vec2)>,
    pub glows: Vec<GlowSprite>,
}

pub struct Globe {
    mesh: SphereMesh,
    glow_points: Vec<GlowPoint>,
    pub rotation: RotationState,
    projected: Vec<Vec<Projected>>,
}

impl Globe {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mesh = SphereMesh::generate(GLOBE_RINGS, GLOBE_SEGMENTS);
        let projected = mesh.rings().iter().map(|r| Vec::with_capacity(r.len())).collect();
        Self {
            mesh,
            glow_points: random_glow_points(rng, GLOBE_GLOW_COUNT),
            rotation: RotationState::default(),
            projected,
        }
    }

    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    pub fn glow_points(&self) -> &[GlowPoint] {
        &self.glow_points
    }

    pub fn tick(&mut self) {
        self.rotation.tick();
    }

    /// Rotate, project and cull the mesh and glow points for `viewport`.
    pub fn build_frame(&mut self, viewport: &GlobeViewport, out: &mut GlobeFrame) {
        out.edges.clear();
        out.glows.clear();

        let rotation = self.rotation;
        for (ring, dst) in self.mesh.rings.iter().zip(self.projected.iter_mut()) {
            dst.clear();
            dst.extend(ring.iter().map(|p| viewport.project(rotation.orient(*p))));
        }

        // Along each latitude ring
        for ring in &self.projected {
            for pair in ring.windows(2) {
                push_edge(&mut out.edges, &pair[0], &pair[1]);
            }
        }
        // Between neighbouring rings along each meridian
        for rings in self.projected.windows(2) {
            for (a, b) in rings[0].iter().zip(rings[1].iter()) {
                push_edge(&mut out.edges, a, b);
            }
        }

        for g in &self.glow_points {
            let p = viewport.project(rotation.orient(g.position));
            if glow_visible(&p) {
                out.glows.push(glow_sprite(&p, g.intensity));
            }
        }
    }
}

#[inline]
fn push_edge(edges: &mut Vec<(Vec2, Vec2)>, a: &Projected, b: &Projected) {
    if edge_visible(a, b) {
        edges.push((Vec2::new(a.x, a.y), Vec2::new(b.x, b.y)));
    }
}
