//! Grid particle wave with pointer-driven ripples.

use glam::{Mat4, Vec2, Vec3};

use super::PointVertex;
use crate::input::FrameInput;
use crate::params::WaveParams;

/// Fixed grid of points whose elevation is recomputed every frame
pub struct ParticleWave {
    /// Grid coordinates (y = 0), never written after construction
    base: Vec<Vec3>,
    /// Positions uploaded to the GPU, only y is rewritten
    current: Vec<PointVertex>,
    params: WaveParams,
    rotation_y: f32,
    dirty: bool,
}

impl ParticleWave {
    /// Lay out `point_count` points row by row on a square grid centred on
    /// the origin
    pub fn new(params: &WaveParams) -> Self {
        let count = params.point_count;
        let side = params.grid_side().max(1);
        let half = side as f32 / 2.0;

        let mut base = Vec::with_capacity(count);
        for i in 0..count {
            let row = (i / side) as f32;
            let col = (i % side) as f32;
            base.push(Vec3::new(
                (col - half) * params.grid_spacing,
                0.0,
                (row - half) * params.grid_spacing,
            ));
        }

        let current = base
            .iter()
            .map(|p| PointVertex {
                position: p.to_array(),
            })
            .collect();

        Self {
            base,
            current,
            params: params.clone(),
            rotation_y: 0.0,
            dirty: true,
        }
    }

    /// Tick from host frame input
    pub fn update(&mut self, frame: &FrameInput) {
        self.update_at(frame.elapsed_s, frame.pointer_world());
    }

    /// Recompute every elevation for time `time_s`
    ///
    /// # Arguments
    /// * `time_s` - Elapsed seconds
    /// * `pointer` - Pointer on the field plane (x = world X, y = world Z),
    ///   `None` disables the ripple term
    pub fn update_at(&mut self, time_s: f32, pointer: Option<Vec2>) {
        let p = &self.params;
        let centre = pointer.map(|w| w * p.pointer_pull);

        for (base, vertex) in self.base.iter().zip(self.current.iter_mut()) {
            let wave = (base.x * p.wave_frequency_x + time_s * p.wave_speed_x).sin()
                * p.wave_amplitude
                + (base.z * p.wave_frequency_z + time_s * p.wave_speed_z).cos()
                    * p.wave_amplitude;

            let ripple = match centre {
                Some(c) => {
                    let dist = Vec2::new(base.x, base.z).distance(c);
                    let influence = falloff(dist, p.falloff_radius);
                    if influence > 0.0 {
                        (dist * p.ripple_frequency - time_s * p.ripple_speed).sin()
                            * influence
                            * p.ripple_amplitude
                    } else {
                        0.0
                    }
                }
                None => 0.0,
            };

            vertex.position[1] = wave + ripple;
        }

        self.rotation_y = time_s * p.spin_rate;
        self.dirty = true;
    }

    /// Current positions (GPU layout)
    pub fn positions(&self) -> &[PointVertex] {
        &self.current
    }

    /// Grid coordinates the wave is computed from
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Spin about +Y applied to the whole field
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.rotation_y)
    }

    /// Whether positions changed since the last upload; clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Linear influence falloff, 1 at the centre and 0 from `radius` outward
pub fn falloff(dist: f32, radius: f32) -> f32 {
    (1.0 - dist / radius).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn ambient_height(base: Vec3, t: f32) -> f32 {
        (base.x * 2.0 + t * 0.8).sin() * 0.1 + (base.z * 2.0 + t * 0.6).cos() * 0.1
    }

    #[test]
    fn test_grid_layout() {
        let params = WaveParams::default();
        let wave = ParticleWave::new(&params);

        assert_eq!(wave.len(), 2500);

        // First point sits at (-G/2 * S, 0, -G/2 * S)
        let first = wave.base_positions()[0];
        assert!((first - Vec3::new(-5.0, 0.0, -5.0)).length() < EPS);

        // Index 51 = row 1, col 1
        let p = wave.base_positions()[51];
        assert!((p - Vec3::new(-4.8, 0.0, -4.8)).length() < EPS);
    }

    #[test]
    fn test_construction_matches_base() {
        let wave = ParticleWave::new(&WaveParams::default());
        for (base, vertex) in wave.base_positions().iter().zip(wave.positions()) {
            assert_eq!(base.to_array(), vertex.position);
            assert_eq!(vertex.position[1], 0.0);
        }
    }

    #[test]
    fn test_partial_last_row() {
        let params = WaveParams {
            point_count: 10, // side 3, last row has one point
            grid_spacing: 1.0,
            ..WaveParams::default()
        };
        let wave = ParticleWave::new(&params);
        assert_eq!(wave.len(), 10);
        assert_eq!(wave.base_positions()[9], Vec3::new(-1.5, 0.0, 1.5));
    }

    #[test]
    fn test_xz_never_change() {
        let mut wave = ParticleWave::new(&WaveParams::default());
        let pointer = Some(Vec2::new(0.5, -0.5));

        for frame in 0..20 {
            wave.update_at(frame as f32 * 0.37, pointer);
            for (base, vertex) in wave.base_positions().iter().zip(wave.positions()) {
                assert_eq!(vertex.position[0], base.x);
                assert_eq!(vertex.position[2], base.z);
                assert_eq!(base.y, 0.0);
            }
        }
    }

    #[test]
    fn test_t0_without_pointer_is_pure_wave() {
        let mut wave = ParticleWave::new(&WaveParams::default());
        wave.update_at(0.0, None);

        for (base, vertex) in wave.base_positions().iter().zip(wave.positions()) {
            let expected = (base.x * 2.0).sin() * 0.1 + (base.z * 2.0).cos() * 0.1;
            assert!((vertex.position[1] - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_far_pointer_has_no_influence() {
        let params = WaveParams::default();
        let mut with_pointer = ParticleWave::new(&params);
        let mut without = ParticleWave::new(&params);

        // Ripple centre lands at (40, 40), far outside the 10x10 grid
        let t = 1.3;
        with_pointer.update_at(t, Some(Vec2::new(50.0, 50.0)));
        without.update_at(t, None);

        assert_eq!(with_pointer.positions(), without.positions());
    }

    #[test]
    fn test_pointer_only_affects_points_within_radius() {
        let params = WaveParams::default();
        let mut wave = ParticleWave::new(&params);

        let t = 0.7;
        // Pull of 0.8 puts the ripple centre at (2, 0)
        let pointer = Vec2::new(2.5, 0.0);
        let centre = pointer * params.pointer_pull;
        wave.update_at(t, Some(pointer));

        let mut touched = 0;
        for (base, vertex) in wave.base_positions().iter().zip(wave.positions()) {
            let dist = Vec2::new(base.x, base.z).distance(centre);
            let ripple = vertex.position[1] - ambient_height(*base, t);
            if dist > params.falloff_radius {
                assert!(ripple.abs() < EPS, "ripple {} at distance {}", ripple, dist);
            } else {
                let expected = (dist * 3.0 - t * 4.0).sin() * falloff(dist, 3.0) * 0.35;
                assert!((ripple - expected).abs() < 1e-4);
                touched += 1;
            }
        }
        assert!(touched > 0);
    }

    #[test]
    fn test_ambient_wave_is_periodic() {
        let params = WaveParams {
            wave_speed_z: 0.8, // Align both axes to a common period
            ..WaveParams::default()
        };
        let period = std::f32::consts::TAU / 0.8;

        let mut a = ParticleWave::new(&params);
        let mut b = ParticleWave::new(&params);
        a.update_at(1.25, None);
        b.update_at(1.25 + period, None);

        for (pa, pb) in a.positions().iter().zip(b.positions()) {
            assert!((pa.position[1] - pb.position[1]).abs() < 1e-4);
        }
    }

    #[test]
    fn test_rotation_and_dirty_flag() {
        let mut wave = ParticleWave::new(&WaveParams::default());
        assert!(wave.take_dirty()); // Fresh buffers need a first upload
        assert!(!wave.take_dirty());

        wave.update_at(4.0, None);
        assert!((wave.rotation_y() - 0.1).abs() < EPS);
        assert!(wave.take_dirty());
        assert!(!wave.take_dirty());
    }

    #[test]
    fn test_update_reuses_buffers() {
        let mut wave = ParticleWave::new(&WaveParams::default());
        let ptr = wave.positions().as_ptr();
        let base_ptr = wave.base_positions().as_ptr();

        for frame in 0..10 {
            wave.update_at(frame as f32 / 60.0, Some(Vec2::ONE));
        }

        assert_eq!(wave.positions().as_ptr(), ptr);
        assert_eq!(wave.base_positions().as_ptr(), base_ptr);
    }

    #[test]
    fn test_empty_field_ticks() {
        let params = WaveParams {
            point_count: 0,
            ..WaveParams::default()
        };
        let mut wave = ParticleWave::new(&params);
        wave.update_at(1.0, Some(Vec2::ZERO));
        assert!(wave.is_empty());
        assert!(wave.positions().is_empty());
    }

    #[test]
    fn test_falloff() {
        assert_eq!(falloff(0.0, 3.0), 1.0);
        assert!((falloff(1.5, 3.0) - 0.5).abs() < EPS);
        assert_eq!(falloff(3.0, 3.0), 0.0);
        assert_eq!(falloff(10.0, 3.0), 0.0);
    }
}
